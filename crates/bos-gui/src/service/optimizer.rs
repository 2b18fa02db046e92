//! Optimization service client.
//!
//! Provides the async round trip to the optimization endpoint using Iced's
//! `Task::perform` pattern. Every dispatched request carries its generation
//! number so the handler can discard completions that were overtaken by a
//! newer submission.

use bos_model::{OptimizationRequest, OptimizationResponse};
use iced::Task;

use crate::error::GuiError;
use crate::message::{CalculatorMessage, Message};

/// Dispatch one optimization request.
///
/// Returns a Task that will produce a `Completed` message tagged with `seq`.
pub fn dispatch(endpoint: String, request: OptimizationRequest, seq: u64) -> Task<Message> {
    Task::perform(
        async move { post_optimize(&endpoint, &request).await },
        move |result| Message::Calculator(CalculatorMessage::Completed { seq, result }),
    )
}

/// POST the request and parse the JSON body.
///
/// Any non-2xx status is a failure; a body that does not parse is a failure
/// of its own kind. Both surface to the user identically.
async fn post_optimize(
    endpoint: &str,
    request: &OptimizationRequest,
) -> Result<OptimizationResponse, GuiError> {
    let response = reqwest::Client::new()
        .post(endpoint)
        .json(request)
        .send()
        .await
        .map_err(GuiError::transport)?;

    let status = response.status();
    if !status.is_success() {
        return Err(GuiError::Status {
            status: status.as_u16(),
        });
    }

    let body = response.text().await.map_err(GuiError::transport)?;
    serde_json::from_str(&body).map_err(GuiError::malformed)
}
