//! Calculator handlers.
//!
//! Submission runs validation first; only a clean expression produces a
//! request. Every submission bumps the request generation, dispatched or
//! not, and a completion carrying an older generation is discarded, so
//! neither a rapid re-submission nor a rejection can be overwritten by a
//! slower predecessor.

use bos_model::{OptimizationRequest, OptimizationResponse, RenderPlan, validate};
use iced::Task;
use iced::widget::{self, operation};

use crate::app::handler::navigation;
use crate::error::GuiError;
use crate::message::{CalculatorMessage, Message};
use crate::service::optimizer;
use crate::state::{AppState, Page};
use crate::view::EXPRESSION_INPUT_ID;

pub fn handle(state: &mut AppState, message: CalculatorMessage) -> Task<Message> {
    match message {
        CalculatorMessage::ExpressionChanged(value) => {
            state.calculator.expression = value;
            // Any input dismisses the current inline error.
            state.calculator.error = None;
            Task::none()
        }

        CalculatorMessage::MethodSelected(method) => {
            state.calculator.method = method;
            Task::none()
        }

        CalculatorMessage::SymbolClicked(symbol) => {
            state.calculator.expression.push_str(symbol);
            state.calculator.error = None;
            // Clicking a palette button steals focus; hand it back.
            focus_expression_input()
        }

        CalculatorMessage::Clear => {
            state.calculator.clear();
            focus_expression_input()
        }

        CalculatorMessage::ToggleDetail => {
            state.calculator.detail_expanded = !state.calculator.detail_expanded;
            Task::none()
        }

        CalculatorMessage::Submit => handle_submit(state),

        CalculatorMessage::Completed { seq, result } => handle_completed(state, seq, result),
    }
}

fn handle_submit(state: &mut AppState) -> Task<Message> {
    let calc = &mut state.calculator;

    if let Err(err) = validate(&calc.expression, calc.method) {
        // Result regions clear unconditionally before the error shows.
        calc.plan = None;
        calc.detail_expanded = false;
        calc.error = Some(err.to_string());
        // The rejection also supersedes anything still in flight, so a slow
        // earlier response cannot repopulate the regions just cleared.
        calc.request_seq += 1;
        calc.is_loading = false;
        tracing::debug!(error = %err, "expression rejected");
        return navigation::scroll_to_top();
    }
    calc.error = None;

    calc.request_seq += 1;
    calc.is_loading = true;
    let seq = calc.request_seq;
    let request = OptimizationRequest::new(calc.expression.clone(), calc.method);
    tracing::info!(seq, method = %calc.method, "dispatching optimization request");

    // Submitting always lands on the calculator page, scrolled to the top
    // with the input focused.
    state.history.navigate(Page::Calculator);

    Task::batch([
        focus_expression_input(),
        navigation::scroll_to_top(),
        optimizer::dispatch(state.config.endpoint.clone(), request, seq),
    ])
}

fn focus_expression_input() -> Task<Message> {
    operation::focus(widget::Id::new(EXPRESSION_INPUT_ID))
}

fn handle_completed(
    state: &mut AppState,
    seq: u64,
    result: Result<OptimizationResponse, GuiError>,
) -> Task<Message> {
    let calc = &mut state.calculator;

    if seq != calc.request_seq {
        tracing::debug!(seq, latest = calc.request_seq, "discarding stale completion");
        return Task::none();
    }
    calc.is_loading = false;

    match result {
        Ok(response) => {
            calc.error = None;
            calc.commit(RenderPlan::project(calc.method, &response));
        }
        Err(err) => {
            tracing::error!(error = %err, "optimization request failed");
            calc.plan = None;
            calc.error = Some(err.user_message().to_string());
        }
    }
    Task::none()
}
