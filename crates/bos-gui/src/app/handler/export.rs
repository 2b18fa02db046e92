//! Truth-table export handlers.
//!
//! Three steps: the request opens the native save dialog, a chosen path
//! triggers the write, and the outcome lands back in the calculator state as
//! a one-line notice. With no rendered truth table the request is a silent
//! no-op.

use bos_model::TRUTH_TABLE_FILENAME;
use iced::Task;

use crate::message::{ExportMessage, Message};
use crate::state::AppState;

pub fn handle(state: &mut AppState, message: ExportMessage) -> Task<Message> {
    match message {
        ExportMessage::Requested => handle_requested(state),
        ExportMessage::PathSelected(None) => Task::none(),
        ExportMessage::PathSelected(Some(path)) => handle_path_selected(state, path),
        ExportMessage::Completed(result) => {
            match result {
                Ok(path) => {
                    tracing::info!(path = %path.display(), "truth table exported");
                    state.calculator.export_notice = Some(format!("Saved {}", path.display()));
                }
                Err(reason) => {
                    tracing::error!(error = %reason, "truth table export failed");
                    state.calculator.export_notice = Some("Export failed.".to_string());
                }
            }
            Task::none()
        }
    }
}

fn handle_requested(state: &mut AppState) -> Task<Message> {
    let exportable = state
        .calculator
        .plan
        .as_ref()
        .is_some_and(|plan| plan.export_enabled && plan.truth_table.is_some());
    if !exportable {
        return Task::none();
    }

    Task::perform(
        async {
            rfd::AsyncFileDialog::new()
                .set_file_name(TRUTH_TABLE_FILENAME)
                .add_filter("CSV", &["csv"])
                .save_file()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        |path| Message::Export(ExportMessage::PathSelected(path)),
    )
}

fn handle_path_selected(state: &mut AppState, path: std::path::PathBuf) -> Task<Message> {
    let Some(table) = state
        .calculator
        .plan
        .as_ref()
        .and_then(|plan| plan.truth_table.clone())
    else {
        return Task::none();
    };

    Task::perform(
        async move {
            bos_model::write_truth_table_csv(&table, &path)
                .map(|()| path)
                .map_err(|e| e.to_string())
        },
        |result| Message::Export(ExportMessage::Completed(result)),
    )
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::config::Config;
    use crate::message::ExportMessage;
    use crate::state::{AppState, Page};

    #[test]
    fn request_without_a_table_is_a_silent_no_op() {
        let mut state = AppState::new(Config::default(), Page::Calculator);
        let _ = handle(&mut state, ExportMessage::Requested);
        assert!(state.calculator.export_notice.is_none());
        assert!(state.calculator.error.is_none());
    }

    #[test]
    fn completion_records_the_outcome() {
        let mut state = AppState::new(Config::default(), Page::Calculator);

        let _ = handle(
            &mut state,
            ExportMessage::Completed(Ok("/tmp/truth_table.csv".into())),
        );
        assert_eq!(
            state.calculator.export_notice.as_deref(),
            Some("Saved /tmp/truth_table.csv")
        );

        let _ = handle(
            &mut state,
            ExportMessage::Completed(Err("disk full".to_string())),
        );
        assert_eq!(
            state.calculator.export_notice.as_deref(),
            Some("Export failed.")
        );
    }
}
