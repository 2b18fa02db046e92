//! Message types for the Elm architecture.
//!
//! Messages are grouped by category: top-level navigation and global events
//! here, calculator and export flows in their own enums.

use std::path::PathBuf;

use bos_model::{Method, OptimizationResponse};
use iced::keyboard;

use crate::error::GuiError;
use crate::state::Page;

/// Top-level application message.
#[derive(Debug, Clone)]
pub enum Message {
    /// Show a page, recording history when the page allows it.
    Navigate(Page),
    /// Step back through the history stack.
    NavigateBack,

    /// Calculator page messages.
    Calculator(CalculatorMessage),
    /// Truth-table export flow messages.
    Export(ExportMessage),

    /// Raw keyboard event from the runtime subscription.
    KeyPressed(keyboard::Key, keyboard::Modifiers),

    /// No-op placeholder for ignored events.
    Noop,
}

/// Messages for the calculator page.
#[derive(Debug, Clone)]
pub enum CalculatorMessage {
    /// The expression input changed.
    ExpressionChanged(String),
    /// A method was picked from the selector.
    MethodSelected(Method),
    /// An operator palette button appended its symbol to the expression.
    SymbolClicked(&'static str),
    /// Submit the current expression.
    Submit,
    /// Clear input and all result fragments.
    Clear,
    /// Toggle the trace detail region.
    ToggleDetail,
    /// A dispatched request finished.
    Completed {
        /// Generation of the request this completion belongs to.
        seq: u64,
        /// Parsed response, or the failure that ended the request.
        result: Result<OptimizationResponse, GuiError>,
    },
}

/// Messages for the truth-table export flow.
#[derive(Debug, Clone)]
pub enum ExportMessage {
    /// The export control was activated.
    Requested,
    /// The save dialog closed, with the chosen path if any.
    PathSelected(Option<PathBuf>),
    /// The file write finished.
    Completed(Result<PathBuf, String>),
}
