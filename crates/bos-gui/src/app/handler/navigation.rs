//! Navigation handlers.

use iced::Task;
use iced::widget::{self, operation, scrollable};

use crate::message::Message;
use crate::state::{AppState, Page};
use crate::view::PAGE_SCROLL_ID;

/// Show a page, recording a history entry when the page allows it.
pub fn handle_navigate(state: &mut AppState, page: Page) -> Task<Message> {
    tracing::debug!(page = page.fragment(), "navigate");
    state.history.navigate(page);
    scroll_to_top()
}

/// Step back through history.
pub fn handle_back(state: &mut AppState) -> Task<Message> {
    let page = state.history.back();
    tracing::debug!(page = page.fragment(), "navigate back");
    scroll_to_top()
}

/// Every page transition starts at the top of the new page.
pub fn scroll_to_top() -> Task<Message> {
    operation::scroll_to(
        widget::Id::new(PAGE_SCROLL_ID),
        scrollable::AbsoluteOffset { x: 0.0, y: 0.0 },
    )
}
