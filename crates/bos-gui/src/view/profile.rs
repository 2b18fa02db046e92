//! Profile page.
//!
//! Reachable only by explicit navigation; the back button here returns to
//! the landing page instead of popping history.

use iced::widget::{column, container, text};
use iced::Element;

use crate::message::Message;
use crate::state::AppState;
use crate::theme::{SPACING_MD, SPACING_SM, muted_text, panel};
use crate::view::{page_intro, page_title};

pub fn view(_state: &AppState) -> Element<'_, Message> {
    let account = container(
        column![
            text("Guest session").size(17),
            text("Results are not persisted between sessions. Everything you compute stays on this machine.")
                .size(14)
                .style(muted_text),
        ]
        .spacing(SPACING_SM),
    )
    .padding(SPACING_MD)
    .style(panel);

    column![
        page_title("Profile"),
        page_intro("Session details and application information."),
        account,
    ]
    .spacing(SPACING_MD)
    .into()
}
