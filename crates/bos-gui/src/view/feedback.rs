//! Feedback page.

use iced::widget::{column, container, text};
use iced::Element;

use crate::message::Message;
use crate::state::AppState;
use crate::theme::{SPACING_MD, SPACING_SM, accent_text, muted_text, panel};
use crate::view::{page_intro, page_title};

pub fn view(_state: &AppState) -> Element<'_, Message> {
    let card = container(
        column![
            text("We read everything").size(16),
            text("Found a wrong simplification, a confusing derivation step, or a missing feature? Tell us about it.")
                .size(14)
                .style(muted_text),
            text("feedback@optimizer-studio.dev").size(14).style(accent_text),
        ]
        .spacing(SPACING_SM),
    )
    .padding(SPACING_MD)
    .style(panel);

    column![
        page_title("Feedback"),
        page_intro("Help us improve the optimizer."),
        card,
    ]
    .spacing(SPACING_MD)
    .into()
}
