//! Minterm fragment.

use bos_model::MintermView;
use iced::widget::{column, row, text};
use iced::Element;

use crate::component::badge;
use crate::message::Message;
use crate::theme::{SPACING_SM, muted_text};
use crate::view::calculator::section;

pub fn view(minterms: &MintermView) -> Element<'_, Message> {
    let mut badges = row![].spacing(SPACING_SM);
    for label in &minterms.badges {
        badges = badges.push(badge(label.as_str()));
    }

    let content = column![
        badges,
        text(format!("Assignments: {}", minterms.values))
            .size(13)
            .style(muted_text),
    ]
    .spacing(SPACING_SM);

    section("Minterms", content.into())
}
