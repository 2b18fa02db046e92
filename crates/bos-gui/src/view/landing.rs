//! Landing page.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::state::{AppState, Page};
use crate::theme::{SPACING_LG, SPACING_MD, SPACING_SM, button_primary, muted_text, panel};

pub fn view(_state: &AppState) -> Element<'_, Message> {
    let hero = column![
        text("Simplify Boolean expressions").size(34),
        text("Truth tables, Karnaugh maps, and Quine–McCluskey tabulation with a full derivation trace.")
            .size(16)
            .style(muted_text),
        Space::new().height(SPACING_SM),
        button(text("Open calculator").size(16))
            .on_press(Message::Navigate(Page::Calculator))
            .padding([SPACING_SM, SPACING_MD])
            .style(button_primary),
    ]
    .spacing(SPACING_SM);

    let features = row![
        feature_card(
            "Truth table",
            "Every input combination with its output, exportable as CSV.",
        ),
        feature_card(
            "Karnaugh map",
            "Visual grouping for expressions of up to four variables.",
        ),
        feature_card(
            "Quine–McCluskey",
            "Staged tabulation with prime implicant charts, up to eight variables.",
        ),
    ]
    .spacing(SPACING_MD);

    column![hero, Space::new().height(SPACING_LG), features]
        .spacing(SPACING_MD)
        .into()
}

fn feature_card<'a>(title: &'a str, body: &'a str) -> Element<'a, Message> {
    container(
        column![text(title).size(17), text(body).size(14).style(muted_text)].spacing(SPACING_SM),
    )
    .padding(SPACING_MD)
    .width(Length::FillPortion(1))
    .style(panel)
    .into()
}
