//! Support page.

use iced::widget::{column, container, text};
use iced::Element;

use crate::message::Message;
use crate::state::AppState;
use crate::theme::{SPACING_MD, SPACING_SM, muted_text, panel};
use crate::view::{page_intro, page_title};

pub fn view(_state: &AppState) -> Element<'_, Message> {
    column![
        page_title("Support"),
        page_intro("Quick answers for the most common questions."),
        entry(
            "Which operators can I use?",
            "AND (& or ·), OR (+ or |), NOT (' or !), and parentheses. Variables are single letters; case is ignored.",
        ),
        entry(
            "Why is my expression rejected?",
            "Karnaugh maps support at most 4 distinct variables and Quine–McCluskey at most 8. Plain simplification has no limit.",
        ),
        entry(
            "The service is unreachable",
            "Check that the optimization service is running and that the endpoint is correct, then submit again.",
        ),
    ]
    .spacing(SPACING_MD)
    .into()
}

fn entry<'a>(question: &'a str, answer: &'a str) -> Element<'a, Message> {
    container(
        column![
            text(question).size(16),
            text(answer).size(14).style(muted_text)
        ]
        .spacing(SPACING_SM),
    )
    .padding(SPACING_MD)
    .style(panel)
    .into()
}
