//! Algebraic-trace fragment.
//!
//! The derivation detail sits behind a toggle and starts collapsed on every
//! fresh render.

use bos_model::TraceView;
use iced::widget::{button, column, text};
use iced::Element;

use crate::message::{CalculatorMessage, Message};
use crate::theme::{SPACING_SM, SPACING_XS, accent_text, button_ghost, muted_text};
use crate::view::calculator::section;

pub fn view(trace: &TraceView, expanded: bool) -> Element<'_, Message> {
    let toggle_label = if expanded { "Hide detail" } else { "Show more" };
    let toggle = button(text(toggle_label).size(14))
        .on_press(Message::Calculator(CalculatorMessage::ToggleDetail))
        .style(button_ghost);

    let mut content = column![
        text(trace.simplified.as_str()).size(16).style(accent_text),
        toggle
    ]
    .spacing(SPACING_SM);

    if expanded {
        content = content.push(detail(trace));
    }

    section("Derivation", content.into())
}

fn detail(trace: &TraceView) -> Element<'_, Message> {
    let mut detail = column![].spacing(SPACING_SM);

    for thread in &trace.threads {
        let mut block = column![text(thread.name.as_str()).size(14)].spacing(SPACING_XS);
        for step in &thread.steps {
            block = block.push(text(format!("  {step}")).size(13).style(muted_text));
        }
        detail = detail.push(block);
    }

    if trace.groupings.is_empty() {
        detail = detail.push(text("No groupings.").size(13).style(muted_text));
    }
    for group in &trace.groupings {
        let mut block = column![text(group.name.as_str()).size(14)].spacing(SPACING_XS);
        for (thread, term) in &group.bindings {
            block = block.push(text(format!("  {thread}: {term}")).size(13).style(muted_text));
        }
        for step in &group.steps {
            block = block.push(text(format!("  {step}")).size(13).style(muted_text));
        }
        block = block.push(text(format!("  Result: {}", group.result)).size(13));
        detail = detail.push(block);
    }

    detail = detail.push(text(trace.main_join.as_str()).size(14));
    detail.into()
}
