//! Calculator page: input controls plus the result fragments.
//!
//! Result rendering works off one committed `RenderPlan`; every fragment
//! that is absent from the plan simply does not appear. There is no
//! per-fragment visibility state to get out of sync.

mod kmap;
mod minterm;
mod prime_implicants;
mod trace;
mod truth_table;

use bos_model::Method;
use iced::widget::{self, button, column, container, pick_list, row, text, text_input};
use iced::{Element, Length};

use crate::message::{CalculatorMessage, Message};
use crate::state::AppState;
use crate::theme::{
    SPACING_LG, SPACING_MD, SPACING_SM, SPACING_XS, accent_text, button_ghost, button_primary,
    error_text, muted_text, panel, text_input_default,
};
use crate::view::page_title;

/// Id of the expression input, focused when a submission lands here.
pub const EXPRESSION_INPUT_ID: &str = "expression-input";

/// Operator palette entries, appended verbatim to the expression.
const SYMBOLS: [(&str, &str); 7] = [
    ("AND", " & "),
    ("OR", " + "),
    ("NOT", "'"),
    ("(", "("),
    (")", ")"),
    ("0", "0"),
    ("1", "1"),
];

pub fn view(state: &AppState) -> Element<'_, Message> {
    let calc = &state.calculator;

    let input = text_input("e.g. (A & B) + C'", &calc.expression)
        .id(widget::Id::new(EXPRESSION_INPUT_ID))
        .on_input(|value| Message::Calculator(CalculatorMessage::ExpressionChanged(value)))
        .on_submit(Message::Calculator(CalculatorMessage::Submit))
        .padding(SPACING_SM)
        .style(text_input_default);

    let method = pick_list(Method::ALL, Some(calc.method), |m| {
        Message::Calculator(CalculatorMessage::MethodSelected(m))
    })
    .padding(SPACING_SM);

    let controls = row![
        input,
        method,
        button(text("Optimize").size(14))
            .on_press(Message::Calculator(CalculatorMessage::Submit))
            .padding(SPACING_SM)
            .style(button_primary),
        button(text("Clear").size(14))
            .on_press(Message::Calculator(CalculatorMessage::Clear))
            .padding(SPACING_SM)
            .style(button_ghost),
    ]
    .spacing(SPACING_SM);

    let mut palette = row![].spacing(SPACING_SM);
    for (label, symbol) in SYMBOLS {
        palette = palette.push(
            button(text(label).size(13))
                .on_press(Message::Calculator(CalculatorMessage::SymbolClicked(symbol)))
                .padding([SPACING_XS, SPACING_SM])
                .style(button_ghost),
        );
    }

    let mut body = column![page_title("Calculator"), controls, palette].spacing(SPACING_LG);

    if let Some(error) = &calc.error {
        body = body.push(text(error.as_str()).size(14).style(error_text));
    }

    if calc.is_loading {
        body = body.push(text("Computing…").size(14).style(muted_text));
    }

    if let Some(plan) = &calc.plan {
        let mut results = column![summary(&plan.summary)].spacing(SPACING_MD);

        if plan.table_unavailable {
            results = results.push(
                text("No truth table is available for this result.")
                    .size(14)
                    .style(muted_text),
            );
        }
        if let Some(table) = &plan.truth_table {
            results = results.push(truth_table::view(
                table,
                plan.export_enabled,
                calc.export_notice.as_deref(),
            ));
        }
        if let Some(map) = &plan.kmap {
            results = results.push(kmap::view(map));
        }
        if let Some(minterms) = &plan.minterms {
            results = results.push(minterm::view(minterms));
        }
        if let Some(trace) = &plan.trace {
            results = results.push(trace::view(trace, calc.detail_expanded));
        }
        if let Some(qm) = &plan.prime_implicants {
            results = results.push(prime_implicants::view(qm));
        }

        body = body.push(results);
    }

    body.into()
}

fn summary(summary: &bos_model::ResultSummary) -> Element<'_, Message> {
    section(
        "Result",
        column![
            text(summary.simplified.as_str()).size(22).style(accent_text),
            text(summary.explanation.as_str()).size(14).style(muted_text),
            text(format!("Duration: {}", summary.duration))
                .size(13)
                .style(muted_text),
        ]
        .spacing(SPACING_SM)
        .into(),
    )
}

/// Panel wrapper shared by all result fragments.
fn section<'a>(title: &'a str, content: Element<'a, Message>) -> Element<'a, Message> {
    container(column![text(title).size(17), content].spacing(SPACING_SM))
        .padding(SPACING_MD)
        .width(Length::Fill)
        .style(panel)
        .into()
}
