//! Quine–McCluskey fragment.
//!
//! Blocks render in a fixed order: stage tables, expression list, chart,
//! finding-unique table, essential implicants, final expression. A missing
//! artifact simply omits its block.

use bos_model::{ChartTableView, PrimeImplicantView, render::PI_STAGE_HEADERS};
use iced::widget::{column, text};
use iced::Element;

use crate::component::{owned_table, simple_table};
use crate::message::Message;
use crate::theme::{SPACING_MD, SPACING_SM, accent_text, muted_text};
use crate::view::calculator::section;

pub fn view(qm: &PrimeImplicantView) -> Element<'_, Message> {
    let mut content = column![].spacing(SPACING_MD);

    for table in &qm.stage_tables {
        let headers: Vec<String> = PI_STAGE_HEADERS.iter().map(ToString::to_string).collect();
        let rows: Vec<Vec<String>> = table.rows.iter().map(|r| r.to_vec()).collect();
        content = content.push(
            column![
                text(table.title.as_str()).size(15),
                owned_table(headers, rows)
            ]
            .spacing(SPACING_SM),
        );
    }

    if !qm.expressions.is_empty() {
        let mut list = column![text("Prime Implicant Expressions").size(15)].spacing(SPACING_SM);
        for line in &qm.expressions {
            list = list.push(text(line.as_str()).size(13).style(muted_text));
        }
        content = content.push(list);
    }

    if let Some(chart) = &qm.chart {
        content = content.push(chart_block(chart));
    }
    if let Some(unique) = &qm.finding_unique {
        content = content.push(chart_block(unique));
    }

    let mut essentials = column![text("Essential Prime Implicants").size(15)].spacing(SPACING_SM);
    if qm.essential.is_empty() {
        essentials = essentials.push(text("None").size(13).style(muted_text));
    } else {
        for implicant in &qm.essential {
            essentials = essentials.push(text(implicant.as_str()).size(13));
        }
    }
    content = content.push(essentials);

    content = content.push(
        text(format!("Final expression: {}", qm.final_expression))
            .size(15)
            .style(accent_text),
    );

    section("Quine–McCluskey", content.into())
}

fn chart_block(chart: &ChartTableView) -> Element<'_, Message> {
    let mut block = column![text(chart.title.as_str()).size(15)].spacing(SPACING_SM);
    for chunk in &chart.chunks {
        block = block.push(simple_table(&chunk.headers, &chunk.rows));
    }
    block.into()
}
