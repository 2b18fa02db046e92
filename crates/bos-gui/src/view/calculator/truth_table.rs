//! Truth-table fragment.

use bos_model::TruthTableView;
use iced::widget::{button, column, row, text};
use iced::Element;

use crate::component::simple_table;
use crate::message::{ExportMessage, Message};
use crate::theme::{SPACING_SM, button_ghost, muted_text};
use crate::view::calculator::section;

pub fn view<'a>(
    table: &'a TruthTableView,
    export_enabled: bool,
    export_notice: Option<&'a str>,
) -> Element<'a, Message> {
    let mut content = column![simple_table(&table.headers, &table.rows)].spacing(SPACING_SM);

    if export_enabled {
        let mut footer = row![
            button(text("Export CSV").size(14))
                .on_press(Message::Export(ExportMessage::Requested))
                .style(button_ghost)
        ]
        .spacing(SPACING_SM);
        if let Some(notice) = export_notice {
            footer = footer.push(text(notice).size(13).style(muted_text));
        }
        content = content.push(footer);
    }

    section("Truth Table", content.into())
}
