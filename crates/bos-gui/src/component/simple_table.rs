//! Plain table components.
//!
//! Render a header row plus striped data rows from stringified cells. Every
//! result table in the app is small enough to show unpaginated; wide charts
//! are split into chunks upstream, so each table can lay its columns out
//! evenly.

use iced::widget::{column, container, row, text};
use iced::{Element, Length, Theme};

use crate::theme::{TABLE_CELL_PADDING_X, TABLE_CELL_PADDING_Y, table_cell, table_header};

/// Build a table borrowing headers and row cells.
///
/// Rows shorter than the header are padded with empty cells so the grid
/// stays rectangular.
pub fn simple_table<'a, M: 'a>(headers: &'a [String], rows: &'a [Vec<String>]) -> Element<'a, M> {
    let width = Length::FillPortion(1);

    let mut header_row = row![].spacing(0);
    for header in headers {
        header_row = header_row.push(header_cell(header.as_str(), width));
    }

    let mut body = column![].spacing(0);
    for (row_idx, cells) in rows.iter().enumerate() {
        let is_even = row_idx % 2 == 0;
        let mut data_row = row![].spacing(0);
        for col_idx in 0..headers.len() {
            let cell = cells.get(col_idx).map(String::as_str).unwrap_or("");
            data_row = data_row.push(body_cell(cell.to_string(), width, is_even));
        }
        body = body.push(data_row);
    }

    column![header_row, body].into()
}

/// Build a table that takes ownership of its cells.
///
/// Used when the cell strings are synthesized during the view pass rather
/// than borrowed from state.
pub fn owned_table<'a, M: 'a>(headers: Vec<String>, rows: Vec<Vec<String>>) -> Element<'a, M> {
    let width = Length::FillPortion(1);
    let columns = headers.len();

    let mut header_row = row![].spacing(0);
    for header in headers {
        header_row = header_row.push(header_cell(header, width));
    }

    let mut body = column![].spacing(0);
    for (row_idx, mut cells) in rows.into_iter().enumerate() {
        let is_even = row_idx % 2 == 0;
        cells.resize(columns, String::new());
        let mut data_row = row![].spacing(0);
        for cell in cells {
            data_row = data_row.push(body_cell(cell, width, is_even));
        }
        body = body.push(data_row);
    }

    column![header_row, body].into()
}

fn header_cell<'a, M: 'a>(label: impl text::IntoFragment<'a>, width: Length) -> Element<'a, M> {
    container(text(label).size(13))
        .width(width)
        .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X])
        .style(table_header)
        .into()
}

fn body_cell<'a, M: 'a>(cell: String, width: Length, is_even: bool) -> Element<'a, M> {
    container(text(cell).size(13))
        .width(width)
        .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X])
        .style(move |theme: &Theme| table_cell(theme, is_even))
        .into()
}
