//! Karnaugh-map fragment.
//!
//! The map is laid out as a table whose corner cell carries the dual-axis
//! label, with one column header per column code and each row led by its
//! row code.

use bos_model::KmapView;
use iced::Element;

use crate::component::owned_table;
use crate::message::Message;
use crate::view::calculator::section;

pub fn view(map: &KmapView) -> Element<'_, Message> {
    let mut headers = Vec::with_capacity(map.cols.len() + 1);
    headers.push(format!("{} \\ {}", map.corner_row, map.corner_col));
    headers.extend(map.cols.iter().cloned());

    let rows: Vec<Vec<String>> = map
        .row_labels
        .iter()
        .zip(&map.grid)
        .map(|(label, cells)| {
            let mut row = Vec::with_capacity(cells.len() + 1);
            row.push(label.clone());
            row.extend(cells.iter().cloned());
            row
        })
        .collect();

    section("Karnaugh Map", owned_table(headers, rows))
}
