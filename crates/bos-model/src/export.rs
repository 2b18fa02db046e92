//! Truth-table CSV export.
//!
//! Export always works from the currently rendered [`TruthTableView`], never
//! from the raw response, so the file matches what the user sees cell for
//! cell. Every cell is quoted and rows are newline-joined without a trailing
//! terminator.

use std::io;
use std::path::{Path, PathBuf};

use csv::{QuoteStyle, WriterBuilder};
use thiserror::Error;

use crate::render::TruthTableView;

/// Default file name offered when saving an exported table.
pub const TRUTH_TABLE_FILENAME: &str = "truth_table.csv";

/// Failures while serializing or writing an export.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to serialize truth table: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Serialize a truth table to CSV text.
pub fn truth_table_csv(table: &TruthTableView) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_writer(Vec::new());

    writer.write_record(&table.headers)?;
    for row in &table.rows {
        writer.write_record(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    Ok(text.trim_end_matches('\n').to_string())
}

/// Serialize a truth table and write it to `path`.
pub fn write_truth_table_csv(table: &TruthTableView, path: &Path) -> Result<(), ExportError> {
    let csv = truth_table_csv(table)?;
    std::fs::write(path, csv).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "truth table exported");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{TRUTH_TABLE_FILENAME, truth_table_csv, write_truth_table_csv};
    use crate::render::TruthTableView;

    fn sample() -> TruthTableView {
        TruthTableView {
            headers: vec!["A".into(), "B".into(), "Result".into()],
            rows: vec![
                vec!["0".into(), "0".into(), "0".into()],
                vec!["1".into(), "0".into(), "1".into()],
            ],
        }
    }

    #[test]
    fn quotes_every_cell() {
        let csv = truth_table_csv(&sample()).unwrap();
        assert_eq!(
            csv,
            "\"A\",\"B\",\"Result\"\n\"0\",\"0\",\"0\"\n\"1\",\"0\",\"1\""
        );
    }

    #[test]
    fn no_trailing_newline() {
        let csv = truth_table_csv(&sample()).unwrap();
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn embedded_quotes_are_doubled() {
        let table = TruthTableView {
            headers: vec!["x\"y".into()],
            rows: vec![],
        };
        assert_eq!(truth_table_csv(&table).unwrap(), "\"x\"\"y\"");
    }

    #[test]
    fn writes_file_to_disk() {
        let dir = std::env::temp_dir().join(format!("bos-export-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(TRUTH_TABLE_FILENAME);

        write_truth_table_csv(&sample(), &path).unwrap();
        let on_disk = std::fs::read_to_string(&path).unwrap();
        assert_eq!(on_disk, truth_table_csv(&sample()).unwrap());

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
