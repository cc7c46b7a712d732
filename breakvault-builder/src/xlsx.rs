//! Workbook loading: calamine in, plain tables out.
//!
//! Everything downstream of this module works on [`Table`] values, so the
//! ingestion modes (and their tests) never touch calamine types.

use calamine::{Data, Reader, open_workbook_auto};
use std::path::Path;

use crate::ingest::{Cell, IngestError, Table, Workbook};

/// Read every sheet of the workbook at `path` into memory.
///
/// # Errors
///
/// Returns [`IngestError::InputNotFound`] when the file does not exist and
/// [`IngestError::Workbook`] when calamine cannot parse it.
pub fn load_workbook(path: &Path) -> Result<Workbook, IngestError> {
    if !path.exists() {
        return Err(IngestError::InputNotFound(path.to_path_buf()));
    }
    let mut sheets = open_workbook_auto(path)?;
    let names: Vec<String> = sheets.sheet_names().to_vec();

    let mut workbook = Workbook::default();
    for name in names {
        let range = sheets.worksheet_range(&name)?;
        workbook.insert(name, table_from_range(&range));
    }
    Ok(workbook)
}

fn table_from_range(range: &calamine::Range<Data>) -> Table {
    let mut rows = range.rows();
    let headers: Vec<String> = rows
        .next()
        .map(|header_row| header_row.iter().map(cell_text).collect())
        .unwrap_or_default();
    let body: Vec<Vec<Cell>> = rows
        .map(|row| row.iter().map(convert_cell).collect())
        .collect();
    Table::new(headers, body)
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::Float(f) => Cell::Number(*f),
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Bool(b) => Cell::Number(u8::from(*b).into()),
        Data::String(s) => Cell::Text(s.clone()),
        other => Cell::Text(other.to_string()),
    }
}

fn cell_text(data: &Data) -> String {
    match data {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(s) => s.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}
