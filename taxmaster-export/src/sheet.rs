//! Spreadsheet export: one CSV sheet with a `Category` column and a
//! two-decimal `Amount ($)` column, one row per breakdown line.

use std::io::Write;

use serde::Serialize;

use taxmaster_core::ReportRow;

use crate::ExportError;
use crate::currency::format_plain;

#[derive(Serialize)]
struct SheetRecord {
    #[serde(rename = "Category")]
    category: String,
    #[serde(rename = "Amount ($)")]
    amount: String,
}

impl From<&ReportRow> for SheetRecord {
    fn from(row: &ReportRow) -> Self {
        Self {
            category: row.label.clone(),
            amount: format_plain(row.amount),
        }
    }
}

/// Writes the breakdown rows as a CSV sheet.
pub fn write_sheet<'a, R, W>(rows: R, writer: W) -> Result<(), ExportError>
where
    R: IntoIterator<Item = &'a ReportRow>,
    W: Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for row in rows {
        let record: SheetRecord = row.into();
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
