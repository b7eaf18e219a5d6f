//! Plain-text document export: a paginated, fixed two-column report
//! (label column on the left, right-aligned currency column) with the
//! title and column header repeated on every page.

use std::io::Write;

use taxmaster_core::ReportRow;

use crate::ExportError;
use crate::currency::format_usd;

const LABEL_WIDTH: usize = 40;
const AMOUNT_WIDTH: usize = 18;
const LINE_WIDTH: usize = LABEL_WIDTH + AMOUNT_WIDTH;

/// Breakdown lines per page before a form-feed break.
const ROWS_PER_PAGE: usize = 40;

/// Writes the report document to `writer`.
pub fn write_document<W: Write>(
    title: &str,
    rows: &[ReportRow],
    mut writer: W,
) -> Result<(), ExportError> {
    let pages: Vec<&[ReportRow]> = if rows.is_empty() {
        vec![&[]]
    } else {
        rows.chunks(ROWS_PER_PAGE).collect()
    };

    for (page_index, page) in pages.iter().enumerate() {
        if page_index > 0 {
            writer.write_all(b"\x0c")?;
        }
        write_page_header(title, &mut writer)?;
        for row in *page {
            writeln!(
                writer,
                "{:<label$}{:>amount$}",
                row.label,
                format_usd(row.amount),
                label = LABEL_WIDTH,
                amount = AMOUNT_WIDTH,
            )?;
        }
    }
    Ok(())
}

/// Renders the report document to a string.
pub fn render_document(title: &str, rows: &[ReportRow]) -> String {
    let mut buf = Vec::new();
    // Writing to a Vec cannot fail.
    write_document(title, rows, &mut buf).expect("in-memory write");
    String::from_utf8(buf).expect("document is ASCII-safe UTF-8")
}

fn write_page_header<W: Write>(title: &str, writer: &mut W) -> Result<(), ExportError> {
    writeln!(writer, "{:^width$}", title, width = LINE_WIDTH)?;
    writeln!(writer, "{}", "=".repeat(LINE_WIDTH))?;
    writeln!(
        writer,
        "{:<label$}{:>amount$}",
        "Category",
        "Amount ($)",
        label = LABEL_WIDTH,
        amount = AMOUNT_WIDTH,
    )?;
    writeln!(writer, "{}", "-".repeat(LINE_WIDTH))?;
    Ok(())
}
