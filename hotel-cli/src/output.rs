//! Table printing.

use std::io::{self, Write};

use hotel::QueryResult;

/// Prints a header row of column names followed by every row.
///
/// Cells are left-aligned, padded to `width` and separated by tabs. Nothing
/// is printed for an empty result. Returns the number of data rows printed.
pub fn print_table<W: Write>(out: &mut W, result: &QueryResult, width: usize) -> io::Result<usize> {
    if result.is_empty() {
        return Ok(0);
    }

    write_row(out, result.columns.iter().map(String::as_str), width)?;
    for row in &result.rows {
        write_row(out, row.iter().map(String::as_str), width)?;
    }
    Ok(result.len())
}

fn write_row<'a, W: Write>(
    out: &mut W,
    cells: impl Iterator<Item = &'a str>,
    width: usize,
) -> io::Result<()> {
    for cell in cells {
        write!(out, "{:<width$}\t", cell.trim())?;
    }
    writeln!(out)
}
