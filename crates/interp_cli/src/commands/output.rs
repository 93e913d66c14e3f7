//! Plain-text table rendering.

use std::io::Write;

use crate::Result;

/// Write a left-aligned table with a header row.
pub(crate) fn write_table<W: Write>(out: &mut W, header: &[&str], rows: &[Vec<String>]) -> Result<()> {
    let mut widths: Vec<usize> = header.iter().map(|h| h.len()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let header: Vec<String> = header.iter().map(|h| h.to_string()).collect();
    write_row(out, &widths, &header)?;
    for row in rows {
        write_row(out, &widths, row)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, widths: &[usize], cells: &[String]) -> Result<()> {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect();
    writeln!(out, "{}", line.join("  ").trim_end())?;
    Ok(())
}
