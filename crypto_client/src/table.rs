//! Plain-text table rendering.
//!
//! Produces bordered ASCII tables with upper-cased, centered headers:
//!
//! ```text
//! +----------+---------+
//! | CMC RANK |  NAME   |
//! +----------+---------+
//! | 1        | Bitcoin |
//! +----------+---------+
//! ```
use std::io::{self, Write};

/// Accumulates rows and writes them as a table.
#[derive(Debug, Default)]
pub struct TableWriter {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
    row_lines: bool,
}

impl TableWriter {
    /// Table with the given column headers.
    pub fn new<S: AsRef<str>>(header: &[S]) -> Self {
        TableWriter {
            header: header.iter().map(|h| h.as_ref().to_uppercase()).collect(),
            ..Default::default()
        }
    }

    /// Draw a separator line between every row.
    pub fn with_row_lines(mut self, row_lines: bool) -> Self {
        self.row_lines = row_lines;
        self
    }

    /// Appends one row. Missing cells render empty; extra cells are dropped.
    pub fn append(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Column widths in `char`s. Double-width glyphs (CJK, emoji) count as one
    /// column, so rows containing them render with a shifted border.
    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    /// Writes the table to `out`.
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let widths = self.widths();
        let separator = separator_line(&widths);

        writeln!(out, "{}", separator)?;
        let header: Vec<String> = self
            .header
            .iter()
            .zip(&widths)
            .map(|(h, w)| format!("{:^w$}", h, w = *w))
            .collect();
        writeln!(out, "| {} |", header.join(" | "))?;
        writeln!(out, "{}", separator)?;

        for (i, row) in self.rows.iter().enumerate() {
            let cells: Vec<String> = widths
                .iter()
                .enumerate()
                .map(|(col, w)| {
                    let cell = row.get(col).map(String::as_str).unwrap_or("");
                    format!("{:<w$}", cell, w = *w)
                })
                .collect();
            writeln!(out, "| {} |", cells.join(" | "))?;
            if self.row_lines && i + 1 < self.rows.len() {
                writeln!(out, "{}", separator)?;
            }
        }
        if !self.rows.is_empty() {
            writeln!(out, "{}", separator)?;
        }
        Ok(())
    }

    /// Renders into a `String`.
    #[cfg(test)]
    pub fn to_string_lossy(&self) -> String {
        let mut buf = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.render(&mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

fn separator_line(widths: &[usize]) -> String {
    let parts: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("+{}+", parts.join("+"))
}
