//! Markdown pipe-table rendering for normalized tables.

use crate::model::TabularValue;

/// Extra width reserved around header text when sizing a column.
const MIN_PADDING: usize = 2;

/// Column alignment derived from the body cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Render a table as a Markdown pipe table.
///
/// ```text
/// |   A |   B |
/// |----:|----:|
/// |   1 |   2 |
/// ```
///
/// Columns are padded to a common width. Columns whose body cells are all
/// numeric are right-aligned, every other column is left-aligned. Row and
/// column order are kept as given. The output has no trailing newline.
pub fn render_table_markdown(table: &TabularValue) -> String {
    let header: Vec<String> = table.header.iter().map(|c| escape_cell(c)).collect();
    let body: Vec<Vec<String>> = table
        .body
        .iter()
        .map(|row| row.iter().map(|c| escape_cell(c)).collect())
        .collect();

    let aligns: Vec<Align> = (0..header.len())
        .map(|i| {
            if is_numeric_column(body.iter().filter_map(|row| row.get(i))) {
                Align::Right
            } else {
                Align::Left
            }
        })
        .collect();

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, h)| {
            body.iter()
                .filter_map(|row| row.get(i))
                .map(|c| display_width(c))
                .fold(display_width(h) + MIN_PADDING, usize::max)
        })
        .collect();

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(render_row(&header, &widths, &aligns));
    lines.push(render_separator(&widths, &aligns));
    for row in &body {
        lines.push(render_row(row, &widths, &aligns));
    }
    lines.join("\n")
}

fn render_row(cells: &[String], widths: &[usize], aligns: &[Align]) -> String {
    let mut line = String::from("|");
    for ((cell, width), align) in cells.iter().zip(widths).zip(aligns) {
        let padded = match align {
            Align::Left => format!("{:<width$}", cell, width = *width),
            Align::Right => format!("{:>width$}", cell, width = *width),
        };
        line.push(' ');
        line.push_str(&padded);
        line.push_str(" |");
    }
    line
}

fn render_separator(widths: &[usize], aligns: &[Align]) -> String {
    let mut line = String::from("|");
    for (width, align) in widths.iter().zip(aligns) {
        let dashes = "-".repeat(width + 1);
        match align {
            Align::Left => {
                line.push(':');
                line.push_str(&dashes);
            }
            Align::Right => {
                line.push_str(&dashes);
                line.push(':');
            }
        }
        line.push('|');
    }
    line
}

fn is_numeric_column<'a>(mut cells: impl Iterator<Item = &'a String>) -> bool {
    let mut seen = false;
    let all_numeric = cells.all(|c| {
        seen = true;
        c.trim().parse::<f64>().is_ok()
    });
    seen && all_numeric
}

fn display_width(s: &str) -> usize {
    s.chars().count()
}

/// Flatten a cell onto one line and escape the column delimiter.
fn escape_cell(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\r' => {}
            '\n' => result.push(' '),
            '|' => result.push_str("\\|"),
            _ => result.push(c),
        }
    }
    result
}
