//! Terminal drawing of the [`View`](bookshelf::view::View).
//!
//! Everything returns a `String`; callers decide where it goes. Layout math
//! (column widths, truncation) is display-width aware so wide glyphs line up.

use bookshelf::model::Field;
use bookshelf::view::{Banner, Row, Severity, COLUMNS};
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Widest a single column may grow before its text is truncated.
pub const MAX_COLUMN_WIDTH: usize = 40;
const COLUMN_GAP: &str = "  ";
const DELETE_MARKER: &str = "✗";

pub fn render_table(rows: &[Row]) -> String {
    if rows.is_empty() {
        return format!("{}\n", "No books in the catalog.".dimmed());
    }

    let index_width = format!("{}.", rows.len()).width();
    let mut widths = COLUMNS.map(|heading| heading.width());
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(&row.cells) {
            *width = (*width).max(cell.width()).min(MAX_COLUMN_WIDTH);
        }
    }

    let mut out = String::new();

    out.push_str(&" ".repeat(index_width));
    for (heading, width) in COLUMNS.iter().zip(widths) {
        out.push_str(COLUMN_GAP);
        out.push_str(&pad(heading, width).bold().to_string());
    }
    out.push('\n');

    for (i, row) in rows.iter().enumerate() {
        let index = format!("{}.", i + 1);
        out.push_str(&format!("{:>w$}", index, w = index_width).yellow().to_string());
        for (cell, width) in row.cells.iter().zip(widths) {
            out.push_str(COLUMN_GAP);
            out.push_str(&pad(&truncate_to_width(cell, width), width));
        }
        out.push_str(COLUMN_GAP);
        out.push_str(&DELETE_MARKER.red().to_string());
        out.push('\n');
    }

    out
}

pub fn render_banners(banners: &[Banner]) -> String {
    banners
        .iter()
        .map(|b| format!("{}\n", style_message(&b.message, b.severity)))
        .collect()
}

pub fn style_message(message: &str, severity: Severity) -> String {
    match severity {
        Severity::Success => message.green().to_string(),
        Severity::Danger => message.red().to_string(),
    }
}

pub fn prompt_for(field: Field) -> String {
    let label = match field {
        Field::Title => "Title",
        Field::Author => "Author",
        Field::Isbn => "ISBN",
    };
    format!("{:>7}: ", label)
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(fill))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
