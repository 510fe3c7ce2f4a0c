//! Output formatting utilities for CLI commands

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Color, ContentArrangement, Table};

/// Print a table with headers and rows
pub fn print_table(headers: &[&str], rows: Vec<Vec<String>>) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|h| Cell::new(h).fg(Color::Cyan))
        .collect();
    table.set_header(header_cells);

    for row in rows {
        table.add_row(row);
    }

    println!("{}", table);
}

/// Print a section heading in the report style
pub fn print_heading(text: &str) {
    println!("\n## {}\n", text);
}

/// Format a coverage ratio as "N/M (P%)"
pub fn format_ratio(mapped: usize, total: usize, pct: f64) -> String {
    format!("{}/{} ({:.0}%)", mapped, total, pct)
}
