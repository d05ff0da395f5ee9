//! Table styling and value formatting shared by the commands.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use portal_views::{Notice, NoticeLevel};

/// A table with the portal's header style and the given width.
pub fn table(headers: &[&str], width: u16) -> Table {
    let mut table = Table::new();
    table.set_header(headers.iter().map(|h| header_cell(h)).collect::<Vec<_>>());
    apply_table_style(&mut table, width);
    table
}

pub fn apply_table_style(table: &mut Table, width: u16) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(width);
}

pub fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

pub fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

/// Coloured cell for a status label: green for settled, yellow for
/// waiting, red for trouble.
pub fn status_cell(label: &str) -> Cell {
    let color = match label.to_ascii_lowercase().as_str() {
        "paid" | "active" | "completed" | "occupied" | "available" => Color::Green,
        "pending" | "in progress" | "expiring soon" | "maintenance" | "under construction" => {
            Color::Yellow
        }
        "overdue" | "failed" | "expired" | "inactive" | "vacant" | "used" => Color::Red,
        _ => Color::Reset,
    };
    Cell::new(label).fg(color)
}

/// Whole dollars with thousands separators: `$84,250`.
pub fn money(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("${grouped}")
}

/// Optional value or a dash.
pub fn or_dash<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "-".to_string(), |v| v.to_string())
}

/// Horizontal bar for a 0-100 value, `width` characters at 100.
pub fn bar(percent: f64, width: usize) -> String {
    let filled = (percent.clamp(0.0, 100.0) / 100.0 * width as f64).round() as usize;
    "█".repeat(filled)
}

/// Prints notices to stdout, one per line, errors prefixed.
pub fn print_notices(notices: &[Notice]) {
    for notice in notices {
        match notice.level {
            NoticeLevel::Error => println!("error: {notice}"),
            NoticeLevel::Success | NoticeLevel::Info => println!("{notice}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_groups_thousands() {
        assert_eq!(money(0), "$0");
        assert_eq!(money(950), "$950");
        assert_eq!(money(1_200), "$1,200");
        assert_eq!(money(84_250), "$84,250");
        assert_eq!(money(1_234_567), "$1,234,567");
    }

    #[test]
    fn bar_scales_and_clamps() {
        assert_eq!(bar(50.0, 10).chars().count(), 5);
        assert_eq!(bar(140.0, 10).chars().count(), 10);
        assert!(bar(-3.0, 10).is_empty());
    }

    #[test]
    fn dash_for_missing() {
        assert_eq!(or_dash::<u32>(None), "-");
        assert_eq!(or_dash(Some(75)), "75");
    }
}
