use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    Heading,
    Success,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::Heading => style(text).bold(),
        StyleType::Success => style(text).green(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

/// Right-aligned cell for an already formatted amount.
pub fn money_cell(text: String) -> Cell {
    Cell::new(text).set_alignment(CellAlignment::Right)
}

/// Bold green cell for a headline figure.
pub fn highlight_cell(text: String) -> Cell {
    Cell::new(text)
        .add_attribute(Attribute::Bold)
        .fg(Color::Green)
        .set_alignment(CellAlignment::Right)
}

/// Colors a record status by how far along it is.
pub fn status_cell(status: &str) -> Cell {
    let color = match status {
        "completed" | "reviewed" => Color::Green,
        "failed" => Color::Red,
        "underReview" => Color::Blue,
        _ => Color::Yellow,
    };
    Cell::new(status).fg(color)
}

/// A cell for optional free text; blanks render as a dim dash.
pub fn text_cell(text: &str) -> Cell {
    if text.is_empty() {
        Cell::new("-").fg(Color::DarkGrey)
    } else {
        Cell::new(text)
    }
}

/// A two-column key/value table for result breakdowns.
pub fn breakdown_table(rows: Vec<(&str, Cell)>) -> Table {
    let mut table = new_styled_table();
    for (label, value) in rows {
        table.add_row(vec![Cell::new(label), value]);
    }
    table
}

pub fn print_empty(message: &str) {
    println!("{}", style_text(message, StyleType::Subtle));
}

pub fn print_success(message: &str) {
    println!("{}", style_text(message, StyleType::Success));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakdown_table_renders_rows() {
        let table = breakdown_table(vec![
            ("Monthly EMI", highlight_cell("$2,051.65".to_string())),
            ("Note", text_cell("")),
        ]);
        let rendered = table.to_string();
        assert!(rendered.contains("Monthly EMI"));
        assert!(rendered.contains("$2,051.65"));
        assert!(rendered.contains('-'));
    }
}
