use contracts::shared::grid::Cell;
use serde_json::Value;

static EMPTY: Value = Value::Null;

/// Cell at `col`; short rows read as empty
pub fn cell_at(row: &[Cell], col: usize) -> &Cell {
    row.get(col).unwrap_or(&EMPTY)
}

/// Numeric value of a cell. Thousands separators and percent signs are
/// stripped; anything that still fails to parse counts as 0.
pub fn cell_number(cell: &Cell) -> f64 {
    match cell {
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()).unwrap_or(0.0),
        Value::String(s) => parse_number(s),
        _ => 0.0,
    }
}

/// Surrounding whitespace is trimmed; whitespace inside the number is not.
pub fn parse_number(text: &str) -> f64 {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '%')
        .collect();
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Trimmed display text of a cell
pub fn cell_text(cell: &Cell) -> String {
    match cell {
        Value::Null => String::new(),
        Value::String(s) => s.trim().to_string(),
        Value::Bool(b) => if *b { "TRUE" } else { "FALSE" }.to_string(),
        other => other.to_string(),
    }
}

pub fn is_blank(cell: &Cell) -> bool {
    match cell {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}
