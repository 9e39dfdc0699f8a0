use serde_json::Value;

/// A single spreadsheet cell as returned by the Sheets API.
///
/// Formatted reads yield strings, unformatted reads may yield numbers or
/// booleans, and gaps inside a row come back as `null`.
pub type Cell = Value;

/// Rows of cells; rows may have different lengths.
pub type Grid = Vec<Vec<Cell>>;
