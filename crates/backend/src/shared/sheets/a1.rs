//! Minimal A1 notation helpers: sheet qualification and cell addresses.

/// Top-left cell of a range, zero-based
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellOrigin {
    pub col: usize,
    pub row: usize,
}

impl CellOrigin {
    /// A1 address of the cell at `(row_offset, col_offset)` from this origin
    pub fn address(&self, row_offset: usize, col_offset: usize) -> String {
        format!(
            "{}{}",
            column_letters(self.col + col_offset),
            self.row + row_offset + 1
        )
    }
}

/// Splits `Sheet!A1:B2` into the unquoted sheet name and the cell part
pub fn split_sheet(range: &str) -> (Option<String>, &str) {
    match range.rfind('!') {
        Some(pos) => {
            let sheet = range[..pos].trim();
            let sheet = if sheet.len() >= 2 && sheet.starts_with('\'') && sheet.ends_with('\'') {
                sheet[1..sheet.len() - 1].replace("''", "'")
            } else {
                sheet.to_string()
            };
            (Some(sheet), range[pos + 1..].trim())
        }
        None => (None, range.trim()),
    }
}

/// Prefixes a bare range with `sheet`; ranges that already name a sheet
/// are returned unchanged.
pub fn qualify(range: &str, sheet: &str) -> String {
    let range = range.trim();
    let sheet = sheet.trim();
    if range.contains('!') || sheet.is_empty() {
        return range.to_string();
    }
    if range.is_empty() {
        return quote_sheet(sheet);
    }
    format!("{}!{}", quote_sheet(sheet), range)
}

/// Quotes a sheet name when it contains anything besides ASCII letters,
/// digits and underscores.
pub fn quote_sheet(sheet: &str) -> String {
    let plain = sheet
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain {
        sheet.to_string()
    } else {
        format!("'{}'", sheet.replace('\'', "''"))
    }
}

/// `A` → 0, `Z` → 25, `AA` → 26
pub fn column_index(letters: &str) -> Option<usize> {
    if letters.is_empty() {
        return None;
    }
    let mut index = 0usize;
    for ch in letters.chars() {
        if !ch.is_ascii_alphabetic() {
            return None;
        }
        let digit = (ch.to_ascii_uppercase() as u8 - b'A') as usize + 1;
        index = index.checked_mul(26)?.checked_add(digit)?;
    }
    Some(index - 1)
}

/// 0 → `A`, 25 → `Z`, 26 → `AA`
pub fn column_letters(index: usize) -> String {
    let mut n = index + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push((b'A' + rem as u8) as char);
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Top-left cell of an A1 range. Column-only ranges (`A:B`) start at row 1,
/// row-only ranges (`3:5`) at column A, and a bare sheet name at `A1`.
pub fn origin(range: &str) -> Option<CellOrigin> {
    let (sheet, cells) = split_sheet(range);
    let start = cells.split(':').next().unwrap_or("").trim();
    let bare_sheet_name =
        sheet.is_none() && !cells.contains(':') && !cells.chars().any(|c| c.is_ascii_digit());
    if start.is_empty() || bare_sheet_name {
        return Some(CellOrigin { col: 0, row: 0 });
    }

    let split_at = start
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(start.len());
    let (letters, digits) = start.split_at(split_at);

    let col = if letters.is_empty() {
        0
    } else {
        column_index(letters)?
    };
    let row = if digits.is_empty() {
        0
    } else {
        digits.parse::<usize>().ok()?.checked_sub(1)?
    };
    Some(CellOrigin { col, row })
}
