use contracts::dashboards::d411_kpi_config::ConfigEntry;
use contracts::shared::grid::Grid;
use std::collections::{BTreeMap, HashSet};

use super::cells::{cell_at, cell_text};
use super::dates::{normalize_date_cell, normalize_date_text, parse_dmy};

/// Column A is the date, column B the A1 range. Rows missing either are skipped.
/// Dates come back canonical, so `1/1/2026` and `01/01/2026` are the same key.
pub fn parse_config_rows(grid: &Grid) -> Vec<ConfigEntry> {
    grid.iter()
        .filter_map(|row| {
            let date = normalize_date_cell(cell_at(row, 0));
            let range = cell_text(cell_at(row, 1));
            if date.is_empty() || range.is_empty() {
                None
            } else {
                Some(ConfigEntry { date, range })
            }
        })
        .collect()
}

/// Range configured for `date`; the first matching row wins
pub fn resolve_range(date: &str, grid: &Grid) -> Option<String> {
    let wanted = normalize_date_text(date);
    parse_config_rows(grid)
        .into_iter()
        .find(|entry| entry.date == wanted)
        .map(|entry| entry.range)
}

/// Date → range map with the same first-match-wins rule as `resolve_range`.
/// Only `dd/mm/yyyy` dates are included.
pub fn config_map(entries: &[ConfigEntry]) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for entry in entries.iter().filter(|e| parse_dmy(&e.date).is_some()) {
        map.entry(entry.date.clone())
            .or_insert_with(|| entry.range.clone());
    }
    map
}

/// Distinct configured dates in chronological order. Entries that are not
/// `dd/mm/yyyy` (header rows, notes) are left out.
pub fn sorted_dates(entries: &[ConfigEntry]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut dated: Vec<_> = entries
        .iter()
        .filter_map(|entry| parse_dmy(&entry.date).map(|d| (d, entry.date.clone())))
        .filter(|(_, text)| seen.insert(text.clone()))
        .collect();

    let skipped = entries.len() - dated.len();
    if skipped > 0 {
        tracing::debug!("Skipped {} config rows (duplicate or not dd/mm/yyyy)", skipped);
    }

    dated.sort_by_key(|(d, _)| *d);
    dated.into_iter().map(|(_, text)| text).collect()
}
