use async_trait::async_trait;
use contracts::shared::grid::Grid;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use super::client::RangeReader;
use super::error::SheetsError;

/// In-memory range reader for service tests
#[derive(Default)]
pub struct MemoryReader {
    ranges: HashMap<String, Grid>,
    broken: HashSet<String>,
    requested: Mutex<Vec<String>>,
}

impl MemoryReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_range(mut self, range: &str, grid: Grid) -> Self {
        self.ranges.insert(range.to_string(), grid);
        self
    }

    /// Reads of `range` fail with an upstream error
    pub fn with_broken_range(mut self, range: &str) -> Self {
        self.broken.insert(range.to_string());
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl RangeReader for MemoryReader {
    async fn read_range(&self, range: &str) -> Result<Grid, SheetsError> {
        self.requested.lock().unwrap().push(range.to_string());
        if self.broken.contains(range) {
            return Err(SheetsError::Upstream(format!("503 for range {}", range)));
        }
        self.ranges
            .get(range)
            .cloned()
            .ok_or_else(|| SheetsError::NotFound(range.to_string()))
    }
}
