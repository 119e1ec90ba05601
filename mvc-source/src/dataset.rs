use crate::columns::DATE_TIME;
use crate::record::CollisionRecord;

/// The normalized collection of collision records loaded for one row-count
/// request. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<CollisionRecord>,
    row_limit: usize,
    dropped: usize,
    timestamp_column: String,
}

impl Dataset {
    /// `row_limit` is the row count the dataset was requested with and
    /// `dropped` the number of fetched rows discarded for lacking coordinates.
    pub fn new(records: Vec<CollisionRecord>, row_limit: usize, dropped: usize) -> Self {
        Dataset {
            records,
            row_limit,
            dropped,
            timestamp_column: DATE_TIME.to_string(),
        }
    }

    /// Set the canonical name of the merged date and time column.
    pub fn with_timestamp_column(mut self, name: impl Into<String>) -> Self {
        self.timestamp_column = name.into();
        self
    }

    pub fn records(&self) -> &[CollisionRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CollisionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn row_limit(&self) -> usize {
        self.row_limit
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Canonical name of the column the timestamps were merged into.
    pub fn timestamp_column(&self) -> &str {
        &self.timestamp_column
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Dataset::new(Vec::new(), 0, 0)
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a CollisionRecord;
    type IntoIter = std::slice::Iter<'a, CollisionRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<CollisionRecord> for Dataset {
    fn from_iter<T: IntoIterator<Item = CollisionRecord>>(iter: T) -> Self {
        let records: Vec<CollisionRecord> = iter.into_iter().collect();
        let row_limit = records.len();
        Dataset::new(records, row_limit, 0)
    }
}
