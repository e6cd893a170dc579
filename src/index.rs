// src/index.rs
//
// Certification number → bucket of records.
// Buckets keep arrival order: earlier sheets first, then row order within a sheet.
// Duplicates are kept; the matcher decides who wins.

use std::collections::HashMap;

use crate::config::Columns;
use crate::sheet::Record;

#[derive(Clone, Debug, Default)]
pub struct Index {
    buckets: HashMap<String, Vec<Record>>,
    records: usize,
}

impl Index {
    /// `datasets` in source order. Rows with a blank certification number are dropped.
    pub fn build<I>(datasets: I, columns: &Columns) -> Self
    where
        I: IntoIterator<Item = Vec<Record>>,
    {
        let mut ix = Index::default();
        for rows in datasets {
            for row in rows {
                let key = row.field(&columns.number).trim();
                if key.is_empty() {
                    continue;
                }
                ix.buckets.entry(key.to_string()).or_default().push(row);
                ix.records += 1;
            }
        }
        ix
    }

    /// Exact match on an already trimmed key.
    pub fn bucket(&self, key: &str) -> Option<&[Record]> {
        self.buckets.get(key).map(Vec::as_slice)
    }

    pub fn key_count(&self) -> usize { self.buckets.len() }
    pub fn record_count(&self) -> usize { self.records }
    pub fn is_empty(&self) -> bool { self.records == 0 }
}
