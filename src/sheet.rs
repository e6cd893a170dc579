// src/sheet.rs
//
// Published sheet → records. Header row names the fields; values stay raw text.

use std::sync::Arc;

use csv::{ReaderBuilder, Trim};

use crate::error::SourceError;

/// One data row, addressed by header name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    headers: Arc<[String]>,
    values: Vec<String>,
}

impl Record {
    pub fn new(headers: Arc<[String]>, values: Vec<String>) -> Self {
        Self { headers, values }
    }

    /// Build a standalone record from `(header, value)` pairs.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let headers: Arc<[String]> = pairs.iter().map(|(h, _)| s!(*h)).collect();
        let values = pairs.iter().map(|(_, v)| s!(*v)).collect();
        Self { headers, values }
    }

    /// Value under `column`; `None` if the sheet has no such header.
    /// Ragged rows read their missing trailing cells as empty.
    pub fn get(&self, column: &str) -> Option<&str> {
        let ix = self.headers.iter().position(|h| h == column)?;
        Some(self.values.get(ix).map(String::as_str).unwrap_or(""))
    }

    /// Like `get`, but a missing column reads as empty.
    pub fn field(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }
}

/// Parse CSV text with a header row. Blank lines are skipped; a row that
/// fails to decode is logged and dropped without failing the sheet.
pub fn parse_records(text: &str) -> Result<Vec<Record>, SourceError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(text.as_bytes());

    let headers: Arc<[String]> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut out = Vec::new();
    for (i, row) in reader.records().enumerate() {
        let row = match row {
            Ok(r) => r,
            Err(e) => {
                logw!("Sheet: dropping row {}: {}", i + 1, e);
                continue;
            }
        };
        if row.iter().all(str::is_empty) {
            continue;
        }
        out.push(Record::new(Arc::clone(&headers), row.iter().map(str::to_string).collect()));
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\u{feff}Certification #,First,Last,Cert. Exp. Date\r\n\
        12345,Jane,Smith,2026-01-01\r\n\
        \r\n\
        \"777\",\"Ann, Jr.\",\" O'Neil \",\r\n\
        900,Short\r\n";

    #[test]
    fn reads_rows_by_header() {
        let rows = parse_records(SAMPLE).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].field("Certification #"), "12345");
        assert_eq!(rows[0].field("Cert. Exp. Date"), "2026-01-01");
        assert_eq!(rows[1].field("First"), "Ann, Jr.");
        // values are not trimmed at parse time
        assert_eq!(rows[1].field("Last"), " O'Neil ");
    }

    #[test]
    fn ragged_rows_read_missing_cells_as_empty() {
        let rows = parse_records(SAMPLE).unwrap();
        assert_eq!(rows[2].field("First"), "Short");
        assert_eq!(rows[2].get("Last"), Some(""));
        assert_eq!(rows[2].get("Nope"), None);
    }

    #[test]
    fn header_only_and_empty_inputs_have_no_rows() {
        assert!(parse_records("Certification #,First,Last\n").unwrap().is_empty());
        assert!(parse_records("").unwrap().is_empty());
    }

    #[test]
    fn header_names_are_trimmed() {
        let rows = parse_records(" Certification # ,Last\n1,X\n").unwrap();
        assert_eq!(rows[0].field("Certification #"), "1");
    }
}
