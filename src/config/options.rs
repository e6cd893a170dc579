// src/config/options.rs
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::consts::*;

/// Header names used to read a record. Every sheet of one widget shares them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Columns {
    pub number: String,
    pub first: String,
    pub last: String,
    pub expires: String,
}

impl Default for Columns {
    fn default() -> Self {
        Self {
            number: s!(DEFAULT_NUM_HEADER),
            first: s!(DEFAULT_FIRST_HEADER),
            last: s!(DEFAULT_LAST_HEADER),
            expires: s!(DEFAULT_EXP_HEADER),
        }
    }
}

/// One lookup form: its sheets, its headers, and how the tab is labelled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetOptions {
    pub id: String,

    #[serde(default)]
    pub title: String,

    /// Single sheet (older configs). Ignored when `sources` is non-empty.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Sheets searched in order; earlier sheets win on duplicate cert numbers.
    #[serde(default)]
    pub sources: Vec<String>,

    #[serde(default)]
    pub columns: Columns,
}

impl WidgetOptions {
    pub fn new<I, S>(id: &str, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: s!(id),
            title: s!(),
            source: None,
            sources: sources.into_iter().map(Into::into).collect(),
            columns: Columns::default(),
        }
    }

    pub fn title(&self) -> &str {
        if self.title.trim().is_empty() { &self.id } else { &self.title }
    }

    pub fn source_urls(&self) -> Vec<String> {
        if !self.sources.is_empty() {
            return self.sources.clone();
        }
        self.source.iter().cloned().collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppOptions {
    pub widgets: Vec<WidgetOptions>,

    /// Per-request timeout. Unset means wait as long as the server takes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    pub log_file: PathBuf,
}

impl Default for AppOptions {
    fn default() -> Self {
        // Both tabs search PEVO first, then WITPAC.
        let mut pevo = WidgetOptions::new("pevo", [PEVO_CSV_URL, WITPAC_CSV_URL]);
        pevo.title = s!("PEVO");
        let mut witpac = WidgetOptions::new("witpac", [PEVO_CSV_URL, WITPAC_CSV_URL]);
        witpac.title = s!("WITPAC");

        Self {
            widgets: vec![pevo, witpac],
            request_timeout_secs: None,
            log_file: PathBuf::from(LOG_FILE),
        }
    }
}

impl AppOptions {
    pub fn widget(&self, id: &str) -> Option<&WidgetOptions> {
        self.widgets.iter().find(|w| w.id.eq_ignore_ascii_case(id.trim()))
    }
}
