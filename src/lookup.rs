// src/lookup.rs
//
// Query validation, matching, and the per-widget lookup service.
//
// Matching rule: exact (trimmed) certification number, then the FIRST record
// in the bucket whose trimmed, lowercased last name equals the query's.
// Bucket order is source order, so the earliest-listed sheet wins.

use std::sync::Arc;

use crate::{
    cache::{Built, IndexCache},
    config::{Columns, WidgetOptions},
    core::{sanitize::{clean, norm_name}, Transport},
    error::LookupError,
    fetch::{self, FetchReport},
    index::Index,
    progress::Progress,
    sheet::Record,
};

/// A validated query. Both parts are trimmed and non-empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Query {
    cert: String,
    last: String,
}

impl Query {
    pub fn new(cert: &str, last: &str) -> Result<Self, LookupError> {
        let cert = clean(cert);
        let last = clean(last);
        if cert.is_empty() || last.is_empty() {
            return Err(LookupError::Validation);
        }
        Ok(Self { cert, last })
    }

    pub fn cert(&self) -> &str { &self.cert }
    pub fn last(&self) -> &str { &self.last }
}

/// Matched record as shown to the user: the four fields, trimmed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Details {
    pub first: String,
    pub last: String,
    pub number: String,
    pub expires: String,
}

impl Details {
    pub fn from_record(row: &Record, columns: &Columns) -> Self {
        Self {
            first: clean(row.field(&columns.first)),
            last: clean(row.field(&columns.last)),
            number: clean(row.field(&columns.number)),
            expires: clean(row.field(&columns.expires)),
        }
    }

    pub fn full_name(&self) -> String {
        join!(&self.first, " ", &self.last).trim().to_string()
    }
}

/// Why nothing matched. Logged, never shown: both render as "not found".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Miss {
    UnknownNumber,
    NameMismatch { candidates: usize },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Found(Details),
    NotFound(Miss),
}

impl Outcome {
    pub fn is_found(&self) -> bool { matches!(self, Outcome::Found(_)) }
}

/// First record in the query's bucket with a matching last name.
pub fn find_match<'a>(index: &'a Index, query: &Query, columns: &Columns) -> Result<&'a Record, Miss> {
    let bucket = index.bucket(query.cert()).ok_or(Miss::UnknownNumber)?;
    let want = norm_name(query.last());
    bucket
        .iter()
        .find(|row| norm_name(row.field(&columns.last)) == want)
        .ok_or(Miss::NameMismatch { candidates: bucket.len() })
}

pub fn resolve(index: &Index, query: &Query, columns: &Columns) -> Outcome {
    match find_match(index, query, columns) {
        Ok(row) => Outcome::Found(Details::from_record(row, columns)),
        Err(miss) => Outcome::NotFound(miss),
    }
}

/// One widget's lookup: its sources, its headers, and its own index cache.
pub struct CertLookup {
    id: String,
    sources: Vec<String>,
    columns: Columns,
    transport: Arc<dyn Transport>,
    cache: IndexCache,
}

impl CertLookup {
    pub fn new(widget: &WidgetOptions, transport: Arc<dyn Transport>) -> Self {
        Self {
            id: widget.id.clone(),
            sources: widget.source_urls(),
            columns: widget.columns.clone(),
            transport,
            cache: IndexCache::new(),
        }
    }

    pub fn id(&self) -> &str { &self.id }
    pub fn sources(&self) -> &[String] { &self.sources }
    pub fn columns(&self) -> &Columns { &self.columns }
    pub fn cache(&self) -> &IndexCache { &self.cache }

    /// Cached index, building it on first use.
    pub fn index(&self, progress: Option<&mut dyn Progress>) -> Result<Arc<Index>, LookupError> {
        self.cache.get_or_build(|| self.build_index(progress))
    }

    /// Failed sources contribute no rows. When every source failed the empty
    /// index still answers this lookup (as not found) but is not kept.
    fn build_index(&self, progress: Option<&mut dyn Progress>) -> Result<Built, LookupError> {
        logf!("Index [{}]: building from {} source(s)", self.id, self.sources.len());

        let outcomes = fetch::fetch_sources(self.transport.as_ref(), &self.sources, progress)?;
        let report = FetchReport::from_outcomes(&outcomes);
        report.log(&self.id);

        let outage = report.all_failed();
        let index = Index::build(outcomes.into_iter().map(|o| o.into_records()), &self.columns);
        logf!(
            "Index [{}]: {} key(s), {} record(s)",
            self.id,
            index.key_count(),
            index.record_count()
        );
        if outage {
            logw!("Index [{}]: all {} source(s) failed; not caching", self.id, report.total);
            return Ok(Built::transient(index));
        }
        Ok(Built::keep(index))
    }

    pub fn lookup(&self, query: &Query, progress: Option<&mut dyn Progress>) -> Result<Outcome, LookupError> {
        let index = self.index(progress)?;
        let outcome = resolve(&index, query, &self.columns);
        match &outcome {
            Outcome::Found(_) => logd!("Lookup [{}]: match", self.id),
            Outcome::NotFound(Miss::UnknownNumber) => {
                logf!("Lookup [{}]: no such certification number", self.id)
            }
            Outcome::NotFound(Miss::NameMismatch { candidates }) => {
                logf!("Lookup [{}]: number found, last name mismatch ({} candidate(s))", self.id, candidates)
            }
        }
        Ok(outcome)
    }

    /// Convenience for callers holding raw input text.
    pub fn check(&self, cert: &str, last: &str) -> Result<Outcome, LookupError> {
        let query = Query::new(cert, last)?;
        self.lookup(&query, None)
    }

    pub fn reset(&self) {
        logd!("Index [{}]: reset", self.id);
        self.cache.reset();
    }
}
