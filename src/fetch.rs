// src/fetch.rs
//
// Fetch every source of a widget concurrently, one worker per source.
// A source's failure becomes an empty contribution; it never stops the others.

use std::{sync::mpsc, thread};

use crate::{
    core::{html::looks_like_html, Transport},
    error::{LookupError, SourceError},
    progress::Progress,
    sheet::{self, Record},
};

#[derive(Debug)]
pub struct SourceOutcome {
    pub index: usize,
    pub url: String,
    pub result: Result<Vec<Record>, SourceError>,
}

impl SourceOutcome {
    /// Rows if the source succeeded, nothing otherwise.
    pub fn into_records(self) -> Vec<Record> {
        self.result.unwrap_or_default()
    }
}

/// Which sources failed in one round, and why. Diagnostic only.
#[derive(Debug, Default)]
pub struct FetchReport {
    pub total: usize,
    pub rows: usize,
    pub failed: Vec<(String, SourceError)>,
}

impl FetchReport {
    pub fn from_outcomes(outcomes: &[SourceOutcome]) -> Self {
        let mut report = FetchReport { total: outcomes.len(), ..Default::default() };
        for o in outcomes {
            match &o.result {
                Ok(rows) => report.rows += rows.len(),
                Err(e) => report.failed.push((o.url.clone(), e.clone())),
            }
        }
        report
    }

    pub fn all_failed(&self) -> bool {
        self.total > 0 && self.failed.len() == self.total
    }

    pub fn log(&self, widget: &str) {
        for (url, err) in &self.failed {
            logw!("Fetch [{widget}]: source failed ({err}): {url}");
        }
        logf!(
            "Fetch [{widget}]: {}/{} source(s) ok, {} row(s)",
            self.total - self.failed.len(),
            self.total,
            self.rows
        );
    }
}

/// GET one source, refuse HTML, parse CSV.
pub fn fetch_source(transport: &dyn Transport, url: &str) -> Result<Vec<Record>, SourceError> {
    let text = transport.get_text(url)?;
    if looks_like_html(&text) {
        return Err(SourceError::Html);
    }
    sheet::parse_records(&text)
}

/// Fetch all `urls` at once. Outcomes come back in `urls` order.
/// Errs only if a worker died without reporting.
pub fn fetch_sources(
    transport: &dyn Transport,
    urls: &[String],
    mut progress: Option<&mut dyn Progress>,
) -> Result<Vec<SourceOutcome>, LookupError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(urls.len());
    }

    let (tx, rx) = mpsc::channel::<SourceOutcome>();
    let mut outcomes: Vec<SourceOutcome> = Vec::with_capacity(urls.len());
    let mut lost = 0usize;

    thread::scope(|scope| {
        let mut workers = Vec::with_capacity(urls.len());
        for (index, url) in urls.iter().enumerate() {
            let tx = tx.clone();
            workers.push(scope.spawn(move || {
                let result = fetch_source(transport, url);
                let _ = tx.send(SourceOutcome { index, url: url.clone(), result });
            }));
        }
        drop(tx); // receiver loop ends once every worker is done

        for outcome in rx {
            if let Some(p) = progress.as_deref_mut() {
                match &outcome.result {
                    Ok(rows) => p.source_done(outcome.index, &outcome.url, rows.len()),
                    Err(e) => p.source_failed(outcome.index, &outcome.url, e),
                }
            }
            outcomes.push(outcome);
        }

        // Joining here keeps a worker panic from propagating out of the scope.
        for w in workers {
            if w.join().is_err() {
                lost += 1;
            }
        }
    });

    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }

    if lost > 0 {
        return Err(LookupError::Unexpected(format!("{lost} fetch worker(s) panicked")));
    }

    outcomes.sort_by_key(|o| o.index);
    Ok(outcomes)
}
