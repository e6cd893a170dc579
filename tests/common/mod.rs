// tests/common/mod.rs
//
// Canned sheets served from memory, with a per-URL call counter.
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use cert_lookup::config::WidgetOptions;
use cert_lookup::core::Transport;
use cert_lookup::error::SourceError;

pub const HEADER: &str = "Certification #,First,Last,Cert. Exp. Date";

pub const HTML_PAGE: &str = "<!DOCTYPE html><html><head><title>Google Sheets</title></head>\
    <body>Sorry, the file you have requested does not exist.</body></html>";

/// CSV text from data lines, with the default header row on top.
pub fn csv(lines: &[&str]) -> String {
    let mut out = String::from(HEADER);
    for l in lines {
        out.push('\n');
        out.push_str(l);
    }
    out.push('\n');
    out
}

#[derive(Default)]
pub struct FakeTransport {
    responses: HashMap<String, Result<String, SourceError>>,
    calls: Mutex<Vec<String>>,
    delay: Option<Duration>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serve(mut self, url: &str, body: impl Into<String>) -> Self {
        self.responses.insert(url.to_string(), Ok(body.into()));
        self
    }

    pub fn fail(mut self, url: &str, err: SourceError) -> Self {
        self.responses.insert(url.to_string(), Err(err));
        self
    }

    /// Slow every response down, to make concurrent first lookups overlap.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self, url: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|u| *u == url).count()
    }
}

impl Transport for FakeTransport {
    fn get_text(&self, url: &str) -> Result<String, SourceError> {
        self.calls.lock().unwrap().push(url.to_string());
        if let Some(d) = self.delay {
            thread::sleep(d);
        }
        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(SourceError::Status(404)))
    }
}

pub fn widget(id: &str, sources: &[&str]) -> WidgetOptions {
    WidgetOptions::new(id, sources.iter().copied())
}
