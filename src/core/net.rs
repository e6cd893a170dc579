// src/core/net.rs
//
// HTTP GET for published sheets. Every request carries a fresh cache-busting
// token and no-cache headers so edits to a sheet show up on the next run.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use reqwest::blocking::Client;
use reqwest::header::{CACHE_CONTROL, PRAGMA};

use crate::config::consts::{CACHE_BUST_PARAM, USER_AGENT};
use crate::error::SourceError;

/// Fetches one source as text. The seam between the lookup and the network.
pub trait Transport: Send + Sync {
    fn get_text(&self, url: &str) -> Result<String, SourceError>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// `timeout = None` waits indefinitely.
    pub fn new(timeout: Option<Duration>) -> Result<Self, SourceError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get_text(&self, url: &str) -> Result<String, SourceError> {
        let full = cache_busted(url, &cache_token());
        logd!("Net: GET {}", full);

        let resp = self
            .client
            .get(&full)
            .header(CACHE_CONTROL, "no-cache, no-store")
            .header(PRAGMA, "no-cache")
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }
        Ok(resp.text()?)
    }
}

static LAST_TOKEN: AtomicU64 = AtomicU64::new(0);

/// Millisecond wall-clock token, strictly increasing across calls so two
/// requests in the same millisecond still differ.
pub fn cache_token() -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);
    let prev = LAST_TOKEN
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |last| Some(now.max(last + 1)))
        .unwrap_or_else(|last| last);
    now.max(prev + 1).to_string()
}

/// Append `cb=<token>` to the query string, keeping any fragment last.
pub fn cache_busted(url: &str, token: &str) -> String {
    let (base, fragment) = match url.split_once('#') {
        Some((b, f)) => (b, Some(f)),
        None => (url, None),
    };
    let sep = if !base.contains('?') {
        "?"
    } else if base.ends_with('?') || base.ends_with('&') {
        ""
    } else {
        "&"
    };

    let mut out = join!(base, sep, CACHE_BUST_PARAM, "=", token);
    if let Some(f) = fragment {
        out.push('#');
        out.push_str(f);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_to_existing_query() {
        assert_eq!(
            cache_busted("https://x.test/pub?output=csv", "42"),
            "https://x.test/pub?output=csv&cb=42"
        );
    }

    #[test]
    fn starts_query_when_missing() {
        assert_eq!(cache_busted("http://x.test/a.csv", "7"), "http://x.test/a.csv?cb=7");
        assert_eq!(cache_busted("http://x.test/a.csv?", "7"), "http://x.test/a.csv?cb=7");
    }

    #[test]
    fn fragment_stays_at_the_end() {
        assert_eq!(
            cache_busted("http://x.test/a?gid=0#sheet", "1"),
            "http://x.test/a?gid=0&cb=1#sheet"
        );
    }

    #[test]
    fn tokens_never_repeat() {
        let a: u64 = cache_token().parse().unwrap();
        let b: u64 = cache_token().parse().unwrap();
        let c: u64 = cache_token().parse().unwrap();
        assert!(a < b && b < c, "{a} {b} {c}");
    }
}
