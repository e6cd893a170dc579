// src/widget.rs
//
// Per-form state machine, independent of any UI toolkit.
//
//   Idle ─submit─▶ (blank input) Invalid
//        └─────▶ Loading ─finish─▶ Matched | NotFound | Error
//   any ─clear─▶ Idle
//
// Every terminal state accepts a new submit. While Loading, submit is refused,
// which covers both the button and the Enter key. Each submit gets a ticket;
// a result for an older ticket (e.g. one that finished after Clear) is dropped.

use crate::{
    error::LookupError,
    lookup::{Details, Outcome, Query},
    present::View,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WidgetState {
    Idle,
    Invalid,
    Loading,
    Matched(Details),
    NotFound,
    Error,
}

/// A query accepted for lookup, tagged with the ticket `finish` expects back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub ticket: u64,
    pub query: Query,
}

#[derive(Debug)]
pub struct Widget {
    pub cert_input: String,
    pub last_input: String,
    state: WidgetState,
    ticket: u64,
    focus_cert: bool,
}

impl Default for Widget {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget {
    pub fn new() -> Self {
        Self {
            cert_input: s!(),
            last_input: s!(),
            state: WidgetState::Idle,
            ticket: 0,
            focus_cert: false,
        }
    }

    pub fn state(&self) -> &WidgetState { &self.state }

    /// Action control is disabled and shows a spinner.
    pub fn is_busy(&self) -> bool { self.state == WidgetState::Loading }

    /// Validate the inputs and, if they pass, enter Loading.
    /// Blank input never yields a submission, so it never reaches the network.
    pub fn submit(&mut self) -> Option<Submission> {
        if self.is_busy() {
            logd!("Widget: submit ignored while loading");
            return None;
        }
        match Query::new(&self.cert_input, &self.last_input) {
            Ok(query) => {
                self.ticket += 1;
                self.state = WidgetState::Loading;
                Some(Submission { ticket: self.ticket, query })
            }
            Err(_) => {
                self.state = WidgetState::Invalid;
                None
            }
        }
    }

    /// Apply a lookup result. Returns false if it was stale and ignored.
    pub fn finish(&mut self, ticket: u64, result: Result<Outcome, LookupError>) -> bool {
        if !self.is_busy() || ticket != self.ticket {
            logd!("Widget: dropping stale result (ticket {ticket}, current {})", self.ticket);
            return false;
        }
        self.state = match result {
            Ok(Outcome::Found(details)) => WidgetState::Matched(details),
            Ok(Outcome::NotFound(_)) => WidgetState::NotFound,
            Err(LookupError::Validation) => WidgetState::Invalid,
            Err(e) => {
                loge!("Widget: lookup failed: {e}");
                WidgetState::Error
            }
        };
        true
    }

    /// Back to Idle from anywhere: empty inputs, empty output, control enabled.
    pub fn clear(&mut self) {
        self.cert_input.clear();
        self.last_input.clear();
        self.state = WidgetState::Idle;
        self.focus_cert = true;
    }

    /// One-shot request to focus the certification input (set by `clear`).
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_cert)
    }

    pub fn view(&self) -> View {
        match &self.state {
            WidgetState::Idle => View::Empty,
            WidgetState::Invalid => View::Prompt,
            WidgetState::Loading => View::Loading,
            WidgetState::Matched(d) => View::Found(d.clone()),
            WidgetState::NotFound => View::NotFound,
            WidgetState::Error => View::Error,
        }
    }
}
