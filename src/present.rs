// src/present.rs
//
// The five user-facing views, plus the empty region before any query.
// Wording is fixed; error detail never reaches here.

use crate::lookup::Details;

pub const PROMPT_MSG: &str = "Please enter certification # and last name.";
pub const FOUND_MSG: &str = "The certification you entered is valid. Below are the details.";
pub const NOT_FOUND_MSG: &str = "The certification details you entered were not found in our database.";
pub const ERROR_MSG: &str = "Sorry, something went wrong.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Neutral,
    Positive,
    Negative,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum View {
    /// Nothing shown (before the first query, after Clear).
    Empty,
    Prompt,
    /// Output stays blank; only the action control shows it's busy.
    Loading,
    Found(Details),
    NotFound,
    Error,
}

impl View {
    pub fn tone(&self) -> Tone {
        match self {
            View::Found(_) => Tone::Positive,
            View::NotFound | View::Error => Tone::Negative,
            View::Empty | View::Prompt | View::Loading => Tone::Neutral,
        }
    }

    pub fn headline(&self) -> Option<&'static str> {
        match self {
            View::Empty | View::Loading => None,
            View::Prompt => Some(PROMPT_MSG),
            View::Found(_) => Some(FOUND_MSG),
            View::NotFound => Some(NOT_FOUND_MSG),
            View::Error => Some(ERROR_MSG),
        }
    }

    /// Detail lines under the headline (match only).
    pub fn detail_lines(&self) -> Vec<String> {
        match self {
            View::Found(d) => vec![
                d.full_name(),
                format!("Certification #: {}", d.number),
                format!("Expiration: {}", d.expires),
            ],
            _ => Vec::new(),
        }
    }

    /// Plain-text rendering for terminals.
    pub fn render_text(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        if let Some(h) = self.headline() {
            let mark = match self.tone() {
                Tone::Positive => "[ok] ",
                Tone::Negative => "[x] ",
                Tone::Neutral => "",
            };
            lines.push(join!(mark, h));
        }
        lines.extend(self.detail_lines().into_iter().map(|l| join!("  ", &l)));
        lines.join("\n")
    }
}
