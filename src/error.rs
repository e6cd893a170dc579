// src/error.rs
use std::fmt;
use std::path::PathBuf;

/// Why one sheet contributed nothing. Never shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SourceError {
    Network(String),
    Status(u16),
    /// Endpoint answered with a web page instead of CSV (unpublished sheet, login wall).
    Html,
    Parse(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Network(msg) => write!(f, "Network error: {}", msg),
            SourceError::Status(code) => write!(f, "HTTP status {}", code),
            SourceError::Html => write!(f, "CSV endpoint returned HTML"),
            SourceError::Parse(msg) => write!(f, "CSV parse error: {}", msg),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => SourceError::Status(status.as_u16()),
            None => SourceError::Network(err.to_string()),
        }
    }
}

impl From<csv::Error> for SourceError {
    fn from(err: csv::Error) -> Self {
        SourceError::Parse(err.to_string())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LookupError {
    /// Missing certification number or last name.
    Validation,
    /// Anything else that stopped the lookup; detail goes to the log only.
    Unexpected(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Validation => write!(f, "Certification # and last name are required"),
            LookupError::Unexpected(msg) => write!(f, "Lookup failed: {}", msg),
        }
    }
}

impl std::error::Error for LookupError {}

#[derive(Debug)]
pub enum ConfigError {
    Missing(PathBuf),
    Invalid(String),
    Figment(Box<figment::Error>),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(path) => write!(f, "Config file not found: {}", path.display()),
            ConfigError::Invalid(msg) => write!(f, "Invalid config: {}", msg),
            ConfigError::Figment(err) => write!(f, "Config error: {}", err),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Figment(Box::new(err))
    }
}
