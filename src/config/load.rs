// src/config/load.rs
//
// Layering, lowest to highest:
//   built-in defaults → cert_lookup.toml → CERT_LOOKUP_* environment.
// The file path comes from the caller (--config), then CERT_LOOKUP_CONFIG,
// then ./cert_lookup.toml. Only an explicitly named file must exist.

use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use super::consts::{CONFIG_FILE, CONFIG_PATH_ENV, ENV_PREFIX};
use super::options::AppOptions;
use crate::error::ConfigError;

pub fn load(path: Option<&Path>) -> Result<AppOptions, ConfigError> {
    let (path, explicit) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => match env::var_os(CONFIG_PATH_ENV) {
            Some(p) => (PathBuf::from(p), true),
            None => (PathBuf::from(CONFIG_FILE), false),
        },
    };

    if explicit && !path.exists() {
        return Err(ConfigError::Missing(path));
    }

    let opts: AppOptions = figment(&path).extract()?;
    validate(&opts)?;

    logd!(
        "Config: {} widget(s) from {}",
        opts.widgets.len(),
        if path.exists() { path.display().to_string() } else { s!("defaults") }
    );
    Ok(opts)
}

fn figment(path: &Path) -> Figment {
    Figment::from(Serialized::defaults(AppOptions::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).ignore(&["config"]))
}

pub fn validate(opts: &AppOptions) -> Result<(), ConfigError> {
    if opts.widgets.is_empty() {
        return Err(ConfigError::Invalid(s!("no widgets configured")));
    }

    let mut seen = HashSet::new();
    for w in &opts.widgets {
        let id = w.id.trim().to_ascii_lowercase();
        if id.is_empty() {
            return Err(ConfigError::Invalid(s!("widget with empty id")));
        }
        if !seen.insert(id) {
            return Err(ConfigError::Invalid(format!("duplicate widget id '{}'", w.id)));
        }
        let urls = w.source_urls();
        if urls.is_empty() {
            return Err(ConfigError::Invalid(format!("widget '{}' has no sources", w.id)));
        }
        if urls.iter().any(|u| u.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("widget '{}' has an empty source URL", w.id)));
        }
        let c = &w.columns;
        if [&c.number, &c.first, &c.last, &c.expires].iter().any(|h| h.trim().is_empty()) {
            return Err(ConfigError::Invalid(format!("widget '{}' has an empty column name", w.id)));
        }
    }
    Ok(())
}
