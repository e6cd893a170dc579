// src/config/consts.rs

// Column headers (override per widget if a sheet differs)
pub const DEFAULT_NUM_HEADER: &str = "Certification #";
pub const DEFAULT_FIRST_HEADER: &str = "First";
pub const DEFAULT_LAST_HEADER: &str = "Last";
pub const DEFAULT_EXP_HEADER: &str = "Cert. Exp. Date";

// Published sheets
pub const PEVO_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQWo_LcTb5jCAOU5b6ZcUXVx0nY0cAJuV8Tumuk1Szz8zpRUYrZ8XM2LrzyufqnarTKSK4_X85mgpxq/pub?output=csv";
pub const WITPAC_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vQgbVwrRM1Una1d29lwAccdwoMfBzaY8cc8zQ0O2LLT6rEOcDs_glNiH05f8TNEYwtBu183xZhDjYYd/pub?output=csv";

// Net
pub const CACHE_BUST_PARAM: &str = "cb";
pub const USER_AGENT: &str = concat!("cert_lookup/", env!("CARGO_PKG_VERSION"));

// Config
pub const CONFIG_FILE: &str = "cert_lookup.toml";
pub const CONFIG_PATH_ENV: &str = "CERT_LOOKUP_CONFIG";
pub const ENV_PREFIX: &str = "CERT_LOOKUP_";

// Logging
pub const LOG_FILE: &str = ".store/debug.log";
pub const DEFAULT_LOG_FILTER: &str = "info";
