use std::path::PathBuf;

/// Server configuration
///
/// All items can be overridden through environment variables:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HTTP_PORT | 3001 | HTTP API port |
/// | DATA_FILE | data/users.json | Backing employee document |
/// | LOG_DIR | (unset) | Optional directory for daily log files |
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Path of the JSON document holding the employee collection
    pub data_file: PathBuf,
    /// Optional log directory (stdout only when unset)
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3001),
            data_file: std::env::var("DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data/users.json")),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            http_port: 3001,
            data_file: PathBuf::from("data/users.json"),
            log_dir: None,
        }
    }
}
