//! CLI command implementations
//!
//! `serve` boots in a fixed order: configuration, logging, store seed,
//! runtime, listener. `check` loads a data file and exits.

use std::path::{Path, PathBuf};

use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::http_server::HttpServer;
use crate::storage::BookStore;

use super::args::Command;
use super::config::AppConfig;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve {
            config,
            host,
            port,
            data_file,
        } => serve(config.as_deref(), host, port, data_file),
        Command::Check { data_file } => check(&data_file),
    }
}

/// Resolve configuration from an optional file plus flag overrides
pub fn resolve_config(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    data_file: Option<PathBuf>,
) -> CliResult<AppConfig> {
    let base = match config_path {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    Ok(base.with_overrides(host, port, data_file))
}

/// Build the initial store, seeded when a data file is configured
pub fn seed_store(config: &AppConfig) -> CliResult<BookStore> {
    match &config.data_file {
        Some(path) => Ok(BookStore::from_file(path)?),
        None => Ok(BookStore::new()),
    }
}

/// Start the HTTP server and block until it stops
pub fn serve(
    config_path: Option<&Path>,
    host: Option<String>,
    port: Option<u16>,
    data_file: Option<PathBuf>,
) -> CliResult<()> {
    let config = resolve_config(config_path, host, port, data_file)?;
    init_tracing(&config.log_level);

    let store = seed_store(&config)?;
    info!(books = store.len(), "book store ready");

    let server = HttpServer::with_config(config.server, store);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::io_error(format!("Failed to start runtime: {}", e)))?;

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::serve_failed(e.to_string()))
}

/// Load a data file and print the record count
pub fn check(data_file: &Path) -> CliResult<()> {
    let store = BookStore::from_file(data_file)?;
    write_response(json!({
        "data_file": data_file.display().to_string(),
        "books": store.len(),
    }))
}

/// Install the global subscriber. RUST_LOG wins over `default_level`.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed (tests); keep the existing one.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn data_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn config_for(path: &Path) -> AppConfig {
        AppConfig::default().with_overrides(None, None, Some(path.to_path_buf()))
    }

    #[test]
    fn test_resolve_config_without_file() {
        let config = resolve_config(None, None, Some(5000), None).unwrap();
        assert_eq!(config.server.port, 5000);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn test_resolve_config_flag_overrides_file() {
        let file = data_file(r#"{"server": {"port": 7000}, "log_level": "warn"}"#);
        let config = resolve_config(Some(file.path()), None, Some(7001), None).unwrap();
        assert_eq!(config.server.port, 7001);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_seed_store_empty_without_data_file() {
        let store = seed_store(&AppConfig::default()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_seed_store_from_data_file() {
        let file = data_file(r#"[{"id":"1","isbn":"X","title":"T","published":"2020"}]"#);
        let config = config_for(file.path());

        let store = seed_store(&config).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_seed_store_bad_data_file() {
        let file = data_file("not json");
        let config = config_for(file.path());

        let err = seed_store(&config).unwrap_err();
        assert_eq!(err.code_str(), "BOOKSHELF_CLI_LOAD_FAILED");
        assert!(err.message().starts_with("[BOOKSHELF_STORAGE_PARSE_ERROR]"));
    }

    #[test]
    fn test_seed_store_missing_data_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = config_for(&dir.path().join("absent.json"));

        let err = seed_store(&config).unwrap_err();
        assert!(err.message().starts_with("[BOOKSHELF_STORAGE_READ_ERROR]"));
        assert!(err.message().contains("absent.json"));
    }

    #[test]
    fn test_check_reports_failure() {
        let file = data_file("[{\"id\":");
        assert!(check(file.path()).is_err());
    }

    #[test]
    fn test_check_succeeds() {
        let file = data_file(r#"[{"id":"1"},{"id":"2"}]"#);
        assert!(check(file.path()).is_ok());
    }
}
