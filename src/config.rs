//! Runtime settings read from the environment (after `.env` is loaded).

use std::net::SocketAddr;

use anyhow::{Context, Result};

pub const DEFAULT_CSV_SOURCE: &str = "data/balthazar_data.csv";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8501";
pub const DEFAULT_LOG_FILE_PATH: &str = "logs/table_odds.log";

/// Where to read data from, where to listen, and where to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub csv_source: String,
    pub bind_addr: SocketAddr,
    pub log_file_path: String,
}

impl Settings {
    /// Reads `TABLE_ODDS_CSV`, `TABLE_ODDS_BIND` and `LOG_FILE_PATH`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Settings::from_env`] with an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let csv_source = lookup("TABLE_ODDS_CSV").unwrap_or_else(|| DEFAULT_CSV_SOURCE.to_string());
        let bind = lookup("TABLE_ODDS_BIND").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind
            .parse()
            .with_context(|| format!("TABLE_ODDS_BIND is not a socket address: {bind}"))?;
        let log_file_path =
            lookup("LOG_FILE_PATH").unwrap_or_else(|| DEFAULT_LOG_FILE_PATH.to_string());

        Ok(Self {
            csv_source,
            bind_addr,
            log_file_path,
        })
    }

    /// Applies command-line values on top of the environment.
    pub fn with_overrides(mut self, csv_source: Option<String>, bind_addr: Option<SocketAddr>) -> Self {
        if let Some(source) = csv_source {
            self.csv_source = source;
        }
        if let Some(addr) = bind_addr {
            self.bind_addr = addr;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings.csv_source, DEFAULT_CSV_SOURCE);
        assert_eq!(settings.bind_addr, "127.0.0.1:8501".parse::<SocketAddr>().unwrap());
        assert_eq!(settings.log_file_path, DEFAULT_LOG_FILE_PATH);
    }

    #[test]
    fn test_environment_values() {
        let settings = Settings::from_lookup(lookup(&[
            ("TABLE_ODDS_CSV", "/srv/odds.csv"),
            ("TABLE_ODDS_BIND", "0.0.0.0:9000"),
        ]))
        .unwrap();
        assert_eq!(settings.csv_source, "/srv/odds.csv");
        assert_eq!(settings.bind_addr.port(), 9000);
    }

    #[test]
    fn test_bad_bind_address() {
        assert!(Settings::from_lookup(lookup(&[("TABLE_ODDS_BIND", "nowhere")])).is_err());
    }

    #[test]
    fn test_cli_overrides_win() {
        let settings = Settings::from_lookup(lookup(&[("TABLE_ODDS_CSV", "env.csv")]))
            .unwrap()
            .with_overrides(Some("cli.csv".to_string()), None);
        assert_eq!(settings.csv_source, "cli.csv");
        assert_eq!(settings.bind_addr.port(), 8501);
    }
}
