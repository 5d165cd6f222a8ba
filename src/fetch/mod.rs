//! Resolves a CSV source, either a local path or an http(s) URL, into raw bytes.

mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use std::fmt;
use std::path::{Path, PathBuf};

use reqwest::StatusCode;
use tracing::debug;

use crate::error::DashboardError;

/// Where the reservation CSV is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvSource {
    Local(PathBuf),
    Remote(String),
}

impl CsvSource {
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            CsvSource::Remote(source.to_string())
        } else {
            CsvSource::Local(PathBuf::from(source))
        }
    }
}

impl fmt::Display for CsvSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CsvSource::Local(path) => write!(f, "{}", path.display()),
            CsvSource::Remote(url) => f.write_str(url),
        }
    }
}

/// Reads the whole source into memory. Remote sources go through a fresh [`BasicClient`].
#[tracing::instrument(skip_all, fields(source = %source))]
pub async fn load_csv(source: &CsvSource) -> Result<Vec<u8>, DashboardError> {
    match source {
        CsvSource::Local(path) => read_local(path),
        CsvSource::Remote(url) => {
            let client = BasicClient::new().map_err(|e| DashboardError::Http(e.to_string()))?;
            fetch_bytes(&client, url).await
        }
    }
}

fn read_local(path: &Path) -> Result<Vec<u8>, DashboardError> {
    if !path.exists() {
        return Err(DashboardError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let bytes = std::fs::read(path)?;
    debug!(bytes = bytes.len(), "Read local CSV");
    Ok(bytes)
}

/// Downloads `url` with `client`. A 404 counts as a missing file.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>, DashboardError> {
    let parsed = url
        .parse()
        .map_err(|e| DashboardError::Http(format!("invalid URL {url}: {e}")))?;
    let req = reqwest::Request::new(reqwest::Method::GET, parsed);

    let resp = client
        .execute(req)
        .await
        .map_err(|e| DashboardError::Http(e.to_string()))?;

    let status = resp.status();
    if status == StatusCode::NOT_FOUND {
        return Err(DashboardError::MissingFile {
            path: url.to_string(),
        });
    }
    if !status.is_success() {
        return Err(DashboardError::Http(format!("GET {url} returned {status}")));
    }

    let bytes = resp
        .bytes()
        .await
        .map_err(|e| DashboardError::Http(e.to_string()))?;
    debug!(bytes = bytes.len(), "Downloaded remote CSV");
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::io::Write;

    /// Answers every request with a fixed status and body.
    struct CannedClient {
        status: u16,
        body: &'static str,
    }

    #[async_trait]
    impl HttpClient for CannedClient {
        async fn execute(&self, _req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
            let resp = http::Response::builder()
                .status(self.status)
                .body(self.body)
                .unwrap();
            Ok(reqwest::Response::from(resp))
        }
    }

    #[test]
    fn test_parse_source_kinds() {
        assert_eq!(
            CsvSource::parse("data/balthazar_data.csv"),
            CsvSource::Local(PathBuf::from("data/balthazar_data.csv"))
        );
        assert_eq!(
            CsvSource::parse("https://example.com/odds.csv"),
            CsvSource::Remote("https://example.com/odds.csv".to_string())
        );
    }

    #[tokio::test]
    async fn test_missing_local_file() {
        let source = CsvSource::parse("/definitely/not/here/odds.csv");
        let err = load_csv(&source).await.unwrap_err();
        match err {
            DashboardError::MissingFile { path } => assert_eq!(path, "/definitely/not/here/odds.csv"),
            other => panic!("expected MissingFile, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_reads_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "day_of_week,table_slot\n1,18:00\n").unwrap();

        let source = CsvSource::Local(file.path().to_path_buf());
        let bytes = load_csv(&source).await.unwrap();
        assert_eq!(bytes, b"day_of_week,table_slot\n1,18:00\n");
    }

    #[tokio::test]
    async fn test_remote_not_found_is_missing_file() {
        let client = CannedClient {
            status: 404,
            body: "not found",
        };
        let err = fetch_bytes(&client, "https://odds.test/a.csv")
            .await
            .unwrap_err();
        match err {
            DashboardError::MissingFile { path } => assert_eq!(path, "https://odds.test/a.csv"),
            other => panic!("expected MissingFile, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_remote_server_error_is_http_error() {
        let client = CannedClient {
            status: 500,
            body: "boom",
        };
        let err = fetch_bytes(&client, "https://odds.test/a.csv")
            .await
            .unwrap_err();
        match err {
            DashboardError::Http(msg) => assert!(msg.contains("500")),
            other => panic!("expected Http, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_remote_success_returns_body() {
        let client = CannedClient {
            status: 200,
            body: "day_of_week\n1\n",
        };
        let bytes = fetch_bytes(&client, "https://odds.test/a.csv").await.unwrap();
        assert_eq!(bytes, b"day_of_week\n1\n");
    }

    #[tokio::test]
    async fn test_invalid_url_is_http_error() {
        let client = CannedClient {
            status: 200,
            body: "",
        };
        let err = fetch_bytes(&client, "not a url").await.unwrap_err();
        assert!(matches!(err, DashboardError::Http(_)));
    }
}
