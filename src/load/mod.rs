// src/load/mod.rs

use anyhow::{Context, Result};
use reqwest::Client;
use std::{fmt, path::PathBuf};
use tokio::fs;
use tracing::info;
use url::Url;

/// Where the launch CSV lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(Url),
}

impl Source {
    /// `http(s)://` strings become URLs; anything else is a local path.
    pub fn parse(s: &str) -> Self {
        match Url::parse(s) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Source::Url(url),
            _ => Source::File(PathBuf::from(s)),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Url(url) => write!(f, "{}", url),
        }
    }
}

/// Read the whole CSV resource into memory. Any failure here is fatal to the run.
#[tracing::instrument(level = "info", skip(client, source), fields(source = %source))]
pub async fn load_csv_text(client: &Client, source: &Source) -> Result<String> {
    let text = match source {
        Source::File(path) => {
            let bytes = fs::read(path)
                .await
                .with_context(|| format!("Failed to read CSV file {:?}", path))?;
            String::from_utf8(bytes)
                .with_context(|| format!("CSV file {:?} is not valid UTF-8", path))?
        }
        Source::Url(url) => client
            .get(url.as_str())
            .send()
            .await
            .with_context(|| format!("Failed to fetch CSV from {}", url))?
            .error_for_status()
            .with_context(|| format!("Failed to load CSV from {}", url))?
            .text()
            .await
            .with_context(|| format!("Failed to read CSV body from {}", url))?,
    };
    info!(bytes = text.len(), "loaded CSV");
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn classify_sources() {
        assert!(matches!(
            Source::parse("https://example.org/mission_launches.csv"),
            Source::Url(_)
        ));
        assert_eq!(
            Source::parse("mission_launches.csv"),
            Source::File(PathBuf::from("mission_launches.csv"))
        );
        assert!(matches!(Source::parse("C:\\data\\launches.csv"), Source::File(_)));
        assert!(matches!(Source::parse("file:///tmp/x.csv"), Source::File(_)));
    }

    #[tokio::test]
    async fn reads_local_file() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        write!(tmp, "Date,Mission_Status\n2020-01-01,Success\n")?;

        let source = Source::File(tmp.path().to_path_buf());
        let text = load_csv_text(&Client::new(), &source).await?;
        assert!(text.starts_with("Date,Mission_Status"));
        Ok(())
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let source = Source::parse("/definitely/not/here/launches.csv");
        let err = load_csv_text(&Client::new(), &source).await.unwrap_err();
        assert!(err.to_string().contains("Failed to read CSV file"));
    }

    #[tokio::test]
    async fn non_utf8_file_is_an_error() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        tmp.write_all(&[0xff, 0xfe, 0x00, b','])?;
        let source = Source::File(tmp.path().to_path_buf());
        assert!(load_csv_text(&Client::new(), &source).await.is_err());
        Ok(())
    }
}
