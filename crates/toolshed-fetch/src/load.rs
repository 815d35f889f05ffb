//! Fetch-with-fallback pipeline for the directory resource.
//!
//! One best-effort retrieval, no retry, no timeout configuration. A fetch
//! failure is absorbed silently by the embedded fallback dataset; the only
//! error that surfaces is fetched content that fails to parse.

use thiserror::Error;
use tracing::{info, warn};

use toolshed_core::{Item, ParseError, parse_items};

/// Well-known location of the directory resource.
pub const DEFAULT_SOURCE_URL: &str = "https://tools.internal.corp/utilities.csv";

/// Embedded dataset used when the primary resource is unreachable.
///
/// Static and trusted; [`resolve`] treats a parse failure here as a
/// programming defect, pinned by `fallback_dataset_parses` below.
pub const FALLBACK_CSV: &str = "\
Name,Description,Url,Type
GenAI Playground,Interactive sandbox for testing Gemini and other LLM prompts with temperature controls.,https://ai.internal.corp/playground,AI
Log Sentinel,Real-time distributed log aggregation and anomaly detection dashboard.,https://analytics.internal.corp/logs,Analytics
Vision Lab,Computer vision model training status and dataset visualization tools.,https://ai.internal.corp/vision,AI
Traffic Pulse,Network latency and throughput monitoring for microservices.,https://analytics.internal.corp/traffic,Analytics
Model Registry,Central repository for ML model versioning and deployment artifacts.,https://ai.internal.corp/registry,AI
User Cohorts,Behavioral analytics and user segmentation visualization platform.,https://analytics.internal.corp/cohorts,Analytics
Code Weaver,AI-assisted code generation and refactoring tool for internal libraries.,https://ai.internal.corp/weaver,AI
Metric Scout,Custom metric exploration and dashboard creation tool.,https://analytics.internal.corp/scout,Analytics
";

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("server returned {status}: {body}")]
    Server { status: u16, body: String },
}

/// The one user-visible load failure: the primary source answered, but its
/// content could not be parsed. Fetch failures never reach this type.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to parse directory data: {0}")]
    Parse(#[from] ParseError),
}

/// Where the working set came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Remote,
    Fallback,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Fallback => "fallback",
        }
    }
}

/// Outcome of a successful load: the working set and its provenance.
#[derive(Debug)]
pub struct LoadReport {
    pub items: Vec<Item>,
    pub source: Source,
}

/// HTTP client for the directory resource.
pub struct Loader {
    client: reqwest::Client,
    source_url: String,
}

impl Loader {
    pub fn new(source_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            source_url,
        }
    }

    /// Fetch the primary resource and resolve it into a working set.
    pub async fn load(&self) -> Result<LoadReport, LoadError> {
        resolve(self.fetch().await)
    }

    async fn fetch(&self) -> Result<String, FetchError> {
        info!(url = %self.source_url, "fetching directory resource");
        let resp = self.client.get(&self.source_url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(FetchError::Server {
                status: status.as_u16(),
                body,
            });
        }
        Ok(resp.text().await?)
    }
}

/// Turn a fetch outcome into a working set.
///
/// Fetched content that parses becomes the remote working set. Any fetch
/// failure substitutes the embedded dataset instead, without surfacing an
/// error. Fetched content that does not parse is the one surfaced failure.
pub fn resolve(fetched: Result<String, FetchError>) -> Result<LoadReport, LoadError> {
    match fetched {
        Ok(body) => {
            let items = parse_items(&body)?;
            info!(count = items.len(), "loaded directory from remote source");
            Ok(LoadReport {
                items,
                source: Source::Remote,
            })
        }
        Err(err) => {
            warn!(error = %err, "fetch failed, using embedded fallback dataset");
            let items =
                parse_items(FALLBACK_CSV).expect("embedded fallback dataset must parse");
            info!(count = items.len(), "loaded directory from fallback");
            Ok(LoadReport {
                items,
                source: Source::Fallback,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolshed_core::Category;

    fn unreachable_server() -> FetchError {
        FetchError::Server {
            status: 503,
            body: "service unavailable".into(),
        }
    }

    #[test]
    fn fallback_dataset_parses() {
        let items = parse_items(FALLBACK_CSV).unwrap();
        assert_eq!(items.len(), 8);
        assert!(items.iter().all(|i| !i.name.is_empty() && !i.url.is_empty()));
        assert_eq!(
            items.iter().filter(|i| i.category == Category::Ai).count(),
            4
        );
        assert_eq!(
            items
                .iter()
                .filter(|i| i.category == Category::Analytics)
                .count(),
            4
        );
    }

    #[test]
    fn fetch_failure_resolves_to_fallback_without_error() {
        let report = resolve(Err(unreachable_server())).unwrap();
        assert_eq!(report.source, Source::Fallback);
        assert_eq!(report.items, parse_items(FALLBACK_CSV).unwrap());
    }

    #[test]
    fn fetched_content_that_parses_wins_over_fallback() {
        let body = "\
Name,Description,Url,Type
Alpha,Does alpha things,https://a.example,AI
";
        let report = resolve(Ok(body.to_string())).unwrap();
        assert_eq!(report.source, Source::Remote);
        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].name, "Alpha");
    }

    #[test]
    fn fetched_content_with_bad_header_surfaces_parse_error() {
        let report = resolve(Ok("not,a,directory\nresource,at,all\n".to_string()));
        assert!(matches!(report, Err(LoadError::Parse(_))));
    }

    #[test]
    fn server_error_display_includes_status_and_body() {
        let err = unreachable_server();
        assert_eq!(err.to_string(), "server returned 503: service unavailable");
    }
}
