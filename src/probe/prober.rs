// src/probe/prober.rs
use super::case::ProbeCase;
use super::outcome::{Outcome, ProbeResult};
use reqwest::{redirect, Client, StatusCode};
use std::time::{Duration, Instant};
use tokio::time::timeout;
use url::Url;

#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Connection failed: {0}")]
    Connect(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl ProbeError {
    fn classify(err: reqwest::Error, limit: Duration) -> Self {
        if err.is_timeout() {
            ProbeError::Timeout(limit)
        } else if err.is_connect() {
            ProbeError::Connect(err.to_string())
        } else {
            ProbeError::Transport(err.to_string())
        }
    }
}

/// Issues single GET probes against one base URL.
#[derive(Debug, Clone)]
pub struct Prober {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl Prober {
    pub fn new(client: Client, base_url: Url, timeout: Duration) -> Self {
        Self {
            client,
            base_url,
            timeout,
        }
    }

    /// Client for a probe run. Redirects are reported, not followed.
    pub fn build_client(timeout: Duration) -> Result<Client, ProbeError> {
        Client::builder()
            .timeout(timeout)
            .redirect(redirect::Policy::none())
            .build()
            .map_err(ProbeError::Client)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn probe(&self, case: &ProbeCase) -> ProbeResult {
        self.probe_endpoint(&case.name, &case.path, &case.query())
            .await
    }

    /// Probe `path` once and log the outcome. Never fails: every fault
    /// becomes an `Outcome::Error`.
    pub async fn probe_endpoint(
        &self,
        name: &str,
        path: &str,
        params: &[(String, String)],
    ) -> ProbeResult {
        let url = join_endpoint(&self.base_url, path);
        let start = Instant::now();

        let result = timeout(self.timeout, self.fetch(&url, params)).await;

        let elapsed = start.elapsed();

        let outcome = match result {
            Ok(Ok((status, _))) if status == StatusCode::OK => Outcome::Pass {
                status: status.as_u16(),
            },
            Ok(Ok((status, body))) => Outcome::Fail {
                status: status.as_u16(),
                body,
            },
            Ok(Err(e)) => Outcome::Error {
                error: ProbeError::classify(e, self.timeout).to_string(),
            },
            Err(_) => Outcome::Error {
                error: ProbeError::Timeout(self.timeout).to_string(),
            },
        };

        let result = ProbeResult::new(name, path, elapsed, outcome);
        result.emit();
        result
    }

    async fn fetch(
        &self,
        url: &str,
        params: &[(String, String)],
    ) -> Result<(StatusCode, String), reqwest::Error> {
        let mut request = self.client.get(url);
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        Ok((status, body))
    }
}

/// Appends `path` verbatim to the base URL, ignoring a trailing slash on the base.
pub fn join_endpoint(base_url: &Url, path: &str) -> String {
    format!("{}{}", base_url.as_str().trim_end_matches('/'), path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_join_endpoint_with_and_without_trailing_slash() {
        let bare = Url::parse("http://localhost:8000").unwrap();
        let slashed = Url::parse("http://localhost:8000/").unwrap();
        assert_eq!(join_endpoint(&bare, "/info/"), "http://localhost:8000/info/");
        assert_eq!(join_endpoint(&slashed, "/info/"), "http://localhost:8000/info/");
        assert_eq!(join_endpoint(&bare, "/"), "http://localhost:8000/");
    }

    #[test]
    fn test_join_endpoint_keeps_base_path_prefix() {
        let base = Url::parse("http://localhost:8000/api/").unwrap();
        assert_eq!(
            join_endpoint(&base, "/album/similar/"),
            "http://localhost:8000/api/album/similar/"
        );
    }

    #[test]
    fn test_build_client() {
        assert!(Prober::build_client(Duration::from_secs(15)).is_ok());
    }

    proptest! {
        #[test]
        fn joined_url_ends_with_path(segment in "[a-z]{1,12}", port in 1u16..u16::MAX) {
            let base = Url::parse(&format!("http://127.0.0.1:{}", port)).unwrap();
            let path = format!("/{}/", segment);
            let joined = join_endpoint(&base, &path);
            prop_assert!(joined.ends_with(&path));
            prop_assert_eq!(joined.matches("//").count(), 1);
            prop_assert!(Url::parse(&joined).is_ok());
        }
    }
}
