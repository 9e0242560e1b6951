//! HTTP client for a SPARQL 1.1 protocol endpoint

use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use tracing::debug;

use crate::error::ClientError;
use crate::queries::{DEFAULT_ENDPOINT, PREFIXES};
use crate::results::ResultSet;

/// Liveness probe timeout.
const PING_TIMEOUT: Duration = Duration::from_secs(5);

/// Query execution timeout.
const QUERY_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for a SPARQL endpoint.
///
/// Holds the endpoint URL and the namespace prefix block prepended to every
/// query. Operations never return `Err`: [`SparqlClient::test_connection`]
/// reports a bool and [`SparqlClient::execute_query`] folds failures into
/// [`ResultSet::Error`].
///
/// # Example
/// ```no_run
/// # use sparql_validator::SparqlClient;
/// let client = SparqlClient::new("http://localhost:3030/manufacturing/sparql");
/// ```
pub struct SparqlClient {
    endpoint_url: String,
    prefixes: &'static str,
    http: Client,
}

impl SparqlClient {
    /// Create a client for the given endpoint URL.
    pub fn new(endpoint_url: &str) -> Self {
        Self {
            endpoint_url: endpoint_url.to_string(),
            prefixes: PREFIXES,
            http: Client::new(),
        }
    }

    /// The configured endpoint URL.
    pub fn endpoint_url(&self) -> &str {
        &self.endpoint_url
    }

    /// Probe endpoint liveness via Fuseki's ping path.
    ///
    /// The ping URL is derived by substituting `/$/ping` for the `/sparql`
    /// suffix of the endpoint URL. True only on HTTP 200.
    pub async fn test_connection(&self) -> bool {
        let ping_url = self.ping_url();
        match self
            .http
            .get(&ping_url)
            .timeout(PING_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response.status() == StatusCode::OK,
            Err(e) => {
                debug!(url = %ping_url, error = %e, "ping failed");
                false
            }
        }
    }

    /// Execute a SPARQL query and classify the response.
    ///
    /// The prefix block is prepended to `query` before sending. HTTP error
    /// statuses and transport failures come back as [`ResultSet::Error`].
    pub async fn execute_query(&self, query: &str) -> ResultSet {
        match self.send_query(query).await {
            Ok(body) => ResultSet::from_json(body),
            Err(e) => {
                debug!(error = %e, "query failed");
                ResultSet::Error(e.to_string())
            }
        }
    }

    fn ping_url(&self) -> String {
        self.endpoint_url.replacen("/sparql", "/$/ping", 1)
    }

    async fn send_query(&self, query: &str) -> Result<serde_json::Value, ClientError> {
        let full_query = format!("{}\n{}", self.prefixes, query);

        let response = self
            .http
            .get(&self.endpoint_url)
            .query(&[("query", full_query.as_str()), ("format", "json")])
            .header(header::ACCEPT, "application/sparql-results+json")
            .timeout(QUERY_TIMEOUT)
            .send()
            .await?;

        if response.status() == StatusCode::OK {
            Ok(response.json().await?)
        } else {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            Err(ClientError::Status { status, body })
        }
    }
}

impl Default for SparqlClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_client_targets_local_fuseki() {
        let client = SparqlClient::default();
        assert_eq!(
            client.endpoint_url(),
            "http://localhost:3030/manufacturing/sparql"
        );
    }

    #[test]
    fn ping_url_substitutes_query_path() {
        let client = SparqlClient::new("http://localhost:3030/manufacturing/sparql");
        assert_eq!(
            client.ping_url(),
            "http://localhost:3030/manufacturing/$/ping"
        );
    }
}
