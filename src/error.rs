//! Error types for the SPARQL client

use thiserror::Error;

/// Errors raised while talking to the SPARQL endpoint.
///
/// These never escape [`crate::SparqlClient::execute_query`]; they are
/// folded into [`crate::ResultSet::Error`] so callers see failures as data.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Endpoint answered with a non-200 status
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Transport failure (timeout, DNS, connection refused)
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}
