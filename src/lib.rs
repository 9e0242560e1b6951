//! SPARQL Query Validator
//!
//! Thin client for validating a manufacturing knowledge graph served by a
//! SPARQL endpoint (Apache Jena Fuseki by default). Provides:
//!
//! - [`SparqlClient`] — liveness probe and query execution over HTTP
//! - [`queries`] — the fixed battery of validation queries
//! - [`format_results`] — human-readable rendering of query results
//!
//! Query execution never returns `Err`: failures surface as
//! [`ResultSet::Error`] so a driver can print them and keep going.

pub mod client;
pub mod error;
pub mod format;
pub mod queries;
pub mod results;

pub use client::SparqlClient;
pub use error::ClientError;
pub use format::format_results;
pub use queries::{TestQuery, DEFAULT_ENDPOINT, PREFIXES, TEST_QUERIES};
pub use results::{BindingRow, RdfValue, ResultSet};
