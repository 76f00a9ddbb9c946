//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The underlying HTTP call failed (connection error or timeout).
    #[error("transport error")]
    Transport(#[from] reqwest::Error),

    /// The request URL could not be constructed from the configured base URL.
    #[error("invalid request URL")]
    InvalidUrl(#[from] url::ParseError),

    /// No organization ID is configured; the request was never sent.
    #[error("organization ID is not configured")]
    MissingOrganization,

    /// The response body did not decode into the expected schema. Fatal:
    /// indicates an API contract violation, not a transient condition.
    #[error("unexpected response body from request to {action}")]
    Protocol {
        action: String,
        #[source]
        source: serde_json::Error,
    },

    /// The API returned a well-formed envelope reporting a failure.
    #[error("request to {action} failed with status {status} ({response_code}): {message}")]
    Api {
        action: String,
        status: u16,
        response_code: String,
        message: String,
    },

    /// An accepted-operation envelope was missing an expected informational
    /// field.
    #[error("received an unexpected response (missing '{field}') with status {status} ({response_code}): {message}")]
    MissingField {
        field: &'static str,
        status: u16,
        response_code: String,
        message: String,
    },

    /// A name-based lookup matched more than one record. Name is not a
    /// unique key server-side; the API can only filter by it.
    #[error("found multiple images ({matches}) matching '{name}' in datacenter '{datacenter_id}'")]
    AmbiguousName {
        name: String,
        datacenter_id: String,
        matches: i64,
    },
}
