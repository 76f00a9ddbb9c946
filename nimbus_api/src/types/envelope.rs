//! The generic response envelope the API wraps non-trivial results in.

use serde::{Deserialize, Serialize};

/// Response code reported when the requested resource does not exist.
pub const RESPONSE_CODE_RESOURCE_NOT_FOUND: &str = "RESOURCE_NOT_FOUND";

/// Response code reported when an asynchronous operation has been accepted
/// and is still running.
pub const RESPONSE_CODE_IN_PROGRESS: &str = "IN_PROGRESS";

/// Generic envelope returned by the API on non-2xx responses and on
/// side-effecting calls.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    /// Machine-readable outcome code (e.g. `RESOURCE_NOT_FOUND`).
    pub response_code: String,

    /// Human-readable diagnostic text.
    #[serde(default)]
    pub message: String,

    /// Out-of-band named results (e.g. the ID of an accepted operation).
    #[serde(default)]
    pub info: Vec<FieldMessage>,
}

/// A single named value in the envelope's `info` list.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FieldMessage {
    pub name: String,
    pub value: String,
}

impl ApiResponse {
    /// Looks up an informational field by name. Returns `None` when the
    /// field is absent; callers decide whether absence is an error.
    pub fn field_message(&self, name: &str) -> Option<&str> {
        self.info
            .iter()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
    }
}
