//! Classification of raw HTTP results into typed outcomes.
//!
//! Every operation funnels its `(status, body)` pair through one of the
//! helpers here, so the success / not-found / in-progress / failure contract
//! is identical across the whole resource surface:
//!
//! - a success status decodes the body strictly as the operation's target
//!   schema, without ever consulting the envelope;
//! - a non-success status decodes the body as the [`ApiResponse`] envelope
//!   and branches on its response code;
//! - a body that decodes as neither is a protocol error, never retried.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::types::{ApiResponse, RESPONSE_CODE_IN_PROGRESS, RESPONSE_CODE_RESOURCE_NOT_FOUND};
use crate::Error;

/// Decodes a single-record fetch.
///
/// Returns `Ok(None)` when the envelope reports the resource-not-found
/// sentinel; callers treat absence as a first-class result, not an error.
pub(crate) fn decode_resource<T>(status: StatusCode, body: &str, action: &str) -> Result<Option<T>, Error>
where
    T: DeserializeOwned,
{
    if status == StatusCode::OK {
        return decode_body(body, action).map(Some);
    }

    let envelope = read_envelope(body, action)?;
    if envelope.response_code == RESPONSE_CODE_RESOURCE_NOT_FOUND {
        return Ok(None);
    }

    Err(domain_error(status, envelope, action))
}

/// Decodes a listing fetch.
///
/// Unlike [`decode_resource`] there is no not-found branch: an empty page is
/// the server's way of saying "no matches", so any non-success status is an
/// error.
pub(crate) fn decode_page<T>(status: StatusCode, body: &str, action: &str) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    if status == StatusCode::OK {
        return decode_body(body, action);
    }

    let envelope = read_envelope(body, action)?;
    Err(domain_error(status, envelope, action))
}

/// Decodes the envelope of an accepted long-running operation and extracts
/// the named informational field.
///
/// The body is always an envelope here, whatever the status: the operation
/// is judged by its response code alone. An in-progress envelope without
/// the expected field is a malformed success, reported as
/// [`Error::MissingField`] rather than a domain error.
pub(crate) fn accepted_operation_field(
    status: StatusCode,
    body: &str,
    field: &'static str,
    action: &str,
) -> Result<String, Error> {
    let envelope = read_envelope(body, action)?;

    if envelope.response_code != RESPONSE_CODE_IN_PROGRESS {
        return Err(domain_error(status, envelope, action));
    }

    match envelope.field_message(field) {
        Some(value) => Ok(value.to_string()),
        None => Err(Error::MissingField {
            field,
            status: status.as_u16(),
            response_code: envelope.response_code,
            message: envelope.message,
        }),
    }
}

fn decode_body<T>(body: &str, action: &str) -> Result<T, Error>
where
    T: DeserializeOwned,
{
    serde_json::from_str::<T>(body).map_err(|source| {
        tracing::error!("failed to decode response while trying to {}: {}", action, source);
        Error::Protocol {
            action: action.to_string(),
            source,
        }
    })
}

fn read_envelope(body: &str, action: &str) -> Result<ApiResponse, Error> {
    decode_body::<ApiResponse>(body, action)
}

fn domain_error(status: StatusCode, envelope: ApiResponse, action: &str) -> Error {
    Error::Api {
        action: action.to_string(),
        status: status.as_u16(),
        response_code: envelope.response_code,
        message: envelope.message,
    }
}
