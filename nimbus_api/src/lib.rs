//! Client SDK for the Nimbus Compute REST API.
//!
//! Covers the virtual machine image resource surface: retrieval by ID,
//! lookup by name, paginated listing, and export to an OVF package.

mod client;
mod errors;
mod query;
mod response;
pub mod types;

pub use self::client::{Client, Config};
pub use self::errors::Error;
pub use self::query::{ImageQuery, Query, QueryCommon};
