//! The relay: a single forwarding operation from caller to the upstream
//! GraphQL endpoint.
//!
//! The relay validates that a query is present, issues one awaited POST with
//! a static browser-identifying header set, and hands the upstream body back
//! untouched. It holds no state between calls, never retries, and never
//! inspects the GraphQL document it carries.

pub mod client;
pub mod error;

pub use {
    client::{RelayClient, RelayRequest},
    error::{Error, Result},
};
