//! The query catalog: every predefined LeetCode GraphQL query the gateway
//! exposes, plus the per-endpoint variable construction rules.
//!
//! Pure data and pure functions — no I/O lives here.

pub mod builtin;
pub mod definition;
pub mod variables;

pub use {
    definition::{Catalog, QueryDefinition},
    variables::build_variables,
};
