//! Gateway: the HTTP surface in front of the catalog and the relay.
//!
//! Routes:
//! - `POST /api/graphql` — forward a GraphQL payload upstream
//! - `GET /api/endpoints` — the query catalog
//! - `GET /api/endpoints/{id}` — one catalog entry
//! - `GET /health`
//!
//! All responses are JSON; CORS is permissive so any browser frontend can
//! talk to the gateway directly.

pub mod routes;
pub mod server;

pub use server::{AppState, build_app, start_gateway};
