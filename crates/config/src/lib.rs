//! Configuration loading and env substitution.
//!
//! Config files: `leetscope.toml`, `leetscope.yaml`, or `leetscope.json`.
//! Searched in `./` then `~/.config/leetscope/`.
//!
//! Supports `${ENV_VAR}` substitution in all string values.

pub mod env_subst;
pub mod loader;
pub mod schema;

pub use {
    loader::{config_dir, discover_and_load, load_config, set_config_dir},
    schema::{LeetscopeConfig, ServerConfig, UpstreamConfig},
};
