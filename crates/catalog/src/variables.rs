//! Per-endpoint variable construction.
//!
//! A handful of endpoints need more than a bare `username`; the overrides
//! here mirror what the LeetCode web client sends for each query. The date
//! is passed in by the caller, so every builder is a pure function.

use {
    chrono::{Datelike, NaiveDate},
    serde_json::{Map, Value, json},
};

use crate::definition::QueryDefinition;

/// Number of entries requested by the recent-submissions query.
pub const RECENT_SUBMISSIONS_LIMIT: i64 = 20;

type VariableBuilder = fn(&str, NaiveDate) -> Map<String, Value>;

/// Endpoint-specific overrides, keyed by catalog id. Everything not listed
/// here follows the default rule in [`build_variables`].
const OVERRIDES: &[(&str, VariableBuilder)] = &[
    ("problemProgress", user_slug),
    ("recentSubmissions", username_with_limit),
    ("challengeMedal", medal_year_month),
];

fn user_slug(username: &str, _today: NaiveDate) -> Map<String, Value> {
    let mut vars = Map::new();
    vars.insert("userSlug".into(), json!(username));
    vars
}

fn username_with_limit(username: &str, _today: NaiveDate) -> Map<String, Value> {
    let mut vars = Map::new();
    vars.insert("username".into(), json!(username));
    vars.insert("limit".into(), json!(RECENT_SUBMISSIONS_LIMIT));
    vars
}

fn medal_year_month(_username: &str, today: NaiveDate) -> Map<String, Value> {
    let mut vars = Map::new();
    vars.insert("year".into(), json!(today.year()));
    vars.insert("month".into(), json!(today.month()));
    vars
}

/// Build the variables object for a catalog entry.
///
/// Overridden endpoints use their builder; otherwise entries that declare a
/// `username` variable get `{username}` and everything else sends `{}`.
#[must_use]
pub fn build_variables(
    def: &QueryDefinition,
    username: &str,
    today: NaiveDate,
) -> Map<String, Value> {
    if let Some((_, builder)) = OVERRIDES.iter().find(|(id, _)| *id == def.id) {
        return builder(username, today);
    }

    let mut vars = Map::new();
    if def.variable_spec.iter().any(|(name, _)| *name == "username") {
        vars.insert("username".into(), json!(username));
    }
    vars
}
