use serde::{Serialize, Serializer, ser::SerializeMap};

/// A named, preconfigured GraphQL query exposed by the gateway.
///
/// Definitions are immutable and defined at process start; the relay never
/// inspects or rewrites the document text.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryDefinition {
    /// Unique string key, stable across releases.
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: &'static str,
    /// Operation name matching the one in `query`.
    pub operation_name: &'static str,
    /// The literal GraphQL document sent upstream.
    pub query: &'static str,
    /// When true, callers must not forward this query — the upstream answer
    /// is only meaningful with a logged-in session, which the relay never has.
    pub requires_auth: bool,
    /// Variable name → GraphQL type hint. Informational only; nothing
    /// enforces these at runtime.
    #[serde(serialize_with = "spec_as_map")]
    pub variable_spec: &'static [(&'static str, &'static str)],
}

fn spec_as_map<S>(
    spec: &&'static [(&'static str, &'static str)],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(spec.len()))?;
    for (name, type_hint) in *spec {
        map.serialize_entry(name, type_hint)?;
    }
    map.end()
}

/// Ordered collection of query definitions.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: &'static [QueryDefinition],
}

impl Catalog {
    /// The built-in catalog (see [`crate::builtin`]).
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            entries: crate::builtin::DEFINITIONS,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueryDefinition> {
        self.entries.iter()
    }

    /// Look up a definition by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&QueryDefinition> {
        self.entries.iter().find(|d| d.id == id)
    }

    /// Category names in order of first appearance.
    #[must_use]
    pub fn categories(&self) -> Vec<&'static str> {
        let mut seen = Vec::new();
        for def in self.entries {
            if !seen.contains(&def.category) {
                seen.push(def.category);
            }
        }
        seen
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
