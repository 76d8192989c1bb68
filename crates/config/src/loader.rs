use std::{
    path::{Path, PathBuf},
    sync::RwLock,
};

use tracing::{debug, warn};

use crate::{env_subst::substitute_env, schema::LeetscopeConfig};

/// Standard config file names, checked in order.
const CONFIG_FILENAMES: &[&str] = &[
    "leetscope.toml",
    "leetscope.yaml",
    "leetscope.yml",
    "leetscope.json",
];

/// Process-wide config directory override (set via `--config-dir`).
static CONFIG_DIR_OVERRIDE: RwLock<Option<PathBuf>> = RwLock::new(None);

/// Override the user-global config directory for this process.
pub fn set_config_dir(dir: PathBuf) {
    if let Ok(mut guard) = CONFIG_DIR_OVERRIDE.write() {
        *guard = Some(dir);
    }
}

/// Returns the user-global config directory (`~/.config/leetscope/` unless
/// overridden).
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(guard) = CONFIG_DIR_OVERRIDE.read()
        && let Some(ref dir) = *guard
    {
        return Some(dir.clone());
    }
    directories::ProjectDirs::from("", "", "leetscope").map(|d| d.config_dir().to_path_buf())
}

/// Load config from the given path (any supported format).
pub fn load_config(path: &Path) -> anyhow::Result<LeetscopeConfig> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("failed to read {}: {e}", path.display()))?;
    let raw = substitute_env(&raw);
    parse_config(&raw, path)
}

/// Discover and load config from standard locations.
///
/// Search order:
/// 1. `./leetscope.{toml,yaml,yml,json}` (project-local)
/// 2. `~/.config/leetscope/leetscope.{toml,yaml,yml,json}` (user-global)
///
/// Returns `LeetscopeConfig::default()` if no config file is found or the
/// file fails to parse.
pub fn discover_and_load() -> LeetscopeConfig {
    if let Some(path) = find_config_file() {
        debug!(path = %path.display(), "loading config");
        match load_config(&path) {
            Ok(cfg) => return cfg,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to load config, using defaults");
            },
        }
    } else {
        debug!("no config file found, using defaults");
    }
    LeetscopeConfig::default()
}

/// Find the first config file in standard locations.
fn find_config_file() -> Option<PathBuf> {
    // Project-local
    for name in CONFIG_FILENAMES {
        let p = PathBuf::from(name);
        if p.exists() {
            return Some(p);
        }
    }

    // User-global
    if let Some(dir) = config_dir() {
        for name in CONFIG_FILENAMES {
            let p = dir.join(name);
            if p.exists() {
                return Some(p);
            }
        }
    }

    None
}

fn parse_config(raw: &str, path: &Path) -> anyhow::Result<LeetscopeConfig> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match ext {
        "toml" => Ok(toml::from_str(raw)?),
        "yaml" | "yml" => Ok(serde_yaml::from_str(raw)?),
        "json" => Ok(serde_json::from_str(raw)?),
        _ => anyhow::bail!("unsupported config format: .{ext}"),
    }
}

#[allow(clippy::unwrap_used)]
#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &tempfile::TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "leetscope.toml",
            "[server]\nbind = \"0.0.0.0\"\nport = 9000\n",
        );
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.server.bind, "0.0.0.0");
        assert_eq!(cfg.server.port, 9000);
    }

    #[test]
    fn loads_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "leetscope.yaml",
            "upstream:\n  timeout_secs: 10\n",
        );
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.upstream.timeout_secs, 10);
    }

    #[test]
    fn loads_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "leetscope.json",
            r#"{"upstream": {"url": "http://localhost:1/graphql"}}"#,
        );
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.upstream.url, "http://localhost:1/graphql");
    }

    #[test]
    fn unresolved_placeholder_stays_literal() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "leetscope.toml",
            "[upstream]\ncsrf_token = \"${LEETSCOPE_UNSET_TOKEN_XYZ}\"\n",
        );
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.upstream.csrf_token, "${LEETSCOPE_UNSET_TOKEN_XYZ}");
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "leetscope.ini", "bind=127.0.0.1");
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_config(Path::new("/nonexistent/leetscope.toml")).is_err());
    }
}
