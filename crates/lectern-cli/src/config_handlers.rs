//! `lectern config {path,get,set,init,export}`.
//!
//! Values are addressed by dotted keys (`site.title`, `server.port`) over
//! the TOML form of [`LecternConfig`].

use crate::cli::ConfigAction;
use crate::config::LecternConfig;
use lectern_core::{Error, Result};
use std::path::{Path, PathBuf};

// ============================================================================
// Command dispatch
// ============================================================================

/// Handle a config subcommand.
///
/// Takes the raw `--config` path rather than a loaded config: `path` and
/// `init` must work before any config file exists.
pub fn handle_config_command(config_path: Option<&str>, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(config_path),
        ConfigAction::Get { key } => {
            println!("{}", config_get(config_path, &key)?);
            Ok(())
        }
        ConfigAction::Set { key, value } => {
            let path = config_set(config_path, &key, &value)?;
            println!("Set {key} = {value} in {}", path.display());
            Ok(())
        }
        ConfigAction::Init { file, force } => {
            let path = config_init(file.as_deref(), force)?;
            println!("Config file created at {}", path.display());
            Ok(())
        }
        ConfigAction::Export { docker_env } => {
            let config = LecternConfig::load(config_path)?;
            for line in export_lines(&config, docker_env)? {
                println!("{line}");
            }
            Ok(())
        }
    }
}

// ============================================================================
// Command handlers
// ============================================================================

fn cmd_config_path(config_path: Option<&str>) -> Result<()> {
    let path = LecternConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory for this platform"))?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist; run `lectern config init` to create it)");
    }
    Ok(())
}

/// Look up a dotted key in the effective configuration.
fn config_get(config_path: Option<&str>, key: &str) -> Result<String> {
    let config = LecternConfig::load(config_path)?;
    let value = toml::Value::try_from(&config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Write a dotted key into the config file. Returns the file written.
fn config_set(config_path: Option<&str>, key: &str, value: &str) -> Result<PathBuf> {
    let path = LecternConfig::resolve_config_path(config_path)
        .ok_or_else(|| Error::config("Could not determine config directory"))?;
    if !path.exists() {
        return Err(Error::config(format!(
            "Config file does not exist at {}. Run `lectern config init` first.",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(&path).map_err(|e| Error::io_with_path(e, &path))?;
    let mut doc: toml::Value = toml::from_str(&content)
        .map_err(|e| Error::config(format!("Failed to parse {}: {e}", path.display())))?;
    set_nested_value(&mut doc, key, parse_value(value))?;

    let toml_str = toml::to_string_pretty(&doc).map_err(|e| Error::config(e.to_string()))?;
    // Refuse edits that would leave the file unloadable.
    toml::from_str::<LecternConfig>(&toml_str)
        .map_err(|e| Error::config(format!("'{key}' = '{value}' is not valid: {e}")))?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io_with_path(e, &path))?;
    Ok(path)
}

/// Write a default config file. Returns the file written.
fn config_init(file: Option<&str>, force: bool) -> Result<PathBuf> {
    let path = match file {
        Some(p) => PathBuf::from(p),
        None => LecternConfig::default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io_with_path(e, parent))?;
    }
    write_default(&path)?;
    Ok(path)
}

fn write_default(path: &Path) -> Result<()> {
    let toml_str = LecternConfig::default().to_toml_string()?;
    std::fs::write(path, toml_str).map_err(|e| Error::io_with_path(e, path))
}

fn export_lines(config: &LecternConfig, docker_env: bool) -> Result<Vec<String>> {
    Ok(config
        .to_env_vars()?
        .into_iter()
        .map(|(key, value)| {
            if docker_env {
                format!("--env {key}={value}")
            } else {
                format!("{key}={value}")
            }
        })
        .collect())
}

// ============================================================================
// TOML dotted-key helpers
// ============================================================================

fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Set a value at a dotted key path, creating intermediate tables as needed.
fn set_nested_value(root: &mut toml::Value, key: &str, value: toml::Value) -> Result<()> {
    let (parents, leaf) = match key.rsplit_once('.') {
        Some((parents, leaf)) => (Some(parents), leaf),
        None => (None, key),
    };
    if leaf.is_empty() {
        return Err(Error::config("Empty key path"));
    }

    let mut current = root;
    for part in parents.into_iter().flat_map(|p| p.split('.')) {
        current = current
            .as_table_mut()
            .ok_or_else(|| Error::config("Cannot navigate into a non-table value"))?
            .entry(part)
            .or_insert_with(|| toml::Value::Table(toml::map::Map::new()));
    }

    current
        .as_table_mut()
        .ok_or_else(|| Error::config("Cannot set key on a non-table value"))?
        .insert(leaf.to_string(), value);
    Ok(())
}

/// Parse a CLI string into a TOML value: bool, integer, float, else string.
fn parse_value(s: &str) -> toml::Value {
    match s {
        "true" => return toml::Value::Boolean(true),
        "false" => return toml::Value::Boolean(false),
        _ => {}
    }
    if let Ok(i) = s.parse::<i64>() {
        return toml::Value::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return toml::Value::Float(f);
    }
    toml::Value::String(s.to_string())
}

fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
        other => other.to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn default_file(dir: &TempDir) -> PathBuf {
        let path = dir.path().join("config.toml");
        write_default(&path).unwrap();
        path
    }

    // ------------------------------------------------------------------------
    // get / set
    // ------------------------------------------------------------------------

    #[test]
    fn test_config_get() {
        let dir = TempDir::new().unwrap();
        let path = default_file(&dir);
        let path = path.to_str();

        assert_eq!(config_get(path, "project_name").unwrap(), "lectern");
        assert_eq!(config_get(path, "server.port").unwrap(), "3000");
        assert_eq!(config_get(path, "site.lang").unwrap(), "en");
        assert_eq!(config_get(path, "content.gfm").unwrap(), "true");
    }

    #[test]
    fn test_config_get_missing_key() {
        let dir = TempDir::new().unwrap();
        let path = default_file(&dir);
        let err = config_get(path.to_str(), "site.nope").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_config_set_then_get() {
        let dir = TempDir::new().unwrap();
        let path = default_file(&dir);
        let path = path.to_str();

        config_set(path, "site.description", "Web Course").unwrap();
        config_set(path, "server.port", "8080").unwrap();
        assert_eq!(config_get(path, "site.description").unwrap(), "Web Course");
        assert_eq!(config_get(path, "server.port").unwrap(), "8080");
    }

    #[test]
    fn test_config_set_rejects_bad_type() {
        let dir = TempDir::new().unwrap();
        let path = default_file(&dir);
        let err = config_set(path.to_str(), "server.port", "eighty").unwrap_err();
        assert!(err.to_string().contains("not valid"));

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("port = 3000"));
    }

    #[test]
    fn test_config_set_missing_file() {
        let err = config_set(Some("/nonexistent/config.toml"), "site.title", "x").unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    // ------------------------------------------------------------------------
    // init / export / path
    // ------------------------------------------------------------------------

    #[test]
    fn test_config_init_creates_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lectern").join("config.toml");

        let written = config_init(path.to_str(), false).unwrap();
        assert_eq!(written, path);
        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("[content]"));
        assert!(content.contains("[site]"));
    }

    #[test]
    fn test_config_init_no_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "existing").unwrap();

        let err = config_init(path.to_str(), false).unwrap_err();
        assert!(err.to_string().contains("already exists"));

        config_init(path.to_str(), true).unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("project_name"));
    }

    #[test]
    fn test_export_lines() {
        let config = LecternConfig::default();
        let plain = export_lines(&config, false).unwrap();
        assert!(plain.contains(&"LECTERN_SERVER_HOST=127.0.0.1".to_string()));
        let docker = export_lines(&config, true).unwrap();
        assert!(docker.iter().all(|l| l.starts_with("--env LECTERN_")));
    }

    #[test]
    fn test_cmd_config_path_explicit() {
        assert!(cmd_config_path(Some("/explicit/config.toml")).is_ok());
    }

    // ------------------------------------------------------------------------
    // Dotted-key helpers
    // ------------------------------------------------------------------------

    #[test]
    fn test_get_nested_value() {
        let val: toml::Value = toml::from_str("[server]\nport = 3000").unwrap();
        assert_eq!(
            get_nested_value(&val, "server.port"),
            Some(&toml::Value::Integer(3000))
        );
        assert!(get_nested_value(&val, "server.host").is_none());
        assert!(get_nested_value(&val, "server.port.deeper").is_none());
    }

    #[test]
    fn test_set_nested_value_creates_sections() {
        let mut val = toml::Value::Table(toml::map::Map::new());
        set_nested_value(&mut val, "site.title", toml::Value::String("T".into())).unwrap();
        assert_eq!(
            get_nested_value(&val, "site.title"),
            Some(&toml::Value::String("T".into()))
        );
    }

    #[test]
    fn test_set_nested_value_through_scalar_fails() {
        let mut val: toml::Value = toml::from_str("title = \"x\"").unwrap();
        assert!(set_nested_value(&mut val, "title.sub", toml::Value::Integer(1)).is_err());
        assert!(set_nested_value(&mut val, "site.", toml::Value::Integer(1)).is_err());
    }

    #[test]
    fn test_parse_value_types() {
        assert_eq!(parse_value("true"), toml::Value::Boolean(true));
        assert_eq!(parse_value("42"), toml::Value::Integer(42));
        assert_eq!(parse_value("2.5"), toml::Value::Float(2.5));
        assert_eq!(parse_value("mdx"), toml::Value::String("mdx".into()));
    }

    #[test]
    fn test_format_toml_value() {
        assert_eq!(format_toml_value(&toml::Value::String("en".into())), "en");
        assert_eq!(format_toml_value(&toml::Value::Integer(3000)), "3000");
        assert_eq!(format_toml_value(&toml::Value::Boolean(false)), "false");
    }
}
