//! Configuration for the `lectern` binary.
//!
//! Provides [`LecternConfig`], loaded from TOML files, environment
//! variables, and defaults using the `confyg` crate.
//!
//! # Loading Priority
//!
//! 1. Explicit `--config <path>` flag
//! 2. `LECTERN_CONFIG` environment variable
//! 3. XDG default: `~/.config/lectern/config.toml`
//! 4. Built-in defaults

use confyg::{Confygery, env};
use lectern_content::{ContentRegistry, RenderOptions};
use lectern_core::traits::ConfigProvider;
use lectern_core::util::paths::expand_tilde;
use lectern_core::{Error, Result};
use lectern_site::SiteMeta;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Configuration structs
// ============================================================================

/// Main configuration for a Lectern site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LecternConfig {
    /// Project name.
    pub project_name: String,

    /// Base path for the course; defaults to the working directory.
    pub base_path: Option<String>,

    /// Lesson content and registry.
    pub content: ContentConfig,

    /// HTTP server.
    pub server: ServerConfig,

    /// Document metadata.
    pub site: SiteConfig,
}

/// Content configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Lesson directory; defaults to `<base_path>/content`.
    pub path: Option<String>,

    /// Registry TOML file; the built-in registry is used when unset.
    pub registry: Option<String>,

    /// Lesson file extensions, in lookup order.
    pub page_extensions: Vec<String>,

    /// GitHub-flavoured extensions (tables, strikethrough, task lists).
    pub gfm: bool,
}

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,

    /// Port to listen on.
    pub port: u16,
}

/// Document metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    pub lang: String,
    /// Stylesheet URL linked from every page.
    pub stylesheet: Option<String>,
}

// ============================================================================
// Default implementations
// ============================================================================

impl Default for LecternConfig {
    fn default() -> Self {
        Self {
            project_name: "lectern".to_string(),
            base_path: None,
            content: ContentConfig::default(),
            server: ServerConfig::default(),
            site: SiteConfig::default(),
        }
    }
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            path: None,
            registry: None,
            page_extensions: vec!["md".to_string(), "mdx".to_string()],
            gfm: true,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        let meta = SiteMeta::default();
        Self {
            title: meta.title,
            description: meta.description,
            lang: meta.lang,
            stylesheet: meta.stylesheet,
        }
    }
}

// ============================================================================
// Config loading
// ============================================================================

impl LecternConfig {
    /// Load configuration from file, environment, and defaults.
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut builder =
            Confygery::new().map_err(|e| Error::config(format!("config init: {e}")))?;

        if let Some(path) = Self::resolve_config_path(config_path) {
            if path.exists() {
                log::debug!("loading config from {}", path.display());
                builder
                    .add_file(&path.to_string_lossy())
                    .map_err(|e| Error::config(format!("config file: {e}")))?;
            }
        }

        let mut env_opts = env::Options::with_top_level("LECTERN");
        env_opts.add_section("content");
        env_opts.add_section("server");
        env_opts.add_section("site");
        builder
            .add_env(env_opts)
            .map_err(|e| Error::config(format!("config env: {e}")))?;

        builder
            .build()
            .map_err(|e| Error::config(format!("config build: {e}")))
    }

    /// Resolve the config file path from explicit flag, env var, or XDG default.
    pub fn resolve_config_path(explicit: Option<&str>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(PathBuf::from(path));
        }
        if let Ok(path) = std::env::var("LECTERN_CONFIG") {
            return Some(PathBuf::from(path));
        }
        Self::default_config_path()
    }

    /// Return the XDG default config path.
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("lectern").join("config.toml"))
    }

    /// Serialize this config to a pretty-printed TOML string.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::serialization(e.to_string()))
    }

    /// Flatten this config into `LECTERN_`-prefixed environment variables.
    pub fn to_env_vars(&self) -> Result<Vec<(String, String)>> {
        let value =
            toml::Value::try_from(self).map_err(|e| Error::serialization(e.to_string()))?;
        let mut vars = Vec::new();
        flatten_toml_value(&value, "LECTERN", &mut vars);
        Ok(vars)
    }

    /// Document metadata for the site crate.
    pub fn site_meta(&self) -> SiteMeta {
        SiteMeta {
            title: self.site.title.clone(),
            description: self.site.description.clone(),
            lang: self.site.lang.clone(),
            stylesheet: self.site.stylesheet.clone(),
        }
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            gfm: self.content.gfm,
        }
    }

    /// Registry file, resolved against the base path.
    pub fn registry_path(&self) -> Result<Option<PathBuf>> {
        self.content
            .registry
            .as_deref()
            .map(|p| self.resolve(p))
            .transpose()
    }

    /// Load the configured registry, or the built-in one.
    pub async fn load_registry(&self) -> Result<ContentRegistry> {
        match self.registry_path()? {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading registry");
                ContentRegistry::load(&path).await
            }
            None => ContentRegistry::builtin(),
        }
    }

    /// Export directory: `explicit` if given, else `<base_path>/out`.
    pub fn output_path(&self, explicit: Option<&str>) -> Result<PathBuf> {
        match explicit {
            Some(p) => Ok(expand_tilde(p)),
            None => Ok(self.base_path()?.join("out")),
        }
    }

    fn resolve(&self, path: &str) -> Result<PathBuf> {
        let path = expand_tilde(path);
        if path.is_absolute() {
            Ok(path)
        } else {
            Ok(self.base_path()?.join(path))
        }
    }
}

// ============================================================================
// ConfigProvider implementation
// ============================================================================

impl ConfigProvider for LecternConfig {
    fn project_name(&self) -> &str {
        &self.project_name
    }

    fn base_path(&self) -> Result<PathBuf> {
        match &self.base_path {
            Some(p) => Ok(expand_tilde(p)),
            None => std::env::current_dir()
                .map_err(|e| Error::config(format!("Could not determine base path: {e}"))),
        }
    }

    fn content_path(&self) -> Result<PathBuf> {
        match &self.content.path {
            Some(p) => self.resolve(p),
            None => Ok(self.base_path()?.join("content")),
        }
    }

    fn page_extensions(&self) -> Vec<String> {
        self.content.page_extensions.clone()
    }
}

// ============================================================================
// Helper: flatten TOML to env vars
// ============================================================================

/// Recursively flatten a TOML value into `KEY=value` pairs.
fn flatten_toml_value(value: &toml::Value, prefix: &str, out: &mut Vec<(String, String)>) {
    match value {
        toml::Value::Table(table) => {
            for (key, val) in table {
                flatten_toml_value(val, &format!("{prefix}_{}", key.to_uppercase()), out);
            }
        }
        toml::Value::Array(arr) => {
            if let Ok(json) = serde_json::to_string(arr) {
                out.push((prefix.to_string(), json));
            }
        }
        toml::Value::String(s) => out.push((prefix.to_string(), s.clone())),
        other => out.push((prefix.to_string(), other.to_string())),
    }
}

// ============================================================================
// Tests
// ============================================================================
