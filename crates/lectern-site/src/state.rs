//! Shared site state.
//!
//! [`SiteState`] holds everything a request needs: the registry, the
//! Markdown renderer, where lessons live, and document metadata. All of it
//! is immutable after startup; cloning is an `Arc` clone.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use lectern_content::{ContentRegistry, MarkdownRenderer};
use lectern_core::{ConfigProvider, Result};

use crate::document::SiteMeta;

#[derive(Debug)]
struct Inner {
    registry: ContentRegistry,
    renderer: MarkdownRenderer,
    content_dir: PathBuf,
    extensions: Vec<String>,
    meta: SiteMeta,
}

/// Thread-safe, cheaply cloneable site state.
#[derive(Clone, Debug)]
pub struct SiteState {
    inner: Arc<Inner>,
}

impl SiteState {
    /// Assemble state from parts.
    pub fn new(
        registry: ContentRegistry,
        renderer: MarkdownRenderer,
        content_dir: impl Into<PathBuf>,
        extensions: Vec<String>,
        meta: SiteMeta,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                registry,
                renderer,
                content_dir: content_dir.into(),
                extensions,
                meta,
            }),
        }
    }

    /// Assemble state, taking paths and extensions from a config provider.
    pub fn from_config<C: ConfigProvider>(
        config: &C,
        registry: ContentRegistry,
        renderer: MarkdownRenderer,
        meta: SiteMeta,
    ) -> Result<Self> {
        Ok(Self::new(
            registry,
            renderer,
            config.content_path()?,
            config.page_extensions(),
            meta,
        ))
    }

    pub fn registry(&self) -> &ContentRegistry {
        &self.inner.registry
    }

    pub fn renderer(&self) -> &MarkdownRenderer {
        &self.inner.renderer
    }

    /// Root directory of lesson files.
    pub fn content_dir(&self) -> &Path {
        &self.inner.content_dir
    }

    /// Recognised lesson extensions, in lookup order.
    pub fn extensions(&self) -> &[String] {
        &self.inner.extensions
    }

    pub fn meta(&self) -> &SiteMeta {
        &self.inner.meta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct TestConfig;

    impl ConfigProvider for TestConfig {
        fn project_name(&self) -> &str {
            "test"
        }

        fn base_path(&self) -> Result<PathBuf> {
            Ok(PathBuf::from("/course"))
        }

        fn content_path(&self) -> Result<PathBuf> {
            Ok(PathBuf::from("/course/content"))
        }

        fn page_extensions(&self) -> Vec<String> {
            vec!["mdx".into()]
        }
    }

    #[test]
    fn test_from_config() {
        let state = SiteState::from_config(
            &TestConfig,
            ContentRegistry::default(),
            MarkdownRenderer::default(),
            SiteMeta::default(),
        )
        .unwrap();
        assert_eq!(state.content_dir(), Path::new("/course/content"));
        assert_eq!(state.extensions(), &["mdx".to_string()]);
    }

    #[test]
    fn test_clone_shares_inner() {
        let state = SiteState::new(
            ContentRegistry::builtin().unwrap(),
            MarkdownRenderer::default(),
            "/c",
            vec![],
            SiteMeta::default(),
        );
        let clone = state.clone();
        assert!(Arc::ptr_eq(&state.inner, &clone.inner));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SiteState>();
    }
}
