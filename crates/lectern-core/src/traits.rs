//! Core traits for Lectern.
//!
//! The primary trait is [`ConfigProvider`], which abstracts the site
//! configuration so the rendering crates never depend on how configuration
//! was loaded.

use std::path::PathBuf;

use crate::Result;

/// Trait for site configuration.
///
/// Every Lectern front end implements this trait to provide the
/// configuration the content and site crates need: paths to content,
/// project identity, and which lesson file extensions are recognised.
///
/// # Bounds
///
/// - `Send + Sync`: Configuration must be shareable across request handlers
/// - `Clone`: Configuration can be duplicated for passing to subsystems
/// - `'static`: Configuration lifetime is not borrowed
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use lectern_core::traits::ConfigProvider;
/// use lectern_core::Result;
///
/// #[derive(Clone)]
/// struct CourseConfig {
///     data_dir: PathBuf,
/// }
///
/// impl ConfigProvider for CourseConfig {
///     fn project_name(&self) -> &str {
///         "web-course"
///     }
///
///     fn base_path(&self) -> Result<PathBuf> {
///         Ok(self.data_dir.clone())
///     }
///
///     fn content_path(&self) -> Result<PathBuf> {
///         Ok(self.data_dir.join("content"))
///     }
/// }
/// ```
pub trait ConfigProvider: Send + Sync + Clone + 'static {
    /// The project name, used for env var prefixes and default paths.
    fn project_name(&self) -> &str;

    /// Base path for all project data.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined.
    fn base_path(&self) -> Result<PathBuf>;

    /// Root directory holding lesson documents, one subdirectory per block.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be resolved.
    fn content_path(&self) -> Result<PathBuf>;

    /// Recognised lesson file extensions, without the dot, in lookup order.
    fn page_extensions(&self) -> Vec<String> {
        vec!["md".to_string(), "mdx".to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct TestConfig {
        name: String,
        base: PathBuf,
    }

    impl ConfigProvider for TestConfig {
        fn project_name(&self) -> &str {
            &self.name
        }

        fn base_path(&self) -> Result<PathBuf> {
            Ok(self.base.clone())
        }

        fn content_path(&self) -> Result<PathBuf> {
            Ok(self.base.join("content"))
        }
    }

    #[test]
    fn test_config_provider_project_name() {
        let config = TestConfig {
            name: "test-project".into(),
            base: PathBuf::from("/tmp/test"),
        };
        assert_eq!(config.project_name(), "test-project");
    }

    #[test]
    fn test_config_provider_content_path() {
        let config = TestConfig {
            name: "test".into(),
            base: PathBuf::from("/data"),
        };
        assert_eq!(
            config.content_path().unwrap(),
            PathBuf::from("/data/content")
        );
    }

    #[test]
    fn test_config_provider_default_extensions() {
        let config = TestConfig {
            name: "test".into(),
            base: PathBuf::from("/data"),
        };
        assert_eq!(config.page_extensions(), vec!["md", "mdx"]);
    }

    #[test]
    fn test_config_provider_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TestConfig>();
    }
}
