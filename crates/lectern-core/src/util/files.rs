//! Async file utilities for lesson content.
//!
//! Provides file discovery and reading operations used by the site
//! renderer and the static exporter.

use async_walkdir::WalkDir;
use futures::StreamExt;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::{Error, Result};

/// Options for discovering content files.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// File extensions to match (without dot). Empty matches everything.
    pub extensions: Vec<String>,
}

impl FindOptions {
    /// Create options matching the given extensions.
    pub fn with_extensions<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            extensions: extensions.into_iter().map(Into::into).collect(),
        }
    }

    fn matches_extension(&self, path: &Path) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

/// Information about a discovered file.
#[derive(Debug, Clone)]
pub struct FileInfo {
    /// Full path to the file.
    pub path: PathBuf,
    /// Path relative to the search base.
    pub relative_path: PathBuf,
}

/// Find a lesson file as `<base>/<block>/<lesson>.<ext>`.
///
/// Extensions are tried in order; the first existing file wins.
///
/// # Example
///
/// ```no_run
/// # use lectern_core::util::files::find_lesson_file;
/// # use std::path::Path;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let exts = vec!["md".to_string(), "mdx".to_string()];
/// let path = find_lesson_file(Path::new("content"), "block-one", "git", &exts).await?;
/// # Ok(())
/// # }
/// ```
pub async fn find_lesson_file(
    base_path: &Path,
    block: &str,
    lesson: &str,
    extensions: &[String],
) -> Result<PathBuf> {
    for ext in extensions {
        let candidate = base_path.join(block).join(format!("{lesson}.{ext}"));
        if exists(&candidate).await {
            return Ok(candidate);
        }
    }

    Err(Error::not_found(format!(
        "lesson '{block}/{lesson}' not found in {}",
        base_path.display()
    )))
}

/// Find all files matching criteria in a directory.
///
/// Results are sorted by relative path so callers see a stable order.
pub async fn find_all_files(base_path: &Path, options: FindOptions) -> Result<Vec<FileInfo>> {
    let mut files = Vec::new();
    let mut walker = WalkDir::new(base_path);

    while let Some(entry_result) = walker.next().await {
        let entry = entry_result.map_err(|e| Error::io(std::io::Error::other(e)))?;
        let path = entry.path();

        // Skip directories
        if path.is_dir() {
            continue;
        }

        if !options.matches_extension(&path) {
            continue;
        }

        let relative_path = path.strip_prefix(base_path).unwrap_or(&path).to_path_buf();

        files.push(FileInfo {
            path: path.to_path_buf(),
            relative_path,
        });
    }

    files.sort_by(|a, b| a.relative_path.cmp(&b.relative_path));
    log::debug!("found {} files under {}", files.len(), base_path.display());
    Ok(files)
}

/// Read a file's contents as a string.
pub async fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}

/// Write a file, creating parent directories as needed.
pub async fn write_file(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| Error::io_with_path(e, parent))?;
    }
    fs::write(path, contents)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}

/// Check if a path exists.
pub async fn exists(path: &Path) -> bool {
    fs::try_exists(path).await.unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exts() -> Vec<String> {
        vec!["md".to_string(), "mdx".to_string()]
    }

    #[tokio::test]
    async fn test_find_lesson_file_md() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("block-one")).await.unwrap();
        let file_path = temp.path().join("block-one").join("git.md");
        fs::write(&file_path, "# Git").await.unwrap();

        let found = find_lesson_file(temp.path(), "block-one", "git", &exts())
            .await
            .unwrap();
        assert_eq!(found, file_path);
    }

    #[tokio::test]
    async fn test_find_lesson_file_extension_priority() {
        let temp = TempDir::new().unwrap();
        let block = temp.path().join("block-one");
        fs::create_dir(&block).await.unwrap();
        fs::write(block.join("git.md"), "# md").await.unwrap();
        fs::write(block.join("git.mdx"), "# mdx").await.unwrap();

        let mdx_first = vec!["mdx".to_string(), "md".to_string()];
        let found = find_lesson_file(temp.path(), "block-one", "git", &mdx_first)
            .await
            .unwrap();
        assert_eq!(found, block.join("git.mdx"));
    }

    #[tokio::test]
    async fn test_find_lesson_file_missing() {
        let temp = TempDir::new().unwrap();
        let err = find_lesson_file(temp.path(), "block-one", "nope", &exts())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_find_all_files_filters_and_sorts() {
        let temp = TempDir::new().unwrap();
        let block = temp.path().join("block-one");
        fs::create_dir(&block).await.unwrap();
        fs::write(block.join("html-basics.md"), "# HTML").await.unwrap();
        fs::write(block.join("git.mdx"), "# Git").await.unwrap();
        fs::write(block.join("notes.txt"), "skip").await.unwrap();

        let files = find_all_files(temp.path(), FindOptions::with_extensions(["md", "mdx"]))
            .await
            .unwrap();

        assert_eq!(files.len(), 2);
        assert_eq!(files[0].relative_path, PathBuf::from("block-one/git.mdx"));
        assert_eq!(
            files[1].relative_path,
            PathBuf::from("block-one/html-basics.md")
        );
    }

    #[tokio::test]
    async fn test_find_all_files_no_extensions_matches_all() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.md"), "x").await.unwrap();
        fs::write(temp.path().join("b.png"), [0u8]).await.unwrap();

        let files = find_all_files(temp.path(), FindOptions::default()).await.unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[1].relative_path, PathBuf::from("b.png"));
    }

    #[tokio::test]
    async fn test_write_then_read_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("out").join("block-one").join("index.html");
        write_file(&path, "<p>hi</p>").await.unwrap();
        assert!(exists(&path).await);
        assert_eq!(read_file(&path).await.unwrap(), "<p>hi</p>");
    }

    #[tokio::test]
    async fn test_read_file_missing_has_path() {
        let err = read_file(Path::new("/nonexistent/lectern/file.md"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("/nonexistent/lectern/file.md"));
    }
}
