//! YAML frontmatter extraction.
//!
//! A lesson may start with a `---` fenced YAML block. Only `title` and
//! `description` are read; other keys are ignored.

use lectern_core::{Error, Result};
use serde::Deserialize;

const FENCE: &str = "---";

/// Metadata a lesson can declare in its frontmatter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct Frontmatter {
    /// Page title.
    #[serde(default)]
    pub title: Option<String>,
    /// Page description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Split a document into its frontmatter (if any) and Markdown body.
///
/// A document without an opening fence, or with an opening fence that is
/// never closed, is returned whole as the body.
///
/// # Errors
///
/// Returns [`Error::Parse`] if the fenced block is not valid YAML.
pub fn extract_frontmatter(source: &str) -> Result<(Option<Frontmatter>, &str)> {
    let Some(yaml_and_body) = strip_fence_line(source) else {
        return Ok((None, source));
    };

    let mut offset = 0;
    for line in yaml_and_body.split_inclusive('\n') {
        if line.trim_end() == FENCE {
            let yaml = &yaml_and_body[..offset];
            let body = &yaml_and_body[offset + line.len()..];
            let frontmatter = if yaml.trim().is_empty() {
                Frontmatter::default()
            } else {
                yaml_serde::from_str(yaml)
                    .map_err(|e| Error::parse(format!("frontmatter: {e}")))?
            };
            return Ok((Some(frontmatter), body));
        }
        offset += line.len();
    }

    log::debug!("unterminated frontmatter fence; treating document as body");
    Ok((None, source))
}

fn strip_fence_line(source: &str) -> Option<&str> {
    let first_len = source.find('\n').map(|i| i + 1).unwrap_or(source.len());
    let first = &source[..first_len];
    (first.trim_end() == FENCE).then(|| &source[first_len..])
}
