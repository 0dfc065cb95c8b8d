//! Advisory authoring checks over the navigation registry.
//!
//! None of these findings change how pages render. Dead links, duplicate
//! labels and unrouted groups are authoring mistakes; this module reports
//! them so they can be fixed before publishing.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::registry::ContentRegistry;

// ============================================================================
// Types
// ============================================================================

/// Result of registry validation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the registry is usable (no errors).
    pub valid: bool,
    /// Issues that break a page route.
    pub errors: Vec<ValidationIssue>,
    /// Issues that produce dead or ambiguous links.
    pub warnings: Vec<ValidationIssue>,
    /// Informational findings.
    pub info: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// Create a new empty (valid) result.
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            info: Vec::new(),
        }
    }

    /// Add an error (marks the registry invalid).
    pub fn add_error(&mut self, issue: ValidationIssue) {
        self.valid = false;
        self.errors.push(issue);
    }

    /// Add a warning.
    pub fn add_warning(&mut self, issue: ValidationIssue) {
        self.warnings.push(issue);
    }

    /// Add an informational finding.
    pub fn add_info(&mut self, issue: ValidationIssue) {
        self.info.push(issue);
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

/// A single finding.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Issue code, e.g. `duplicate_name`.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Group the issue was found in, if any.
    pub group: Option<String>,
}

impl ValidationIssue {
    /// Create a new issue.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            group: None,
        }
    }

    /// Attach the affected group.
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

// ============================================================================
// Validation
// ============================================================================

/// Validate a registry.
///
/// `lesson_routes` is the set of routes backed by lesson files; internal
/// hrefs are checked against it and against the page routes.
pub fn validate_registry(
    registry: &ContentRegistry,
    lesson_routes: &HashSet<String>,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    check_entries(registry, &mut result);
    check_page_routes(registry, &mut result);
    check_page_groups(registry, &mut result);
    check_dangling_hrefs(registry, lesson_routes, &mut result);
    check_unrouted_groups(registry, &mut result);

    result
}

fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://") || href.starts_with("mailto:")
}

/// Empty names, duplicate names, relative hrefs.
fn check_entries(registry: &ContentRegistry, result: &mut ValidationResult) {
    for group in registry.groups() {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        for (i, entry) in group.entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                result.add_warning(
                    ValidationIssue::new(
                        "empty_name",
                        format!("entry #{} ({}) has an empty name", i + 1, entry.href),
                    )
                    .in_group(&group.id),
                );
            }
            if let Some(first) = seen.insert(entry.name.as_str(), i) {
                result.add_warning(
                    ValidationIssue::new(
                        "duplicate_name",
                        format!(
                            "'{}' appears at entries #{} and #{}",
                            entry.name,
                            first + 1,
                            i + 1
                        ),
                    )
                    .in_group(&group.id),
                );
            }
            if !entry.href.starts_with('/') && !is_external(&entry.href) {
                result.add_warning(
                    ValidationIssue::new(
                        "relative_href",
                        format!("'{}' links to relative path '{}'", entry.name, entry.href),
                    )
                    .in_group(&group.id),
                );
            }
        }
    }
}

/// Page routes the server would not register.
fn check_page_routes(registry: &ContentRegistry, result: &mut ValidationResult) {
    let mut seen = HashSet::new();
    for page in registry.pages() {
        if !page.is_well_formed() {
            result.add_error(ValidationIssue::new(
                "malformed_route",
                format!("route '{}' is not a plain absolute path", page.route),
            ));
        } else if !seen.insert(page.route.as_str()) {
            result.add_warning(ValidationIssue::new(
                "duplicate_route",
                format!(
                    "route '{}' is bound more than once; only group '{}' is served",
                    page.route,
                    registry.page(&page.route).map_or("", |p| p.group.as_str())
                ),
            ));
        }
    }
}

/// Page routes must name an existing group.
fn check_page_groups(registry: &ContentRegistry, result: &mut ValidationResult) {
    for page in registry.pages() {
        if registry.group(&page.group).is_none() {
            result.add_error(ValidationIssue::new(
                "unknown_group",
                format!("route '{}' uses unknown group '{}'", page.route, page.group),
            ));
        }
    }
}

/// Internal hrefs should resolve to a page route or a lesson.
fn check_dangling_hrefs(
    registry: &ContentRegistry,
    lesson_routes: &HashSet<String>,
    result: &mut ValidationResult,
) {
    let page_routes: HashSet<&str> = registry.pages().iter().map(|p| p.route.as_str()).collect();
    for group in registry.groups() {
        for entry in &group.entries {
            if !entry.href.starts_with('/') {
                continue;
            }
            let target = entry.href.split(['#', '?']).next().unwrap_or_default();
            let target = if target.len() > 1 {
                target.trim_end_matches('/')
            } else {
                target
            };
            if !page_routes.contains(target) && !lesson_routes.contains(target) {
                result.add_warning(
                    ValidationIssue::new(
                        "dangling_href",
                        format!("'{}' links to '{}', which has no page", entry.name, entry.href),
                    )
                    .in_group(&group.id),
                );
            }
        }
    }
}

/// Groups that no page route renders.
fn check_unrouted_groups(registry: &ContentRegistry, result: &mut ValidationResult) {
    let routed: HashSet<&str> = registry.pages().iter().map(|p| p.group.as_str()).collect();
    for group in registry.groups() {
        if !routed.contains(group.id.as_str()) {
            result.add_info(
                ValidationIssue::new(
                    "unrouted_group",
                    format!("group '{}' is not bound to any route", group.id),
                )
                .in_group(&group.id),
            );
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::{NavigationEntry, NavigationGroup, PageRoute};

    fn codes(issues: &[ValidationIssue]) -> Vec<&str> {
        issues.iter().map(|i| i.code.as_str()).collect()
    }

    fn page(route: &str, group: &str) -> PageRoute {
        PageRoute {
            route: route.into(),
            group: group.into(),
        }
    }

    #[test]
    fn test_clean_registry() {
        let registry = ContentRegistry::new(
            vec![NavigationGroup::new(
                "block_1",
                vec![NavigationEntry::new("Git", "/block-one/git")],
            )],
            vec![page("/block-one", "block_1")],
        );
        let lessons = HashSet::from(["/block-one/git".to_string()]);
        let result = validate_registry(&registry, &lessons);
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
        assert!(result.info.is_empty());
    }

    #[test]
    fn test_entry_warnings() {
        let registry = ContentRegistry::new(
            vec![NavigationGroup::new(
                "g",
                vec![
                    NavigationEntry::new("Git", "/git"),
                    NavigationEntry::new("", "/blank"),
                    NavigationEntry::new("Git", "relative/path"),
                    NavigationEntry::new("MDN", "https://developer.mozilla.org"),
                ],
            )],
            vec![page("/", "g")],
        );
        let lessons = HashSet::from(["/git".to_string(), "/blank".to_string()]);
        let result = validate_registry(&registry, &lessons);
        assert!(result.valid);
        assert_eq!(
            codes(&result.warnings),
            vec!["empty_name", "duplicate_name", "relative_href"]
        );
        assert_eq!(result.warnings[1].group.as_deref(), Some("g"));
    }

    #[test]
    fn test_unknown_group_is_error() {
        let registry = ContentRegistry::new(vec![], vec![page("/block-one", "block_1")]);
        let result = validate_registry(&registry, &HashSet::new());
        assert!(!result.valid);
        assert_eq!(codes(&result.errors), vec!["unknown_group"]);
    }

    #[test]
    fn test_malformed_and_duplicate_routes() {
        let registry = ContentRegistry::new(
            vec![NavigationGroup::new("g", vec![]), NavigationGroup::new("h", vec![])],
            vec![
                page("/", "g"),
                page("/", "h"),
                page("/:block", "g"),
                page("/../escaped", "g"),
            ],
        );
        let result = validate_registry(&registry, &HashSet::new());
        assert!(!result.valid);
        assert_eq!(codes(&result.errors), vec!["malformed_route", "malformed_route"]);
        assert_eq!(codes(&result.warnings), vec!["duplicate_route"]);
        assert!(result.warnings[0].message.contains("group 'g'"));
    }

    #[test]
    fn test_dangling_href_ignores_fragment_and_trailing_slash() {
        let registry = ContentRegistry::new(
            vec![NavigationGroup::new(
                "g",
                vec![
                    NavigationEntry::new("Home", "/#top"),
                    NavigationEntry::new("Git", "/block-one/git/"),
                    NavigationEntry::new("Gone", "/block-nine"),
                ],
            )],
            vec![page("/", "g")],
        );
        let lessons = HashSet::from(["/block-one/git".to_string()]);
        let result = validate_registry(&registry, &lessons);
        assert_eq!(codes(&result.warnings), vec!["dangling_href"]);
        assert!(result.warnings[0].message.contains("/block-nine"));
    }

    #[test]
    fn test_builtin_registry_findings() {
        let registry = ContentRegistry::builtin().unwrap();
        let result = validate_registry(&registry, &HashSet::new());
        assert!(result.valid);
        // Block 3 data exists but is not routed.
        assert_eq!(codes(&result.info), vec!["unrouted_group"]);
        assert_eq!(result.info[0].group.as_deref(), Some("block_3"));
        // Without lesson files every lesson link dangles, plus /block-three.
        assert!(
            result
                .warnings
                .iter()
                .any(|w| w.message.contains("'/block-three'"))
        );
        assert!(
            !result
                .warnings
                .iter()
                .any(|w| w.message.contains("'/block-one'"))
        );
    }
}
