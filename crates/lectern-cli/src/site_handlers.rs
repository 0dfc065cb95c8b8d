//! Handler functions for site commands.
//!
//! These implement `serve`, `build`, `routes`, `groups`, `render`, `check`
//! and `health` on top of the content and site crates.

use std::collections::HashSet;
use std::path::Path;

use lectern_content::{ContentRegistry, MarkdownRenderer, ValidationIssue, validate_registry};
use lectern_core::traits::ConfigProvider;
use lectern_core::util::files::{exists, read_file};
use lectern_core::{Error, Result};
use lectern_site::{SiteState, discover_lessons, export_site};

use crate::config::LecternConfig;

// ============================================================================
// Helpers
// ============================================================================

fn renderer(config: &LecternConfig) -> MarkdownRenderer {
    MarkdownRenderer::default().with_options(config.render_options())
}

/// Assemble site state from configuration.
pub async fn site_state(config: &LecternConfig) -> Result<SiteState> {
    let registry = config.load_registry().await?;
    SiteState::from_config(config, registry, renderer(config), config.site_meta())
}

async fn lesson_routes(config: &LecternConfig) -> Result<HashSet<String>> {
    let lessons = discover_lessons(&config.content_path()?, &config.page_extensions()).await?;
    Ok(lessons.into_iter().map(|l| l.route).collect())
}

fn print_issue(level: &str, issue: &ValidationIssue) {
    match &issue.group {
        Some(group) => println!("  {level} [{}] {group}: {}", issue.code, issue.message),
        None => println!("  {level} [{}]: {}", issue.code, issue.message),
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Serve the site until Ctrl-C.
pub async fn handle_serve(config: &LecternConfig, port: Option<u16>) -> Result<()> {
    let state = site_state(config).await?;
    let port = port.unwrap_or(config.server.port);
    println!("Serving {} on http://{}:{port}", config.project_name, config.server.host);
    lectern_site::serve(state, &config.server.host, port).await
}

/// Export the site as static HTML.
pub async fn handle_build(config: &LecternConfig, out: Option<&str>) -> Result<()> {
    let state = site_state(config).await?;
    let out_dir = config.output_path(out)?;
    println!("Building site from: {}", state.content_dir().display());

    let report = export_site(&state, &out_dir).await?;

    println!("Site built:");
    println!("  Pages written: {}", report.len());
    if !report.skipped.is_empty() {
        println!("  Skipped:       {}", report.skipped.join(", "));
    }
    println!("\nOutput: {}", out_dir.display());
    Ok(())
}

/// Print the page route table.
pub async fn handle_routes(config: &LecternConfig) -> Result<()> {
    let registry = config.load_registry().await?;
    print!("{}", routes_table(&registry));
    Ok(())
}

fn routes_table(registry: &ContentRegistry) -> String {
    let width = registry
        .pages()
        .iter()
        .map(|p| p.route.len())
        .max()
        .unwrap_or(0);
    let mut out = String::new();
    for page in registry.pages() {
        let entries = match registry.group(&page.group) {
            Some(group) => format!("{} entries", group.len()),
            None => "missing".to_string(),
        };
        out.push_str(&format!(
            "{:width$}  ->  {} ({entries})\n",
            page.route, page.group
        ));
    }
    out
}

/// List groups, or the entries of one group.
pub async fn handle_groups(config: &LecternConfig, group: Option<&str>) -> Result<()> {
    let registry = config.load_registry().await?;
    print!("{}", groups_listing(&registry, group)?);
    Ok(())
}

fn groups_listing(registry: &ContentRegistry, group: Option<&str>) -> Result<String> {
    let mut out = String::new();
    match group {
        Some(id) => {
            let entries = registry
                .entries(id)
                .ok_or_else(|| Error::not_found(format!("group '{id}'")))?;
            for entry in entries {
                out.push_str(&format!("{}\t{}\n", entry.name, entry.href));
            }
        }
        None => {
            for group in registry.groups() {
                let title = group.title.as_deref().unwrap_or("-");
                out.push_str(&format!("{}\t{title}\t{} entries\n", group.id, group.len()));
            }
        }
    }
    Ok(out)
}

/// Render one Markdown file to stdout.
pub async fn handle_render(config: &LecternConfig, file: &Path) -> Result<()> {
    let source = read_file(file).await?;
    println!("{}", renderer(config).render_html(&source));
    Ok(())
}

/// Run the authoring checks.
///
/// Fails when the registry has errors; warnings and info only print.
pub async fn handle_check(config: &LecternConfig) -> Result<()> {
    let registry = config.load_registry().await?;
    let result = validate_registry(&registry, &lesson_routes(config).await?);

    if result.valid {
        println!("Registry is valid.");
    } else {
        println!("Registry has errors:");
    }
    for issue in &result.errors {
        print_issue("ERROR", issue);
    }
    for issue in &result.warnings {
        print_issue("WARN ", issue);
    }
    for issue in &result.info {
        print_issue("INFO ", issue);
    }

    println!(
        "\nSummary: {} error(s), {} warning(s), {} note(s)",
        result.errors.len(),
        result.warnings.len(),
        result.info.len()
    );

    if result.valid {
        Ok(())
    } else {
        Err(Error::invalid_data(format!(
            "registry check failed with {} error(s)",
            result.errors.len()
        )))
    }
}

/// Check that the registry loads and the content directory resolves.
pub async fn handle_health(config: &LecternConfig, name: &str) -> Result<()> {
    let registry = config.load_registry().await?;
    let content = config.content_path()?;
    let content_ok = exists(&content).await;

    println!("{name}: healthy");
    println!(
        "  registry: {} group(s), {} page(s)",
        registry.groups().len(),
        registry.pages().len()
    );
    println!(
        "  content:  {}{}",
        content.display(),
        if content_ok { "" } else { " (missing)" }
    );
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
