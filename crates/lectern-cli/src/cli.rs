//! CLI argument parsing and command definitions.

use clap::{Parser, Subcommand};

// ============================================================================
// CLI argument types
// ============================================================================

/// Top-level arguments for `lectern`.
#[derive(Parser, Debug)]
#[command(name = "lectern", author, about, long_about = None)]
pub struct CliArgs {
    /// Path to configuration file.
    #[arg(short, long, env = "LECTERN_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Option<BaseCommand>,
}

/// Commands understood by `lectern`.
#[derive(Subcommand, Debug)]
pub enum BaseCommand {
    /// Serve the site over HTTP.
    Serve {
        /// Port to listen on (overrides `server.port`).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Export every page as static HTML.
    Build {
        /// Output directory (defaults to `<base_path>/out`).
        #[arg(short, long)]
        out: Option<String>,
    },

    /// List page routes and the group each one shows.
    Routes,

    /// List navigation groups, or the entries of one group.
    Groups {
        /// Group id to show.
        group: Option<String>,
    },

    /// Render a Markdown file to styled HTML on stdout.
    Render {
        /// Markdown file to render.
        file: String,
    },

    /// Run authoring checks against the registry and lesson files.
    Check,

    /// Print version information.
    Version,

    /// Check that configuration, registry, and content resolve.
    Health,

    /// Configuration operations.
    Config(ConfigCommand),
}

/// Config-specific subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    /// Config subcommand to execute.
    #[command(subcommand)]
    pub command: ConfigAction,
}

/// Available config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show the resolved config file path.
    Path,

    /// Get a configuration value by dotted key.
    Get {
        /// Dotted key (e.g., "site.title").
        key: String,
    },

    /// Set a configuration value by dotted key.
    Set {
        /// Dotted key (e.g., "server.port").
        key: String,

        /// Value to set.
        value: String,
    },

    /// Create a default configuration file.
    Init {
        /// Output file path (defaults to the XDG config path).
        #[arg(short, long)]
        file: Option<String>,

        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },

    /// Print configuration as environment variables.
    Export {
        /// Format as Docker --env flags.
        #[arg(long)]
        docker_env: bool,
    },
}

// ============================================================================
// Tests
// ============================================================================
