//! The `lectern` application.
//!
//! [`LecternCli`] owns the loaded configuration, installs logging, and
//! dispatches each subcommand to its handler.

use crate::cli::{BaseCommand, CliArgs};
use crate::config::LecternConfig;
use crate::{config_handlers, site_handlers};
use lectern_core::Result;
use std::path::Path;
use tracing_subscriber::EnvFilter;

// ============================================================================
// LecternCli
// ============================================================================

pub struct LecternCli {
    name: String,
    config: LecternConfig,
    version: String,
}

impl LecternCli {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = LecternConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }

    pub fn new(name: impl Into<String>, config: LecternConfig) -> Self {
        Self {
            name: name.into(),
            config,
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn config(&self) -> &LecternConfig {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// `RUST_LOG` wins when set; otherwise `--quiet` selects `warn`,
    /// `--verbose` selects `debug`, and the default is `info`.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // A subscriber may already be installed (tests).
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);
        tracing::debug!(project = %self.config.project_name, "config loaded");

        let config = &self.config;
        match args.command {
            Some(BaseCommand::Serve { port }) => site_handlers::handle_serve(config, port).await,
            Some(BaseCommand::Build { out }) => {
                site_handlers::handle_build(config, out.as_deref()).await
            }
            Some(BaseCommand::Routes) => site_handlers::handle_routes(config).await,
            Some(BaseCommand::Groups { group }) => {
                site_handlers::handle_groups(config, group.as_deref()).await
            }
            Some(BaseCommand::Render { file }) => {
                site_handlers::handle_render(config, Path::new(&file)).await
            }
            Some(BaseCommand::Check) => site_handlers::handle_check(config).await,
            Some(BaseCommand::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            Some(BaseCommand::Health) => site_handlers::handle_health(config, &self.name).await,
            Some(BaseCommand::Config(config_cmd)) => {
                config_handlers::handle_config_command(args.config.as_deref(), config_cmd.command)
            }
            None => {
                println!("{} {}: use --help for usage", self.name, self.version);
                Ok(())
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
