//! Command-line front end for Lectern.
//!
//! - [`cli`]: argument and subcommand definitions
//! - [`config`]: [`LecternConfig`] loading via `confyg`
//! - [`app`]: [`LecternCli`], logging setup and command dispatch

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config;
pub mod config_handlers;
pub mod site_handlers;

pub use app::LecternCli;
pub use cli::{BaseCommand, CliArgs, ConfigAction, ConfigCommand};
pub use config::LecternConfig;
