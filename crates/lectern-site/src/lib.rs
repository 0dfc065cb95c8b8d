#![doc = include_str!("../README.md")]

pub mod document;
pub mod error;
pub mod export;
pub mod navigator;
pub mod pages;
pub mod routes;
pub mod server;
pub mod state;

pub use document::{PageMeta, SiteMeta, render_document};
pub use error::SiteError;
pub use export::{ExportReport, LessonFile, discover_lessons, export_site};
pub use navigator::render_navigator;
pub use pages::{lesson_page, navigation_page};
pub use routes::router;
pub use server::{serve, serve_on};
pub use state::SiteState;
