//! Core engine: locale extraction, content inventory and translation status.
//!
//! - `parsers`: Astro configuration parsing on top of swc
//! - `locales`: static extraction of the Starlight locales configuration
//! - `workspace` / `git`: filesystem and history collaborators
//! - `project` / `content` / `status`: the status pipeline
//! - `context`: everything above wired together for the CLI and MCP server
//! - `translation`: preparing missing and outdated translations

pub mod cancel;
pub mod content;
pub mod context;
pub mod git;
pub mod locales;
pub mod parsers;
pub mod project;
pub mod status;
pub mod translation;
pub mod workspace;

pub use cancel::Cancellation;
pub use context::{StatusContext, get_content_pages_statuses, load_locales_config};
pub use status::{LocaleStatuses, PageStatus, PageStatusesByLocale};
