//! starlight-i18n - translation status for Astro Starlight sites
//!
//! starlight-i18n statically reads the locales of a Starlight site from its
//! Astro configuration file, then compares every page of the default locale
//! with its translations using git history to find missing and outdated
//! translations.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Locale extraction, content inventory and status computation
//! - `error`: Typed errors of the core
//! - `issues`: Issue type definitions and reporting
//! - `mcp`: Model Context Protocol server implementation
//! - `utils`: Shared utility functions

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod issues;
pub mod mcp;
pub mod utils;
