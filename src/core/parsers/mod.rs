//! Source parsers.
//!
//! - `source`: JavaScript/TypeScript parser for Astro configuration files (uses swc)

pub mod source;
