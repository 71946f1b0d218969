//! Common utility types shared across the codebase.

use indexmap::IndexMap;

/// String-keyed map that iterates in insertion order.
///
/// Re-inserting an existing key replaces the value in place and keeps the
/// original position, mirroring assignment to an existing property of a
/// JavaScript object. Locale tables and page partitions rely on this order.
pub type OrderedMap<V> = IndexMap<String, V>;

/// Render a path with forward slashes, the separator used for content ids.
pub fn to_slash_path(path: &std::path::Path) -> String {
    path.components()
        .filter(|component| !matches!(component, std::path::Component::CurDir))
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
