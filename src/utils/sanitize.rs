//! Filesystem-name sanitization.

use std::path::{Component, Path};

/// Derive a filesystem-safe directory name from a human-readable release
/// label.
///
/// Every character outside `[A-Za-z0-9._-]` is replaced with `_`. Two
/// labels that differ only in disallowed characters therefore map to the
/// same directory name; this collision is accepted, matching how release
/// titles are used in practice (they differ in their version tag).
///
/// ```rust
/// use depfetch::utils::sanitize_dir_name;
///
/// assert_eq!(sanitize_dir_name("DepMap 24Q4 (Public)"), "DepMap_24Q4__Public_");
/// ```
pub fn sanitize_dir_name(label: &str) -> String {
    label
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Check that a catalog-provided file name stays inside the destination
/// directory when joined onto it.
///
/// Rejects absolute paths and any `..` or root components. Plain nested
/// names like `sub/file.csv` are allowed.
pub fn is_safe_relative_path(name: &str) -> bool {
    let path = Path::new(name);
    !name.is_empty()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
