//! URL helpers that respect the deployment base path.
//!
//! `PUBLIC_URL` set at compile time (e.g. `/breaks` when hosted under a
//! subdirectory) prefixes asset and router URLs; local builds fall back to
//! root-anchored paths.

/// URL for a static asset under the deployment base.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    join_base(option_env!("PUBLIC_URL").unwrap_or(""), relative)
}

/// Base path for the router, or `None` when serving from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    let base = option_env!("PUBLIC_URL").unwrap_or("").trim_end_matches('/');
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

fn join_base(base: &str, relative: &str) -> String {
    let base = base.trim_end_matches('/');
    let relative = relative.trim_start_matches('/');
    if base.is_empty() {
        format!("/{relative}")
    } else {
        format!("{base}/{relative}")
    }
}
