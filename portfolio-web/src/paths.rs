//! Helpers for constructing URLs to static assets that respect the deployment base path.
use portfolio_core::{Season, track_for};

/// Root-relative URL of a bundled asset.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/portfolio` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// URL of the ambient loop for `season`.
#[must_use]
pub fn track_url(season: Season) -> String {
    asset_path(track_for(season))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}
