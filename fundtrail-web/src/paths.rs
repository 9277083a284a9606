//! Helpers for constructing URLs that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/run` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Base path for the router (e.g., `/run` when hosted under a subdirectory).
///
/// Returns `None` when no base path is configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

/// Resolve a data source: absolute URLs pass through, anything else is an asset.
#[must_use]
pub fn resolve_url(url: &str) -> String {
    if url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//") {
        url.to_string()
    } else {
        asset_path(url)
    }
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

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim_end_matches('/').trim();
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{asset_path, resolve_url, router_base};

    #[test]
    fn builds_root_prefixed_path_when_base_missing() {
        assert_eq!(asset_path("static/route-desktop.svg"), "/static/route-desktop.svg");
        assert_eq!(asset_path("/static/route-desktop.svg"), "/static/route-desktop.svg");
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            super::asset_path_with_base("static/map.webp", "/run"),
            "/run/static/map.webp"
        );
        assert_eq!(
            super::asset_path_with_base("/static/map.webp", "/run/"),
            "/run/static/map.webp"
        );
    }

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_base(), None);
    }

    #[test]
    fn router_base_returns_trimmed_value() {
        assert_eq!(
            super::router_base_with_base("/run/"),
            Some(String::from("/run"))
        );
    }

    #[test]
    fn absolute_data_urls_are_untouched() {
        assert_eq!(
            resolve_url("https://example.org/data.json"),
            "https://example.org/data.json"
        );
        assert_eq!(resolve_url("data/progress.json"), "/data/progress.json");
    }
}
