/// Path prefixes the edge resolver never runs for (matched per segment)
const EXCLUDED_PREFIXES: [&str; 5] = ["/api", "/_next/static", "/_next/image", "/static", "/assets"];

const EXCLUDED_PATHS: [&str; 2] = ["/favicon.ico", "/robots.txt"];

const STATIC_EXTENSIONS: [&str; 12] = [
    "svg", "png", "jpg", "jpeg", "gif", "webp", "ico", "css", "js", "map", "woff", "woff2",
];

/// Whether a request path is a static asset, framework-internal or API path.
pub fn is_excluded(path: &str) -> bool {
    if EXCLUDED_PATHS.contains(&path) {
        return true;
    }

    let under_prefix = EXCLUDED_PREFIXES.iter().any(|prefix| {
        path.strip_prefix(prefix)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
    });
    if under_prefix {
        return true;
    }

    let last_segment = path.rsplit('/').next().unwrap_or_default();
    match last_segment.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => STATIC_EXTENSIONS
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(ext)),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_routes_excluded() {
        assert!(is_excluded("/api"));
        assert!(is_excluded("/api/organizations"));
        assert!(is_excluded("/api/organizations/acme"));
        // only whole segments count
        assert!(!is_excluded("/apiary"));
    }

    #[test]
    fn test_framework_paths_excluded() {
        assert!(is_excluded("/_next/static/chunks/main.js"));
        assert!(is_excluded("/_next/image"));
        assert!(is_excluded("/static/app.css"));
        assert!(is_excluded("/favicon.ico"));
        assert!(is_excluded("/robots.txt"));
    }

    #[test]
    fn test_static_extensions_excluded() {
        assert!(is_excluded("/logos/demo.svg"));
        assert!(is_excluded("/img/Banner.PNG"));
        assert!(is_excluded("/fonts/inter.woff2"));
    }

    #[test]
    fn test_pages_intercepted() {
        assert!(!is_excluded("/"));
        assert!(!is_excluded("/dashboard/tenant"));
        assert!(!is_excluded("/settings/branding"));
        assert!(!is_excluded("/reports/2024.q1"));
        assert!(!is_excluded("/.well-known"));
    }
}
