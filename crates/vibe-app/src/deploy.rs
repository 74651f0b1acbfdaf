//! Web deployment configuration.
//!
//! The web build is served as static files, either from the root of a local
//! server or from a project page of a hosted-pages site, where every URL lives
//! below `/<repository>`. The build script decides which one applies and
//! embeds the result; this module is shared with it and must stay free of crate
//! dependencies.

/// Environment variable carrying the base path from the build script.
pub const BASE_PATH_ENV: &str = "VIBE_BASE_PATH";

const FALLBACK_REPOSITORY: &str = "VIBE";

/// Computes the base path from the CI environment.
///
/// On a hosted-pages build (`GITHUB_ACTIONS=true`) the base path is
/// `/<name>`, where `<name>` is the repository part of `owner/name`.
/// Otherwise it is empty.
#[must_use]
pub fn base_path_for(github_actions: Option<&str>, repository: Option<&str>) -> String {
    if github_actions != Some("true") {
        return String::new();
    }
    let name = repository
        .and_then(|repository| repository.split('/').nth(1))
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_REPOSITORY);
    format!("/{name}")
}

/// Returns the base path embedded at build time.
#[must_use]
pub fn base_path() -> &'static str {
    option_env!("VIBE_BASE_PATH").unwrap_or("")
}

/// Prefixes an absolute application path with the base path.
#[must_use]
pub fn href(path: &str) -> String {
    href_with(base_path(), path)
}

/// Strips the base path from a location path.
///
/// Returns `None` for a path outside the deployment.
#[must_use]
pub fn app_path(location: &str) -> Option<&str> {
    app_path_with(base_path(), location)
}

fn app_path_with<'a>(base_path: &str, location: &'a str) -> Option<&'a str> {
    let rest = location.strip_prefix(base_path)?;
    if rest.is_empty() || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}

fn href_with(base_path: &str, path: &str) -> String {
    match (base_path, path) {
        ("", path) => path.to_owned(),
        (base, "/") => format!("{base}/"),
        (base, path) => format!("{base}{path}"),
    }
}
