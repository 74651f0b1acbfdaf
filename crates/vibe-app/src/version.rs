//! Build metadata shown in the sidebar and footer.

const SHORT_SHA_LEN: usize = 7;

/// Returns `pkg_version (short_git_sha)`.
///
/// The hash is `unknown` when the build had no git metadata.
#[must_use]
pub fn build_version() -> String {
    format_version(
        env!("CARGO_PKG_VERSION"),
        option_env!("VERGEN_GIT_SHA"),
    )
}

fn format_version(pkg_version: &str, git_sha: Option<&str>) -> String {
    let git_sha = git_sha
        .filter(|sha| !sha.is_empty())
        .map_or("unknown", |sha| sha.get(..SHORT_SHA_LEN).unwrap_or(sha));
    format!("{pkg_version} ({git_sha})")
}

#[cfg(test)]
mod tests {
    use super::format_version;

    #[test]
    fn shortens_git_sha() {
        assert_eq!(
            format_version("0.1.0", Some("0123456789abcdef")),
            "0.1.0 (0123456)"
        );
        assert_eq!(format_version("0.1.0", Some("abc")), "0.1.0 (abc)");
    }

    #[test]
    fn missing_git_sha_is_unknown() {
        assert_eq!(format_version("0.1.0", None), "0.1.0 (unknown)");
        assert_eq!(format_version("0.1.0", Some("")), "0.1.0 (unknown)");
    }
}
