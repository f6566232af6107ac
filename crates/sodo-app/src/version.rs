//! Build version reported in the startup log.

/// Returns `pkg_version (git_sha)`, or `pkg_version (unknown)` outside a git
/// checkout.
#[must_use]
pub fn build_version() -> String {
    let git_sha = option_env!("VERGEN_GIT_SHA").unwrap_or("unknown");
    format!("{} ({git_sha})", env!("CARGO_PKG_VERSION"))
}
