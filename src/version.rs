//! Build identity reported by `/health` and logged at daemon startup.

use std::fmt;

/// Package version from Cargo.toml.
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service name reported by the health endpoint.
pub const SERVICE_NAME: &str = "WordWeave Poem Generator";

/// Identity of the running build, stamped by `build.rs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildInfo {
    pub version: &'static str,
    /// Full commit sha; `None` outside a git checkout.
    pub commit: Option<&'static str>,
    pub dirty: bool,
    /// RFC 3339 build time.
    pub built_at: Option<&'static str>,
}

impl BuildInfo {
    /// Commit sha shortened to 7 characters.
    pub fn short_commit(&self) -> Option<&'static str> {
        self.commit.map(|sha| match sha.char_indices().nth(7) {
            Some((end, _)) => &sha[..end],
            None => sha,
        })
    }
}

/// Renders as `{version}`, `{version}+{sha}` or `{version}+{sha}.dirty`.
impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.version)?;
        if let Some(sha) = self.short_commit() {
            write!(f, "+{sha}")?;
            if self.dirty {
                f.write_str(".dirty")?;
            }
        }
        Ok(())
    }
}

/// The current build.
pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: PKG_VERSION,
        commit: option_env!("VERGEN_GIT_SHA"),
        dirty: option_env!("VERGEN_GIT_DIRTY") == Some("true"),
        built_at: option_env!("VERGEN_BUILD_TIMESTAMP"),
    }
}

/// [`build_info`] rendered for the health body.
pub fn version_string() -> String {
    build_info().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(commit: Option<&'static str>, dirty: bool) -> BuildInfo {
        BuildInfo {
            version: "1.2.3",
            commit,
            dirty,
            built_at: None,
        }
    }

    #[test]
    fn renders_commit_and_dirty_flag() {
        assert_eq!(info(None, true).to_string(), "1.2.3");
        assert_eq!(info(Some("abcdef0123456"), false).to_string(), "1.2.3+abcdef0");
        assert_eq!(info(Some("abc"), true).to_string(), "1.2.3+abc.dirty");
    }

    #[test]
    fn current_build_starts_with_pkg_version() {
        assert!(version_string().starts_with(PKG_VERSION));
        assert_eq!(build_info().version, PKG_VERSION);
    }
}
