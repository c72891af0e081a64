//! Route entries and version-control kinds.

use std::fmt;
use std::str::FromStr;

/// Version-control system advertised in the `go-import` meta tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VcsKind {
    Git,
    Svn,
    Bzr,
    Hg,
}

impl VcsKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VcsKind::Git => "git",
            VcsKind::Svn => "svn",
            VcsKind::Bzr => "bzr",
            VcsKind::Hg => "hg",
        }
    }
}

impl fmt::Display for VcsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no supported VCS.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVcs(pub String);

impl fmt::Display for UnknownVcs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown VCS {}", self.0)
    }
}

impl std::error::Error for UnknownVcs {}

impl FromStr for VcsKind {
    type Err = UnknownVcs;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "git" => Ok(VcsKind::Git),
            "svn" => Ok(VcsKind::Svn),
            "bzr" => Ok(VcsKind::Bzr),
            "hg" => Ok(VcsKind::Hg),
            other => Err(UnknownVcs(other.to_string())),
        }
    }
}

/// One configured mapping from an import path prefix to a repository.
///
/// `path` is already normalized: no trailing `/`, except the root path `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: String,
    pub repo: String,
    pub vcs: VcsKind,
    /// Source-browsing template for `go-source`. May be empty.
    pub display: String,
}

impl RouteEntry {
    pub fn new(
        path: impl Into<String>,
        repo: impl Into<String>,
        vcs: VcsKind,
        display: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            repo: repo.into(),
            vcs,
            display: display.into(),
        }
    }

    /// Import path clients use for this entry, e.g. `example.com/portmidi`.
    ///
    /// The root entry maps to the bare host.
    pub fn import_path(&self, host: &str) -> String {
        if self.path == "/" {
            host.to_string()
        } else {
            format!("{}{}", host, self.path)
        }
    }
}
