//! Sorted route table and longest-prefix resolution.
//!
//! # Responsibilities
//! - Hold route entries sorted ascending by path (byte-wise)
//! - Resolve a request path to the best matching entry plus subpath
//!
//! # Design Decisions
//! - Flat sorted `Vec` + binary search instead of a trie; tables are small
//!   and rebuilt rarely
//! - Immutable after `build`; every `resolve` is a pure read
//! - A prefix only matches on a segment boundary (`/a` never matches `/ab`)
//! - The root entry `/` matches the query `/` only

use crate::routing::entry::RouteEntry;

/// Immutable collection of route entries, ordered by `path`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

/// A successful lookup: the matched entry and the unmatched remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution<'t, 'q> {
    pub entry: &'t RouteEntry,
    /// Query path after the matched prefix and its separating `/`.
    /// Empty on an exact match.
    pub subpath: &'q str,
}

impl RouteTable {
    /// Build a table from already-normalized, already-validated entries.
    ///
    /// Entries are sorted by path; none are added or dropped. Callers dedupe.
    pub fn build(entries: impl IntoIterator<Item = RouteEntry>) -> Self {
        let mut entries: Vec<RouteEntry> = entries.into_iter().collect();
        entries.sort_by(|a, b| a.path.cmp(&b.path));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in ascending path order.
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.path.as_str())
    }

    /// Find the entry with the longest path that is `request_path` itself or
    /// a `/`-delimited ancestor of it.
    pub fn resolve<'t, 'q>(&'t self, request_path: &'q str) -> Option<Resolution<'t, 'q>> {
        // First entry with path >= request_path.
        let i = self
            .entries
            .partition_point(|e| e.path.as_str() < request_path);

        if let Some(entry) = self.entries.get(i) {
            if entry.path == request_path {
                return Some(Resolution { entry, subpath: "" });
            }
        }

        // Most requests land one or more segments below the entry that sorts
        // right before them.
        if let Some(entry) = i.checked_sub(1).map(|p| &self.entries[p]) {
            if let Some(subpath) = child_subpath(&entry.path, request_path) {
                return Some(Resolution { entry, subpath });
            }
        }

        // Anything at or after `i` sorts >= request_path and cannot be a
        // proper prefix of it. Shortest subpath means longest prefix; on a
        // tie `min_by_key` keeps the first in ascending order.
        self.entries[..i]
            .iter()
            .filter_map(|entry| {
                child_subpath(&entry.path, request_path).map(|subpath| Resolution { entry, subpath })
            })
            .min_by_key(|r| r.subpath.len())
    }
}

/// Remainder of `path` below `prefix`, if `prefix` is a proper ancestor.
fn child_subpath<'q>(prefix: &str, path: &'q str) -> Option<&'q str> {
    path.strip_prefix(prefix)?.strip_prefix('/')
}
