//! Contract tests for route resolution through the public API.

use vanity_router::routing::{ResponsePolicy, Resolver, RouteEntry, RouteTable, VcsKind};

mod common;

fn entry(path: &str, repo: &str) -> RouteEntry {
    RouteEntry::new(path, repo, VcsKind::Git, "")
}

fn resolver(entries: Vec<RouteEntry>) -> Resolver {
    Resolver::new(RouteTable::build(entries), ResponsePolicy::default())
}

fn lookup(resolver: &Resolver, path: &str) -> Option<(String, String)> {
    resolver
        .resolve(path)
        .map(|r| (r.entry.repo.clone(), r.subpath.to_string()))
}

const X: &str = "https://github.com/example/x";
const Y: &str = "https://github.com/example/y";

#[test]
fn test_exact_match_has_empty_subpath() {
    let r = resolver(vec![entry("/a", X), entry("/a/b", Y)]);
    assert_eq!(lookup(&r, "/a"), Some((X.into(), String::new())));
}

#[test]
fn test_child_of_longer_prefix() {
    let r = resolver(vec![entry("/a", X), entry("/a/b", Y)]);
    assert_eq!(lookup(&r, "/a/b/c"), Some((Y.into(), "c".into())));
}

#[test]
fn test_longest_prefix_independent_of_declaration_order() {
    let r = resolver(vec![entry("/a/b", Y), entry("/a", X)]);
    assert_eq!(lookup(&r, "/a/b/c"), Some((Y.into(), "c".into())));
    assert_eq!(lookup(&r, "/a/c/d"), Some((X.into(), "c/d".into())));
}

#[test]
fn test_configured_root_is_not_a_catch_all() {
    let root = "https://github.com/example/root";
    let r = resolver(vec![entry("/", root), entry("/abc", X), entry("/xyz", Y)]);

    assert_eq!(lookup(&r, "/def"), None);
    assert_eq!(lookup(&r, "/def/ghi"), None);
    // Exact match on the root wins over the index page.
    assert_eq!(lookup(&r, "/"), Some((root.into(), String::new())));
}

#[test]
fn test_root_unmatched_without_root_entry() {
    let r = resolver(vec![entry("/abc", X), entry("/xyz", Y)]);
    assert_eq!(lookup(&r, "/"), None);
    let paths: Vec<&str> = r.table().paths().collect();
    assert_eq!(paths, vec!["/abc", "/xyz"]);
}

#[test]
fn test_reconstruction_is_deterministic() {
    let shared = common::resolver_from_yaml(common::CONFIG);
    let again = common::resolver_from_yaml(common::CONFIG);
    let (a, b) = (shared.load(), again.load());

    for query in [
        "/",
        "/portmidi",
        "/portmidi/sub/pkg",
        "/tools",
        "/tools/cmd",
        "/tools/cmd/vet",
        "/tools/lint",
        "/toolsx",
        "/unknown",
    ] {
        assert_eq!(lookup(&a, query), lookup(&b, query), "query {}", query);
    }
}

#[test]
fn test_config_backed_resolution() {
    let shared = common::resolver_from_yaml(common::CONFIG);
    let r = shared.load();

    let m = r.resolve("/tools/cmd/vet").unwrap();
    assert_eq!(m.entry.path, "/tools/cmd");
    assert_eq!(m.subpath, "vet");

    let m = r.resolve("/tools/lint").unwrap();
    assert_eq!(m.entry.vcs, VcsKind::Hg);
    assert_eq!(m.subpath, "lint");

    assert!(r.resolve("/toolsx").is_none());
}
