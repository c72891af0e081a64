//! HTML rendering for vanity and index pages.
//!
//! Templates live in `templates/` and are compiled into the binary, so there
//! is no per-request parsing and no global template state. All values are
//! HTML-escaped.

use askama::Template;

use crate::routing::{Resolution, RouteTable, VcsKind};

/// Page carrying the `go-import` and `go-source` meta tags for one route.
#[derive(Template)]
#[template(path = "vanity.html")]
pub struct VanityPage<'a> {
    pub import: String,
    pub vcs: VcsKind,
    pub repo: &'a str,
    pub display: &'a str,
}

impl<'a> VanityPage<'a> {
    pub fn new(host: &str, resolution: &Resolution<'a, '_>) -> Self {
        let entry = resolution.entry;
        Self {
            import: entry.import_path(host),
            vcs: entry.vcs,
            repo: &entry.repo,
            display: &entry.display,
        }
    }
}

/// Listing of every configured import path, shown at `/`.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexPage<'a> {
    pub host: &'a str,
    pub handlers: Vec<String>,
}

impl<'a> IndexPage<'a> {
    pub fn new(host: &'a str, table: &RouteTable) -> Self {
        Self {
            host,
            handlers: table.entries().iter().map(|e| e.import_path(host)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouteEntry;

    // Older askama releases escape '/' as well; compare on the decoded form.
    fn decoded(html: String) -> String {
        html.replace("&#x2f;", "/")
    }

    #[test]
    fn test_render_vanity_page() {
        let table = RouteTable::build([RouteEntry::new(
            "/portmidi",
            "https://github.com/rakyll/portmidi",
            VcsKind::Git,
            "https://github.com/rakyll/portmidi _ _",
        )]);
        let resolution = table.resolve("/portmidi/sub").unwrap();

        let html = decoded(VanityPage::new("example.com", &resolution).render().unwrap());
        assert!(html.contains(
            r#"<meta name="go-import" content="example.com/portmidi git https://github.com/rakyll/portmidi">"#
        ));
        assert!(html.contains(
            r#"<meta name="go-source" content="example.com/portmidi https://github.com/rakyll/portmidi _ _">"#
        ));
        assert!(html.contains(r#"content="0; url=https://github.com/rakyll/portmidi""#));
    }

    #[test]
    fn test_render_escapes_values() {
        let table = RouteTable::build([RouteEntry::new(
            "/x",
            "https://example.com/\"><script>",
            VcsKind::Hg,
            "",
        )]);
        let resolution = table.resolve("/x").unwrap();

        let html = VanityPage::new("example.com", &resolution).render().unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_index_in_table_order() {
        let table = RouteTable::build([
            RouteEntry::new("/zeta", "https://github.com/example/zeta", VcsKind::Git, ""),
            RouteEntry::new("/alpha", "https://github.com/example/alpha", VcsKind::Git, ""),
        ]);

        let html = decoded(IndexPage::new("example.com", &table).render().unwrap());
        assert!(html.contains("<h1>example.com</h1>"));
        let alpha = html.find(r#"<a href="https://example.com/alpha">"#).unwrap();
        let zeta = html.find(r#"<a href="https://example.com/zeta">"#).unwrap();
        assert!(alpha < zeta);
    }
}
