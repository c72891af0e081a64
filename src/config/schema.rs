//! Configuration schema definitions.
//!
//! The same structure is read from YAML and TOML files:
//!
//! ```yaml
//! host: go.example.com
//! cache_max_age: 3600
//! paths:
//!   /portmidi:
//!     repo: https://github.com/rakyll/portmidi
//!   /tools:
//!     repo: https://hg.example.com/tools
//!     vcs: hg
//! ```

use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

/// Root of a configuration file, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Host used in import paths. Falls back to the request host.
    pub host: Option<String>,

    /// `Cache-Control` max-age in seconds. Defaults to 24 hours.
    pub cache_max_age: Option<i64>,

    /// Import paths in document order.
    #[serde(deserialize_with = "ordered_paths")]
    pub paths: Vec<(String, PathConfig)>,
}

/// One entry under `paths`. Empty strings mean "not set".
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PathConfig {
    /// Repository root URL.
    pub repo: String,

    /// `go-source` template; inferred for well-known hosts when empty.
    pub display: String,

    /// One of git, svn, bzr, hg; inferred for GitHub when empty.
    pub vcs: String,
}

// A plain map type would lose declaration order, and with it the
// last-declared-wins rule for paths that normalize to the same key.
fn ordered_paths<'de, D>(deserializer: D) -> Result<Vec<(String, PathConfig)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct PathsVisitor;

    impl<'de> Visitor<'de> for PathsVisitor {
        type Value = Vec<(String, PathConfig)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of import paths to repository settings")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut paths = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((path, config)) = map.next_entry::<String, PathConfig>()? {
                paths.push((path, config));
            }
            Ok(paths)
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: serde::de::Error,
        {
            Ok(Vec::new())
        }
    }

    deserializer.deserialize_any(PathsVisitor)
}
