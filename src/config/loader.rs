//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::schema::ConfigFile;
use crate::config::validation::{validate_config, ValidationError, VanityConfig};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error(
        "invalid config: {}",
        .0.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ")
    )]
    Validation(Vec<ValidationError>),
}

/// Supported file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
}

impl ConfigFormat {
    /// Pick a format from the file extension. Anything but `.toml` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Yaml,
        }
    }
}

/// Parse a configuration document without validating it.
pub fn parse_config(content: &str, format: ConfigFormat) -> Result<ConfigFile, ConfigError> {
    let file = match format {
        ConfigFormat::Toml => toml::from_str(content)?,
        // An empty YAML document is a null, which serde_yaml refuses as a struct.
        ConfigFormat::Yaml if content.trim().is_empty() => ConfigFile::default(),
        ConfigFormat::Yaml => serde_yaml::from_str(content)?,
    };
    Ok(file)
}

/// Load, parse and validate configuration from a YAML or TOML file.
pub fn load_config(path: &Path) -> Result<VanityConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file = parse_config(&content, ConfigFormat::from_path(path))?;

    let config = validate_config(&file).map_err(ConfigError::Validation)?;

    tracing::debug!(
        path = %path.display(),
        routes = config.entries.len(),
        "Configuration parsed"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const YAML: &str = r#"
host: go.example.com
cache_max_age: 3600
paths:
  /portmidi:
    repo: https://github.com/rakyll/portmidi
  /tools/:
    repo: https://hg.example.com/tools
    vcs: hg
    display: "https://hg.example.com/tools https://hg.example.com/tools/file/tip{/dir} https://hg.example.com/tools/file/tip{/dir}/{file}#L{line}"
"#;

    const TOML: &str = r#"
host = "go.example.com"
cache_max_age = 3600

[paths."/portmidi"]
repo = "https://github.com/rakyll/portmidi"

[paths."/tools/"]
repo = "https://hg.example.com/tools"
vcs = "hg"
"#;

    #[test]
    fn test_format_from_path() {
        assert_eq!(ConfigFormat::from_path(Path::new("vanity.toml")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("vanity.TOML")), ConfigFormat::Toml);
        assert_eq!(ConfigFormat::from_path(Path::new("vanity.yaml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("vanity.yml")), ConfigFormat::Yaml);
        assert_eq!(ConfigFormat::from_path(Path::new("vanity")), ConfigFormat::Yaml);
    }

    #[test]
    fn test_parse_yaml() {
        let file = parse_config(YAML, ConfigFormat::Yaml).unwrap();
        assert_eq!(file.host.as_deref(), Some("go.example.com"));
        assert_eq!(file.cache_max_age, Some(3600));
        let keys: Vec<&str> = file.paths.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["/portmidi", "/tools/"]);
        assert_eq!(file.paths[1].1.vcs, "hg");
        assert_eq!(file.paths[0].1.display, "");
    }

    #[test]
    fn test_parse_toml() {
        let file = parse_config(TOML, ConfigFormat::Toml).unwrap();
        assert_eq!(file.host.as_deref(), Some("go.example.com"));
        assert_eq!(file.paths.len(), 2);
        let tools = file.paths.iter().find(|(k, _)| k == "/tools/").unwrap();
        assert_eq!(tools.1.repo, "https://hg.example.com/tools");
    }

    #[test]
    fn test_parse_empty_documents() {
        let file = parse_config("", ConfigFormat::Yaml).unwrap();
        assert!(file.paths.is_empty());
        assert!(file.host.is_none());

        let file = parse_config("", ConfigFormat::Toml).unwrap();
        assert!(file.paths.is_empty());

        let file = parse_config("paths:\n", ConfigFormat::Yaml).unwrap();
        assert!(file.paths.is_empty());
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("paths: [1, 2", ConfigFormat::Yaml).unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));

        let err = parse_config("paths = 3", ConfigFormat::Toml).unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(YAML.as_bytes()).unwrap();

        let config = load_config(file.path()).unwrap();
        let paths: Vec<&str> = config.entries.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(paths, vec!["/portmidi", "/tools"]);
        assert_eq!(config.policy.cache_control, "public, max-age=3600");
    }

    #[test]
    fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/vanity.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/vanity.yaml"));
    }

    #[test]
    fn test_load_config_reports_validation_errors() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(b"cache_max_age = -1\n[paths.\"/x\"]\nrepo = \"https://example.com/x\"\n")
            .unwrap();

        let err = load_config(file.path()).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("invalid config: "), "{}", message);
        assert!(message.contains("cache_max_age"), "{}", message);
        assert!(message.contains("cannot infer VCS"), "{}", message);
    }
}
