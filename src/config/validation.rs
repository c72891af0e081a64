//! Configuration validation.
//!
//! # Responsibilities
//! - Normalize import paths (strip trailing `/`)
//! - Infer `display` and `vcs` for well-known hosting sites
//! - Validate value ranges and enumerations
//! - Collapse duplicate paths
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Pure function: ConfigFile → Result<VanityConfig, Vec<ValidationError>>
//! - Runs before any route table is built
//! - Duplicate normalized paths: the last one declared wins

use std::collections::BTreeMap;

use thiserror::Error;
use url::Url;

use crate::config::schema::{ConfigFile, PathConfig};
use crate::routing::resolver::DEFAULT_CACHE_MAX_AGE;
use crate::routing::{ResponsePolicy, RouteEntry, VcsKind};

const GITHUB_PREFIX: &str = "https://github.com/";
const BITBUCKET_PREFIX: &str = "https://bitbucket.org";

/// A single semantic problem in a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("cache_max_age must not be negative (got {0})")]
    CacheMaxAgeNegative(i64),

    #[error("configuration for {path}: path must start with '/'")]
    RelativePath { path: String },

    #[error("configuration for {path}: repo is required")]
    MissingRepo { path: String },

    #[error("configuration for {path}: repo {repo} is not an absolute URL")]
    InvalidRepoUrl { path: String, repo: String },

    #[error("configuration for {path}: unknown VCS {vcs}")]
    UnknownVcs { path: String, vcs: String },

    #[error("configuration for {path}: cannot infer VCS from {repo}")]
    CannotInferVcs { path: String, repo: String },
}

/// Validated configuration, ready to build a resolver from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VanityConfig {
    /// One entry per distinct normalized path, ascending by path.
    pub entries: Vec<RouteEntry>,
    pub policy: ResponsePolicy,
}

/// Validate a parsed file and turn it into route entries.
pub fn validate_config(file: &ConfigFile) -> Result<VanityConfig, Vec<ValidationError>> {
    let mut errors = Vec::new();

    let cache_max_age = match file.cache_max_age {
        None => DEFAULT_CACHE_MAX_AGE,
        Some(age) => u64::try_from(age).unwrap_or_else(|_| {
            errors.push(ValidationError::CacheMaxAgeNegative(age));
            0
        }),
    };

    let mut entries: BTreeMap<String, RouteEntry> = BTreeMap::new();
    for (raw_path, path_config) in &file.paths {
        match validate_path(raw_path, path_config) {
            Ok(entry) => {
                if let Some(previous) = entries.insert(entry.path.clone(), entry) {
                    tracing::warn!(
                        path = %previous.path,
                        declared_as = %raw_path,
                        "Duplicate import path, keeping the last declaration"
                    );
                }
            }
            Err(mut path_errors) => errors.append(&mut path_errors),
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(VanityConfig {
        entries: entries.into_values().collect(),
        policy: ResponsePolicy::new(file.host.clone(), cache_max_age),
    })
}

/// Strip trailing slashes. A path made only of slashes becomes `/`.
pub fn normalize_path(path: &str) -> String {
    match path.trim_end_matches('/') {
        "" if path.starts_with('/') => "/".to_string(),
        trimmed => trimmed.to_string(),
    }
}

fn validate_path(raw_path: &str, config: &PathConfig) -> Result<RouteEntry, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let path = normalize_path(raw_path);

    if !path.starts_with('/') {
        errors.push(ValidationError::RelativePath { path: raw_path.to_string() });
    }

    let repo = config.repo.as_str();
    if repo.is_empty() {
        errors.push(ValidationError::MissingRepo { path: raw_path.to_string() });
    } else if Url::parse(repo).is_err() {
        errors.push(ValidationError::InvalidRepoUrl {
            path: raw_path.to_string(),
            repo: repo.to_string(),
        });
    }

    let vcs = match infer_vcs(raw_path, config) {
        Ok(vcs) => Some(vcs),
        Err(e) => {
            errors.push(e);
            None
        }
    };

    match vcs {
        Some(vcs) if errors.is_empty() => Ok(RouteEntry {
            path,
            repo: repo.to_string(),
            vcs,
            display: infer_display(config),
        }),
        _ => Err(errors),
    }
}

fn infer_display(config: &PathConfig) -> String {
    let repo = &config.repo;
    if !config.display.is_empty() {
        config.display.clone()
    } else if repo.starts_with(GITHUB_PREFIX) {
        format!(
            "{repo} {repo}/tree/master{{/dir}} {repo}/blob/master{{/dir}}/{{file}}#L{{line}}"
        )
    } else if repo.starts_with(BITBUCKET_PREFIX) {
        format!(
            "{repo} {repo}/src/default{{/dir}} {repo}/src/default{{/dir}}/{{file}}#{{file}}-{{line}}"
        )
    } else {
        String::new()
    }
}

fn infer_vcs(raw_path: &str, config: &PathConfig) -> Result<VcsKind, ValidationError> {
    if !config.vcs.is_empty() {
        return config.vcs.parse().map_err(|_| ValidationError::UnknownVcs {
            path: raw_path.to_string(),
            vcs: config.vcs.clone(),
        });
    }
    if config.repo.starts_with(GITHUB_PREFIX) {
        return Ok(VcsKind::Git);
    }
    Err(ValidationError::CannotInferVcs {
        path: raw_path.to_string(),
        repo: config.repo.clone(),
    })
}
