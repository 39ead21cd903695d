use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One known internal static repository, as listed by the server.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct StaticRepoSummary {
    pub name: String,
}

/// Editable configuration of a virtual repository. `target` holds a
/// static-repo name when `external` is false and a URL otherwise.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VirtualRepoConfig {
    pub name: String,
    pub external: bool,
    pub target: String,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
}

/// How a static repository's metadata is regenerated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RepoType {
    Scheduled,
    Static,
}

impl RepoType {
    pub fn wire_value(self) -> &'static str {
        match self {
            RepoType::Scheduled => "SCHEDULED",
            RepoType::Static => "STATIC",
        }
    }
}

impl fmt::Display for RepoType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_value())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetParseError {
    #[error("target must not be empty")]
    Empty,
    #[error("static target must name a repository")]
    MissingRepoName,
}

/// Prefix that marks a destination as an internal static repository.
pub const STATIC_TARGET_PREFIX: &str = "static/";

/// Destination a virtual repository redirects to: either an internal static
/// repository or an arbitrary external URL.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RepoTarget {
    Static(String),
    External(String),
}

impl RepoTarget {
    /// Wire form sent as the `destination` of a virtual repo:
    /// `static/<name>` for internal targets, the URL itself otherwise.
    pub fn wire_value(&self) -> String {
        match self {
            RepoTarget::Static(name) => format!("{STATIC_TARGET_PREFIX}{name}"),
            RepoTarget::External(url) => url.clone(),
        }
    }
}

impl FromStr for RepoTarget {
    type Err = TargetParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if value.is_empty() {
            return Err(TargetParseError::Empty);
        }
        if let Some(name) = value.strip_prefix(STATIC_TARGET_PREFIX) {
            if name.is_empty() {
                return Err(TargetParseError::MissingRepoName);
            }
            return Ok(RepoTarget::Static(name.to_string()));
        }
        Ok(RepoTarget::External(value.to_string()))
    }
}

impl fmt::Display for RepoTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.wire_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repo_target_parses_static_prefix() {
        let target: RepoTarget = "static/centos7".parse().unwrap();
        assert_eq!(target, RepoTarget::Static("centos7".to_string()));
        assert_eq!(target.wire_value(), "static/centos7");
    }

    #[test]
    fn repo_target_treats_everything_else_as_external() {
        let target: RepoTarget = "http://mirror.example/repo".parse().unwrap();
        assert_eq!(
            target,
            RepoTarget::External("http://mirror.example/repo".to_string())
        );
        assert_eq!(target.wire_value(), "http://mirror.example/repo");
    }

    #[test]
    fn repo_target_rejects_empty_input() {
        assert_eq!("".parse::<RepoTarget>(), Err(TargetParseError::Empty));
        assert_eq!(
            "static/".parse::<RepoTarget>(),
            Err(TargetParseError::MissingRepoName)
        );
    }

    #[test]
    fn repo_type_wire_values() {
        assert_eq!(RepoType::Scheduled.wire_value(), "SCHEDULED");
        assert_eq!(RepoType::Static.to_string(), "STATIC");
    }
}
