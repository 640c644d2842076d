//! Error types for pom-completer

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A required property is absent for an element the POM lacks
    #[error("{path} is required")]
    MissingField { path: String },

    /// A required list or mapping is present but has no entries
    #[error("{path} must not be empty")]
    EmptyField { path: String },

    #[error("{} is not found", .0.display())]
    NotFound(PathBuf),

    #[error("document element is <{0}>, expected <project>")]
    NotAPom(String),

    #[error(transparent)]
    Tree(#[from] pom_tree::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML property error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON property error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn missing<S: Into<String>>(path: S) -> Self {
        Error::MissingField { path: path.into() }
    }

    pub fn empty<S: Into<String>>(path: S) -> Self {
        Error::EmptyField { path: path.into() }
    }

    /// True for errors caused by incomplete properties
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::MissingField { .. } | Error::EmptyField { .. })
    }

    /// Dotted/indexed property path of a configuration error
    pub fn field_path(&self) -> Option<&str> {
        match self {
            Error::MissingField { path } | Error::EmptyField { path } => Some(path),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// Unwrap a required property value or report its path.
pub(crate) fn require<'a>(value: Option<&'a str>, path: impl FnOnce() -> String) -> Result<&'a str> {
    value.ok_or_else(|| Error::missing(path()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_messages_name_the_path() {
        assert_eq!(
            Error::missing("licenses[1].url").to_string(),
            "licenses[1].url is required"
        );
        assert_eq!(
            Error::empty("developers").to_string(),
            "developers must not be empty"
        );
    }

    #[test]
    fn classify_errors() {
        let err = Error::missing("scm.url");
        assert!(err.is_configuration());
        assert_eq!(err.field_path(), Some("scm.url"));

        let err = Error::NotFound(PathBuf::from("a:b.yml"));
        assert!(!err.is_configuration());
        assert_eq!(err.field_path(), None);
        assert_eq!(err.to_string(), "a:b.yml is not found");
    }

    #[test]
    fn require_passes_present_values() {
        assert_eq!(require(Some("MIT"), String::new).unwrap(), "MIT");
        let err = require(None, || "project.url".to_string()).unwrap_err();
        assert_eq!(err.field_path(), Some("project.url"));
    }
}
