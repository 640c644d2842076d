//! Typed per-artifact properties
//!
//! The property file mirrors the POM subset the completer understands:
//!
//! ```yaml
//! project:
//!   name: demo
//!   description: A demo library
//!   url: https://example.org/demo
//! licenses:
//!   - name: MIT
//!     url: https://opensource.org/licenses/MIT
//!     distribution: repo
//! developers:
//!   - name: Alice
//!     organizationUrl: https://example.org
//! scm:
//!   url: https://example.org/demo.git
//! ```
//!
//! Leaves documented as required are still modelled as `Option`: they are
//! only required when the POM lacks the matching element, so the check runs
//! during completion and reports the field path.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Root of the property file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Properties {
    pub project: ProjectProperties,
    /// Required, non-empty
    pub licenses: Option<Vec<LicenseProperties>>,
    /// Required, non-empty
    pub developers: Option<Vec<DeveloperProperties>>,
    /// Required, non-empty
    pub scm: Option<ScmProperties>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectProperties {
    /// Required
    pub name: Option<String>,
    /// Required
    pub description: Option<String>,
    /// Required
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LicenseProperties {
    /// Required
    pub name: Option<String>,
    /// Required
    pub url: Option<String>,
    pub distribution: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeveloperProperties {
    /// Required
    pub name: Option<String>,
    pub id: Option<String>,
    pub email: Option<String>,
    pub organization: Option<String>,
    pub organization_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScmProperties {
    /// Required
    pub url: Option<String>,
    pub connection: Option<String>,
    pub developer_connection: Option<String>,
}

impl ScmProperties {
    /// True when the mapping carries no value at all
    pub fn is_empty(&self) -> bool {
        self.url.is_none() && self.connection.is_none() && self.developer_connection.is_none()
    }
}

/// Serialization format of a property file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertiesFormat {
    Yaml,
    Json,
}

impl PropertiesFormat {
    /// Pick the format from the file extension; YAML unless `.json`
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => PropertiesFormat::Json,
            _ => PropertiesFormat::Yaml,
        }
    }
}

impl Properties {
    /// Parse properties from a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse properties from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load properties from a file, choosing the format by extension
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(Error::NotFound(path.to_path_buf()));
        }
        let content = fs::read_to_string(path)?;
        match PropertiesFormat::from_path(path) {
            PropertiesFormat::Yaml => Self::from_yaml_str(&content),
            PropertiesFormat::Json => Self::from_json_str(&content),
        }
    }
}
