//! Run configuration

use std::path::PathBuf;

/// Default root of the Maven repository layout
pub const DEFAULT_WORKING_ROOT: &str = "maven";

/// Default extension of discovered targets
pub const DEFAULT_EXTENSION: &str = "pom";

/// Everything a run needs, resolved up front by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Root of the repository layout, `maven` unless overridden
    pub working_root: PathBuf,
    pub group_id: String,
    pub artifact_id: String,
    /// Complete only this version's POM when set
    pub version: Option<String>,
    /// Property file; `<group-id>:<artifact-id>.yml` when unset
    pub properties: Option<PathBuf>,
    /// Extension of the files completed when no version is given
    pub extension: String,
}

impl RunConfig {
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            working_root: PathBuf::from(DEFAULT_WORKING_ROOT),
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: None,
            properties: None,
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// `<root>/<group id with dots as slashes>/<artifact id>`
    pub fn working_dir(&self) -> PathBuf {
        self.group_id
            .split('.')
            .fold(self.working_root.clone(), |dir, segment| dir.join(segment))
            .join(&self.artifact_id)
    }

    pub fn properties_path(&self) -> PathBuf {
        self.properties.clone().unwrap_or_else(|| {
            PathBuf::from(format!("{}:{}.yml", self.group_id, self.artifact_id))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn working_dir_follows_repository_layout() {
        let config = RunConfig::new("org.example.tools", "demo");
        assert_eq!(
            config.working_dir(),
            Path::new("maven/org/example/tools/demo")
        );

        let config = RunConfig {
            working_root: PathBuf::from("/srv/repo"),
            ..RunConfig::new("io.demo", "lib")
        };
        assert_eq!(config.working_dir(), Path::new("/srv/repo/io/demo/lib"));
    }

    #[test]
    fn default_properties_path() {
        let config = RunConfig::new("org.example", "demo");
        assert_eq!(config.properties_path(), Path::new("org.example:demo.yml"));

        let config = RunConfig {
            properties: Some(PathBuf::from("props/demo.json")),
            ..config
        };
        assert_eq!(config.properties_path(), Path::new("props/demo.json"));
    }
}
