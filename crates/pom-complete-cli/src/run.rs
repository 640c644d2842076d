//! Batch completion

use anyhow::Context;
use pom_completer::{complete_file, CompletionReport, Error, Properties};
use tracing::{info, warn};
use xot_adapter::XotTree;

use crate::backup::create_backup;
use crate::config::RunConfig;
use crate::discovery::discover_targets;

/// Complete every target of `config`, stopping at the first failure.
///
/// Each file is backed up right before it is completed. Files after a
/// failing one are neither backed up nor touched.
pub fn run(config: &RunConfig) -> anyhow::Result<Vec<CompletionReport>> {
    let properties = Properties::from_path(&config.properties_path())?;
    let targets = discover_targets(config)?;
    info!(
        group_id = %config.group_id,
        artifact_id = %config.artifact_id,
        targets = targets.len(),
        "completing POMs"
    );

    let mut reports = Vec::with_capacity(targets.len());
    for target in targets {
        if !target.is_file() {
            return Err(Error::NotFound(target).into());
        }
        create_backup(&target)
            .with_context(|| format!("failed to back up {}", target.display()))?;
        let report = match complete_file::<XotTree>(&target, &properties) {
            Ok(report) => report,
            Err(err) => {
                if err.is_configuration() {
                    warn!(
                        path = %target.display(),
                        field = err.field_path().unwrap_or_default(),
                        "property file is incomplete"
                    );
                }
                let context = format!("failed to complete {}", target.display());
                return Err(anyhow::Error::new(err).context(context));
            }
        };
        if report.is_unchanged() {
            info!(path = %target.display(), "already complete");
        }
        reports.push(report);
    }
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backup::backup_path;
    use std::fs;
    use std::path::PathBuf;

    const PROPERTIES: &str = r#"
project:
  name: demo
  description: A demo library
  url: https://example.org/demo
licenses:
  - name: MIT
    url: https://opensource.org/licenses/MIT
developers:
  - name: Alice
scm:
  url: https://example.org/demo.git
"#;

    struct Fixture {
        _root: tempfile::TempDir,
        config: RunConfig,
        dir: PathBuf,
    }

    fn fixture(properties: &str, poms: &[(&str, &str)]) -> Fixture {
        let root = tempfile::tempdir().unwrap();
        let properties_path = root.path().join("org.example:demo.yml");
        fs::write(&properties_path, properties).unwrap();

        let dir = root.path().join("maven/org/example/demo");
        for (version, content) in poms {
            fs::create_dir_all(dir.join(version)).unwrap();
            fs::write(dir.join(version).join(format!("demo-{version}.pom")), content).unwrap();
        }

        let config = RunConfig {
            working_root: root.path().join("maven"),
            properties: Some(properties_path),
            ..RunConfig::new("org.example", "demo")
        };
        Fixture {
            _root: root,
            config,
            dir,
        }
    }

    #[test]
    fn completes_all_targets_with_backups() {
        let original = "<project><name>kept</name></project>";
        let fixture = fixture(PROPERTIES, &[("1.0", original), ("1.1", original)]);

        let reports = run(&fixture.config).unwrap();
        assert_eq!(reports.len(), 2);

        for version in ["1.0", "1.1"] {
            let pom = fixture.dir.join(version).join(format!("demo-{version}.pom"));
            assert_eq!(fs::read_to_string(backup_path(&pom)).unwrap(), original);
            let completed = fs::read_to_string(&pom).unwrap();
            assert!(completed.contains("<name>kept</name>"));
            assert!(completed.contains("<description>A demo library</description>"));
        }
    }

    #[test]
    fn explicit_version_touches_only_that_pom() {
        let original = "<project/>";
        let fixture = fixture(PROPERTIES, &[("1.0", original), ("1.1", original)]);
        let config = RunConfig {
            version: Some("1.1".to_string()),
            ..fixture.config.clone()
        };

        let reports = run(&config).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(
            fs::read_to_string(fixture.dir.join("1.0/demo-1.0.pom")).unwrap(),
            original
        );
        assert!(!backup_path(&fixture.dir.join("1.0/demo-1.0.pom")).exists());
    }

    #[test]
    fn first_failure_stops_the_batch() {
        let fixture = fixture(
            PROPERTIES,
            &[("1.0", "<settings/>"), ("1.1", "<project/>")],
        );

        let err = run(&fixture.config).unwrap_err();
        assert!(err.to_string().contains("demo-1.0.pom"));
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::NotAPom(_))));

        let second = fixture.dir.join("1.1/demo-1.1.pom");
        assert_eq!(fs::read_to_string(&second).unwrap(), "<project/>");
        assert!(!backup_path(&second).exists());
        // the failing file keeps its content and its backup
        let first = fixture.dir.join("1.0/demo-1.0.pom");
        assert_eq!(fs::read_to_string(&first).unwrap(), "<settings/>");
        assert!(backup_path(&first).exists());
    }

    #[test]
    fn complete_pom_is_reported_unchanged() {
        let complete = "<project><name>a</name><description>b</description><url>c</url>\
                        <licenses/><developers/><scm/></project>";
        let fixture = fixture(PROPERTIES, &[("1.0", complete), ("1.1", "<project/>")]);

        let reports = run(&fixture.config).unwrap();
        assert!(reports[0].is_unchanged());
        assert!(!reports[1].is_unchanged());
    }

    #[test]
    fn incomplete_properties_surface_as_configuration_error() {
        let properties = PROPERTIES.replace("  url: https://example.org/demo\n", "");
        let fixture = fixture(&properties, &[("1.0", "<project><name>kept</name></project>")]);

        let err = run(&fixture.config).unwrap_err();
        let cause = err.downcast_ref::<Error>().unwrap();
        assert!(cause.is_configuration());
        assert_eq!(cause.field_path(), Some("project.url"));
    }

    #[test]
    fn missing_properties_file_fails_before_processing() {
        let fixture = fixture(PROPERTIES, &[("1.0", "<project/>")]);
        let config = RunConfig {
            properties: Some(fixture.dir.join("absent.yml")),
            ..fixture.config.clone()
        };

        let err = run(&config).unwrap_err();
        assert!(matches!(err.downcast_ref::<Error>(), Some(Error::NotFound(_))));
        assert!(!backup_path(&fixture.dir.join("1.0/demo-1.0.pom")).exists());
    }
}
