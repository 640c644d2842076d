//! Schema-ordered completion driver

use pom_tree::MutableXmlTree;

use crate::error::{Error, Result};
use crate::inserter::{add_child_if_absent, add_optional_text, add_required_text, append_populated};
use crate::properties::{DeveloperProperties, LicenseProperties, Properties, ScmProperties};
use crate::report::{CompletionReport, PomField};

/// Adds the missing top-level POM fields from a property bag.
///
/// Fields are visited in [`PomField::ORDER`]; each absent one is appended
/// to `<project>`, so a POM lacking all of them ends up in schema order.
/// List containers (`licenses`, `developers`) are filled only when they are
/// created by this run.
#[derive(Debug, Clone, Copy)]
pub struct PomCompleter<'a> {
    properties: &'a Properties,
}

impl<'a> PomCompleter<'a> {
    pub fn new(properties: &'a Properties) -> Self {
        Self { properties }
    }

    /// Complete the `<project>` element in place.
    ///
    /// Stops at the first missing required property; elements added before
    /// that point stay in the in-memory tree, so callers must discard it.
    pub fn complete<T: MutableXmlTree>(
        &self,
        tree: &mut T,
        project: &T::Node,
    ) -> Result<CompletionReport> {
        let mut report = CompletionReport::default();
        for field in PomField::ORDER {
            if self.complete_field(tree, project, field)?.is_some() {
                report.record(field);
            }
        }
        Ok(report)
    }

    fn complete_field<T: MutableXmlTree>(
        &self,
        tree: &mut T,
        project: &T::Node,
        field: PomField,
    ) -> Result<Option<T::Node>> {
        let project_properties = &self.properties.project;
        let tag = field.tag();
        match field {
            PomField::Name => add_required_text(
                tree,
                project,
                tag,
                project_properties.name.as_deref(),
                || "project.name".to_string(),
            ),
            PomField::Description => add_required_text(
                tree,
                project,
                tag,
                project_properties.description.as_deref(),
                || "project.description".to_string(),
            ),
            PomField::Url => add_required_text(
                tree,
                project,
                tag,
                project_properties.url.as_deref(),
                || "project.url".to_string(),
            ),
            PomField::Licenses => add_child_if_absent(tree, project, tag, |tree, licenses| {
                let entries = non_empty(self.properties.licenses.as_deref(), tag)?;
                for (index, license) in entries.iter().enumerate() {
                    append_populated(tree, licenses, "license", |tree, node| {
                        populate_license(tree, node, license, index)
                    })?;
                }
                Ok(())
            }),
            PomField::Developers => add_child_if_absent(tree, project, tag, |tree, developers| {
                let entries = non_empty(self.properties.developers.as_deref(), tag)?;
                for (index, developer) in entries.iter().enumerate() {
                    append_populated(tree, developers, "developer", |tree, node| {
                        populate_developer(tree, node, developer, index)
                    })?;
                }
                Ok(())
            }),
            PomField::Scm => add_child_if_absent(tree, project, tag, |tree, scm| {
                let properties = self.properties.scm.as_ref().ok_or_else(|| Error::missing(tag))?;
                if properties.is_empty() {
                    return Err(Error::empty(tag));
                }
                populate_scm(tree, scm, properties)
            }),
        }
    }
}

fn non_empty<'p, E>(entries: Option<&'p [E]>, path: &str) -> Result<&'p [E]> {
    match entries {
        None => Err(Error::missing(path)),
        Some([]) => Err(Error::empty(path)),
        Some(entries) => Ok(entries),
    }
}

fn populate_license<T: MutableXmlTree>(
    tree: &mut T,
    license: &T::Node,
    properties: &LicenseProperties,
    index: usize,
) -> Result<()> {
    add_required_text(tree, license, "name", properties.name.as_deref(), || {
        format!("licenses[{index}].name")
    })?;
    add_required_text(tree, license, "url", properties.url.as_deref(), || {
        format!("licenses[{index}].url")
    })?;
    add_optional_text(tree, license, "distribution", properties.distribution.as_deref())?;
    Ok(())
}

fn populate_developer<T: MutableXmlTree>(
    tree: &mut T,
    developer: &T::Node,
    properties: &DeveloperProperties,
    index: usize,
) -> Result<()> {
    add_required_text(tree, developer, "name", properties.name.as_deref(), || {
        format!("developers[{index}].name")
    })?;
    add_optional_text(tree, developer, "id", properties.id.as_deref())?;
    add_optional_text(tree, developer, "email", properties.email.as_deref())?;
    add_optional_text(tree, developer, "organization", properties.organization.as_deref())?;
    add_optional_text(
        tree,
        developer,
        "organizationUrl",
        properties.organization_url.as_deref(),
    )?;
    Ok(())
}

fn populate_scm<T: MutableXmlTree>(
    tree: &mut T,
    scm: &T::Node,
    properties: &ScmProperties,
) -> Result<()> {
    add_required_text(tree, scm, "url", properties.url.as_deref(), || {
        "scm.url".to_string()
    })?;
    add_optional_text(tree, scm, "connection", properties.connection.as_deref())?;
    add_optional_text(
        tree,
        scm,
        "developerConnection",
        properties.developer_connection.as_deref(),
    )?;
    Ok(())
}
