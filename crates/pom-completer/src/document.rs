//! Document and file level completion

use std::fs;
use std::path::Path;

use pom_tree::MutableXmlTree;
use tracing::info;

use crate::completer::PomCompleter;
use crate::error::{Error, Result};
use crate::properties::Properties;
use crate::report::CompletionReport;

/// A completed POM ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedPom {
    pub xml: String,
    pub report: CompletionReport,
}

/// Complete a POM given as text.
///
/// Insignificant whitespace is dropped before and after completion and the
/// result is re-indented, so completing the output again yields identical
/// text. An XML declaration in the input is kept as the first line.
pub fn complete_document<T: MutableXmlTree>(
    tree: &mut T,
    xml: &str,
    properties: &Properties,
) -> Result<CompletedPom> {
    let doc = tree.parse_xml(xml)?;
    let document_node = tree.document_node(&doc);
    tree.strip_insignificant_whitespace(&document_node)?;

    let project = tree.document_element(&doc)?;
    match tree.node_local_name(&project) {
        Some(name) if name == "project" => {}
        other => return Err(Error::NotAPom(other.unwrap_or_default())),
    }

    let report = PomCompleter::new(properties).complete(tree, &project)?;
    // blank text next to appended children is now element-only content
    tree.strip_insignificant_whitespace(&document_node)?;
    let body = tree.serialize_document_pretty(&doc)?;

    let mut completed = String::with_capacity(body.len() + 64);
    if let Some(declaration) = xml_declaration(xml) {
        completed.push_str(declaration);
        completed.push('\n');
    }
    completed.push_str(body.trim());
    completed.push('\n');

    Ok(CompletedPom {
        xml: completed,
        report,
    })
}

/// Complete a POM file in place.
///
/// The file is only rewritten once the whole completion has succeeded.
pub fn complete_file<T>(path: &Path, properties: &Properties) -> Result<CompletionReport>
where
    T: MutableXmlTree + Default,
{
    if !path.is_file() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    let original = fs::read_to_string(path)?;

    let mut tree = T::default();
    let CompletedPom { xml, mut report } = complete_document(&mut tree, &original, properties)?;
    fs::write(path, xml)?;

    info!(path = %path.display(), added = ?report.added, "completed POM");
    report.path = Some(path.to_path_buf());
    Ok(report)
}

fn xml_declaration(xml: &str) -> Option<&str> {
    let xml = xml.trim_start_matches('\u{feff}').trim_start();
    let rest = xml.strip_prefix("<?xml")?;
    if !rest.starts_with(|c: char| c.is_ascii_whitespace()) {
        return None;
    }
    let end = xml.find("?>")?;
    Some(&xml[..end + 2])
}
