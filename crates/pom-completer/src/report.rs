//! Completion reports

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level POM fields handled by the completer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PomField {
    Name,
    Description,
    Url,
    Licenses,
    Developers,
    Scm,
}

impl PomField {
    /// Schema order in which missing fields are appended
    pub const ORDER: [PomField; 6] = [
        PomField::Name,
        PomField::Description,
        PomField::Url,
        PomField::Licenses,
        PomField::Developers,
        PomField::Scm,
    ];

    /// Element tag name of the field
    pub fn tag(self) -> &'static str {
        match self {
            PomField::Name => "name",
            PomField::Description => "description",
            PomField::Url => "url",
            PomField::Licenses => "licenses",
            PomField::Developers => "developers",
            PomField::Scm => "scm",
        }
    }
}

impl fmt::Display for PomField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// What a completion run added to one POM
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// Top-level fields inserted, in insertion order
    pub added: Vec<PomField>,
}

impl CompletionReport {
    pub fn record(&mut self, field: PomField) {
        self.added.push(field);
    }

    /// True when the POM already had every field
    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_serializes_field_tags() {
        let mut report = CompletionReport::default();
        report.record(PomField::Description);
        report.record(PomField::Scm);

        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(json, r#"{"added":["description","scm"]}"#);
        assert!(!report.is_unchanged());
    }

    #[test]
    fn order_matches_tags() {
        let tags: Vec<_> = PomField::ORDER.iter().map(|f| f.tag()).collect();
        assert_eq!(
            tags,
            ["name", "description", "url", "licenses", "developers", "scm"]
        );
    }
}
