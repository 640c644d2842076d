//! pom-completer: fill in missing Maven POM metadata
//!
//! Given a parsed POM and a typed [`Properties`] bag, the completer adds
//! the `name`, `description`, `url`, `licenses`, `developers` and `scm`
//! elements that are absent, in schema order, and never touches elements
//! that already exist. Running it twice produces the same document.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use pom_completer::{complete_file, Properties};
//! use xot_adapter::XotTree;
//!
//! let properties = Properties::from_path("org.example:demo.yml".as_ref())?;
//! let report = complete_file::<XotTree>("demo-1.0.pom".as_ref(), &properties)?;
//! println!("added {:?}", report.added);
//! ```

pub mod completer;
pub mod document;
pub mod error;
pub mod inserter;
pub mod properties;
pub mod report;

// Re-export core types
pub use completer::PomCompleter;
pub use document::{complete_document, complete_file, CompletedPom};
pub use error::{Error, Result};
pub use properties::{
    DeveloperProperties, LicenseProperties, ProjectProperties, Properties, ScmProperties,
};
pub use report::{CompletionReport, PomField};
