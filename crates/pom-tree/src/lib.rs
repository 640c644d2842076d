//! Mutable XML tree abstraction for the POM completer.
//!
//! This crate defines the traits a tree backend must implement so the
//! completion algorithm can inspect and extend a parsed POM without
//! depending on a particular XML library.

pub mod error;
pub mod tree;

pub use error::{Error, Result};
pub use tree::{MutableXmlTree, NodeType, XmlTree};
