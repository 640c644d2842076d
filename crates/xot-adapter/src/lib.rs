//! xot backend for the POM completer
//!
//! This adapter wraps a [`xot::Xot`] arena to implement the
//! pom-tree interfaces.

pub mod tree;

// Re-export main types
pub use tree::XotTree;

// Re-export key types for convenience
pub use xot::Node;
