//! Error types for XML tree operations

/// Result type for XML tree operations
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for all XML tree operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// XML parsing failed
    #[error("XML parsing error: {0}")]
    XmlParse(String),

    /// Node access error
    #[error("Node access error: {0}")]
    NodeAccess(String),

    /// Tree mutation failed
    #[error("Tree mutation error: {0}")]
    Mutation(String),

    /// Serialization failed
    #[error("Serialization error: {0}")]
    Serialize(String),
}

impl Error {
    /// Create a new node access error
    pub fn node_access<S: Into<String>>(msg: S) -> Self {
        Error::NodeAccess(msg.into())
    }

    /// Create a new tree mutation error
    pub fn mutation<S: Into<String>>(msg: S) -> Self {
        Error::Mutation(msg.into())
    }

    /// Create a new serialization error
    pub fn serialize<S: Into<String>>(msg: S) -> Self {
        Error::Serialize(msg.into())
    }
}
