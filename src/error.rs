//! Errors raised while building paths or loading record descriptions.

use thiserror::Error;

/// An error produced while deriving a child path from a record schema.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FieldPathError {
    /// The caller referenced a field position the record does not declare.
    #[error("record '{record}' has {count} field(s); index {index} is out of range")]
    InvalidFieldIndex {
        /// Name of the record that was indexed.
        record: String,
        /// The offending position.
        index: usize,
        /// Number of fields the record declares.
        count: usize,
    },
}

/// An error produced while parsing a JSON record description.
#[derive(Debug, Error)]
#[error("invalid record description at '{path}': {source}")]
pub struct SchemaError {
    path: String,
    #[source]
    source: serde_json::Error,
}

impl SchemaError {
    pub(crate) fn new(path: String, source: serde_json::Error) -> Self {
        SchemaError { path, source }
    }

    /// The location inside the description where parsing failed, e.g.
    /// `fields[1].ty`.
    pub fn path(&self) -> &str {
        &self.path
    }
}
