//! Error types for `TabRes`

use thiserror::Error;

/// The error type for `TabRes` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== Resource Lookup Errors ====================
    /// Neither a file nor an embedded resource matches the requested name.
    #[error("resource not found: {0}")]
    ResourceNotFound(String),

    // ==================== XML Parsing Errors ====================
    /// XML parsing error.
    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// XML attribute error.
    #[error("XML attribute error: {0}")]
    XmlAttr(String),

    /// The document ended while an element was still open.
    #[error("unexpected end of file: <{0}> is not closed")]
    UnexpectedEof(String),

    /// The document contains no root element.
    #[error("document has no root element")]
    MissingRoot,

    /// The document contains more than one root element.
    #[error("document has multiple root elements")]
    MultipleRoots,
}

// Add conversion from quick_xml::events::attributes::AttrError
impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::XmlAttr(err.to_string())
    }
}

/// A specialized Result type for `TabRes` operations.
pub type Result<T> = std::result::Result<T, Error>;
