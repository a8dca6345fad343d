//! Owned XML document trees
//!
//! The documents returned here are opaque to table semantics (function
//! arities, file types, character mappings); consumers interpret them.

mod document;
mod reader;

pub use document::{XmlAttribute, XmlDocument, XmlElement};
pub use reader::{parse_document, read_document};
