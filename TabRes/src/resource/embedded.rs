//! Embedded lookup tables
//!
//! Compile-time copies of the three reference tables, bundled from
//! `data/`. They are the fallback when no loose file overrides them.

use super::{CHAR_TABLE_RESOURCE, FILE_DATA_RESOURCE, FUNCTIONS_RESOURCE};

/// Embedded function table XML
const FUNCTIONS_XML: &str = include_str!("../../data/Functions.xml");

/// Embedded file-type table XML
const FILE_DATA_XML: &str = include_str!("../../data/Data.xml");

/// Embedded character table XML
const CHAR_TABLE_XML: &str = include_str!("../../data/CharTable.xml");

/// Look up an embedded resource by logical name.
#[must_use]
pub fn embedded_resource(name: &str) -> Option<&'static str> {
    match name {
        FUNCTIONS_RESOURCE => Some(FUNCTIONS_XML),
        FILE_DATA_RESOURCE => Some(FILE_DATA_XML),
        CHAR_TABLE_RESOURCE => Some(CHAR_TABLE_XML),
        _ => None,
    }
}

/// Logical names of all embedded resources.
#[must_use]
pub fn embedded_names() -> &'static [&'static str] {
    &[FUNCTIONS_RESOURCE, FILE_DATA_RESOURCE, CHAR_TABLE_RESOURCE]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_document;

    #[test]
    fn embedded_tables_parse() {
        for name in embedded_names() {
            let content = embedded_resource(name).unwrap();
            let doc = parse_document(content).unwrap();
            assert!(!doc.root.children.is_empty(), "{name} has no entries");
        }
    }

    #[test]
    fn unknown_name_is_absent() {
        assert!(embedded_resource("Tokens.xml").is_none());
        assert!(embedded_resource("").is_none());
    }
}
