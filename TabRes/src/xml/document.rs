//! XML document structures

use serde::{Deserialize, Serialize};

/// A parsed XML document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlDocument {
    /// The root element.
    pub root: XmlElement,
}

/// An element in an XML document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlElement {
    /// Element name.
    pub name: String,
    /// Attributes in document order.
    pub attributes: Vec<XmlAttribute>,
    /// Text content, if any.
    pub text: Option<String>,
    /// Child elements in document order.
    pub children: Vec<XmlElement>,
}

/// An attribute on an XML element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XmlAttribute {
    /// Attribute name.
    pub name: String,
    /// Attribute value, entity-unescaped.
    pub value: String,
}

impl XmlElement {
    /// Creates a new element with the given name.
    #[must_use]
    pub fn new(name: String) -> Self {
        XmlElement {
            name,
            attributes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    /// Look up an attribute value by name.
    #[must_use]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// The first child element with the given name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&XmlElement> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All child elements with the given name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a XmlElement> {
        self.children.iter().filter(move |c| c.name == name)
    }
}

impl XmlAttribute {
    /// Creates a new attribute with the given name and value.
    #[must_use]
    pub fn new(name: String, value: String) -> Self {
        XmlAttribute { name, value }
    }
}
