//! XML file reading and parsing

use std::fs;
use std::path::Path;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use super::document::{XmlAttribute, XmlDocument, XmlElement};
use crate::error::{Error, Result};

/// Read an XML document from disk
///
/// # Errors
/// Returns an error if the file cannot be read or has invalid XML.
pub fn read_document<P: AsRef<Path>>(path: P) -> Result<XmlDocument> {
    let content = fs::read_to_string(path)?;
    parse_document(&content)
}

/// Parse an XML document from a string
///
/// The whole input is consumed before the document is returned: an element
/// left open at end of input, a missing root, or a second root element all
/// fail instead of producing a partial tree.
///
/// # Errors
/// Returns an error if the XML is malformed.
pub fn parse_document(content: &str) -> Result<XmlDocument> {
    let mut reader = Reader::from_str(content);
    reader.trim_text(true);

    let mut buf = Vec::new();
    let mut root: Option<XmlElement> = None;
    let mut stack: Vec<XmlElement> = Vec::new();

    loop {
        match reader.read_event_into(&mut buf) {
            Ok(Event::Start(e)) => {
                stack.push(element_from_start(&e)?);
            }
            Ok(Event::Empty(e)) => {
                let element = element_from_start(&e)?;
                attach_completed(element, &mut stack, &mut root)?;
            }
            Ok(Event::End(_)) => {
                if let Some(completed) = stack.pop() {
                    attach_completed(completed, &mut stack, &mut root)?;
                }
            }
            Ok(Event::Text(t)) => {
                let value = t.unescape()?;
                if let Some(element) = stack.last_mut() {
                    append_text(element, &value);
                }
            }
            Ok(Event::CData(t)) => {
                let bytes = t.into_inner();
                let value = String::from_utf8_lossy(&bytes);
                if let Some(element) = stack.last_mut() {
                    append_text(element, &value);
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(Error::Xml(e)),
            Ok(_) => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.pop() {
        return Err(Error::UnexpectedEof(open.name));
    }

    root.map(|root| XmlDocument { root }).ok_or(Error::MissingRoot)
}

/// Build an element from a start or empty tag, unescaping attribute values
fn element_from_start(e: &BytesStart) -> Result<XmlElement> {
    let mut element = XmlElement::new(String::from_utf8_lossy(e.name().as_ref()).into_owned());

    for attr in e.attributes() {
        let attr = attr?;
        let name = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let value = attr.unescape_value()?.into_owned();
        element.attributes.push(XmlAttribute::new(name, value));
    }

    Ok(element)
}

/// Hand a completed element to its parent, or make it the document root
fn attach_completed(
    element: XmlElement,
    stack: &mut Vec<XmlElement>,
    root: &mut Option<XmlElement>,
) -> Result<()> {
    if let Some(parent) = stack.last_mut() {
        parent.children.push(element);
    } else if root.is_some() {
        return Err(Error::MultipleRoots);
    } else {
        *root = Some(element);
    }
    Ok(())
}

fn append_text(element: &mut XmlElement, value: &str) {
    if value.is_empty() {
        return;
    }
    match &mut element.text {
        Some(text) => text.push_str(value),
        None => element.text = Some(value.to_string()),
    }
}
