//! Resource loading with disk overrides and per-table caching

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use crate::error::{Error, Result};
use crate::xml::{XmlDocument, parse_document, read_document};

use super::embedded::embedded_resource;
use super::{CHAR_TABLE_RESOURCE, FILE_DATA_RESOURCE, FUNCTIONS_RESOURCE};

/// Where a resource was resolved from.
#[derive(Debug)]
enum ResourceSource {
    /// A loose file on disk overriding the embedded copy.
    Disk(PathBuf),
    /// The copy compiled into the binary.
    Embedded(&'static str),
}

/// Loads named XML tables, preferring loose files on disk over the copies
/// embedded in the binary.
///
/// The three well-known tables ([`functions`], [`file_data`],
/// [`char_table`]) are parsed once per loader and shared by every
/// subsequent caller. A populated slot is never reloaded, even if the file
/// on disk changes afterwards.
///
/// [`functions`]: ResourceLoader::functions
/// [`file_data`]: ResourceLoader::file_data
/// [`char_table`]: ResourceLoader::char_table
#[derive(Debug)]
pub struct ResourceLoader {
    /// Skip disk lookups entirely and serve embedded tables only.
    always_use_embedded: bool,
    functions: OnceLock<XmlDocument>,
    file_data: OnceLock<XmlDocument>,
    char_table: OnceLock<XmlDocument>,
}

impl ResourceLoader {
    /// Create a loader that prefers loose files on disk.
    #[must_use]
    pub fn new() -> Self {
        Self {
            always_use_embedded: false,
            functions: OnceLock::new(),
            file_data: OnceLock::new(),
            char_table: OnceLock::new(),
        }
    }

    /// Create a loader that ignores loose files and always serves the
    /// embedded tables.
    #[must_use]
    pub fn embedded_only() -> Self {
        Self {
            always_use_embedded: true,
            functions: OnceLock::new(),
            file_data: OnceLock::new(),
            char_table: OnceLock::new(),
        }
    }

    /// Whether disk lookups are disabled.
    #[must_use]
    pub fn always_use_embedded(&self) -> bool {
        self.always_use_embedded
    }

    /// Enable or disable the disk-override lookup.
    ///
    /// Tables that are already cached keep the content they were first
    /// loaded with; caches are never invalidated.
    pub fn set_always_use_embedded(&mut self, always_use_embedded: bool) {
        self.always_use_embedded = always_use_embedded;
    }

    /// Resolve and parse a resource by name.
    ///
    /// The name doubles as a filesystem path: if such a file exists and
    /// disk lookups are enabled, its contents win over the embedded copy.
    /// The result is always a fully parsed document, never partial data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ResourceNotFound`] if neither a file nor an
    /// embedded resource matches `name`, [`Error::Io`] if a matching file
    /// exists but cannot be read, and an XML error if the bytes are not
    /// well-formed XML.
    pub fn get_resource(&self, name: &str) -> Result<XmlDocument> {
        match self.resolve(name)? {
            ResourceSource::Disk(path) => {
                tracing::debug!("loading resource '{}' from disk override: {:?}", name, path);
                read_document(path)
            }
            ResourceSource::Embedded(content) => {
                tracing::debug!("loading resource '{}' from embedded bundle", name);
                parse_document(content)
            }
        }
    }

    /// The function table (`Functions.xml`), loaded on first access.
    pub fn functions(&self) -> Result<&XmlDocument> {
        self.cached(&self.functions, FUNCTIONS_RESOURCE)
    }

    /// The file-type table (`Data.xml`), loaded on first access.
    pub fn file_data(&self) -> Result<&XmlDocument> {
        self.cached(&self.file_data, FILE_DATA_RESOURCE)
    }

    /// The character table (`CharTable.xml`), loaded on first access.
    pub fn char_table(&self) -> Result<&XmlDocument> {
        self.cached(&self.char_table, CHAR_TABLE_RESOURCE)
    }

    /// Resolution strategies in override order: loose file first (unless
    /// disabled), then the embedded bundle.
    fn resolve(&self, name: &str) -> Result<ResourceSource> {
        if !self.always_use_embedded && Path::new(name).is_file() {
            return Ok(ResourceSource::Disk(PathBuf::from(name)));
        }

        embedded_resource(name)
            .map(ResourceSource::Embedded)
            .ok_or_else(|| Error::ResourceNotFound(name.to_string()))
    }

    /// Load a well-known table into its slot on first access.
    ///
    /// Concurrent first calls may parse redundantly, but only one document
    /// is ever published per slot and every caller gets that instance. A
    /// failed load leaves the slot empty, so the next call retries.
    fn cached<'a>(&self, slot: &'a OnceLock<XmlDocument>, name: &str) -> Result<&'a XmlDocument> {
        if let Some(doc) = slot.get() {
            return Ok(doc);
        }

        let doc = self.get_resource(name)?;
        Ok(slot.get_or_init(|| doc))
    }
}

impl Default for ResourceLoader {
    fn default() -> Self {
        Self::new()
    }
}
