//! Resource resolution and caching
//!
//! A resource name doubles as a filesystem path: a loose file with that
//! path overrides the table compiled into the binary, unless the loader is
//! switched to embedded-only mode.

pub mod embedded;
mod loader;

pub use loader::ResourceLoader;

/// Logical name of the function table resource.
pub const FUNCTIONS_RESOURCE: &str = "Functions.xml";

/// Logical name of the file-type table resource.
pub const FILE_DATA_RESOURCE: &str = "Data.xml";

/// Logical name of the character table resource.
pub const CHAR_TABLE_RESOURCE: &str = "CharTable.xml";
