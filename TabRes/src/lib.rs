//! # TabRes
//!
//! Lookup-table resources for a retro-BASIC conversion toolchain.
//!
//! Three reference tables ship as XML embedded in the binary and can be
//! overridden by loose files on disk:
//!
//! - **`Functions.xml`** - BASIC function names and parameter counts
//! - **`Data.xml`** - file name patterns and their types
//! - **`CharTable.xml`** - named charsets mapping Unicode characters to byte codes
//!
//! The tables are returned as raw parsed XML documents; interpreting them
//! (tokenizing, charset translation) is the consumer's job.
//!
//! ## Quick Start
//!
//! ```
//! use tabres::resource::ResourceLoader;
//!
//! let loader = ResourceLoader::new();
//!
//! // Cached after the first access
//! let functions = loader.functions()?;
//! for function in &functions.root.children {
//!     println!("{:?} takes {:?} parameters",
//!         function.attr("name"), function.attr("parameters"));
//! }
//!
//! // Arbitrary lookups resolve disk paths first, then the embedded bundle
//! let files = loader.get_resource("Data.xml")?;
//! assert_eq!(files.root.name, "files");
//! # Ok::<(), tabres::Error>(())
//! ```
//!
//! ## Disk Overrides
//!
//! A resource name doubles as a filesystem path. If a file with that path
//! exists, its contents win over the embedded copy; a loader created with
//! [`ResourceLoader::embedded_only`] skips the disk lookup entirely.
//!
//! ## Using the Prelude
//!
//! ```
//! use tabres::prelude::*;
//!
//! let loader = ResourceLoader::embedded_only();
//! assert_eq!(loader.char_table()?.root.name, "chartable");
//! # Ok::<(), Error>(())
//! ```

pub mod error;
pub mod resource;
pub mod xml;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::resource::{
        CHAR_TABLE_RESOURCE, FILE_DATA_RESOURCE, FUNCTIONS_RESOURCE, ResourceLoader,
    };
    pub use crate::xml::{XmlAttribute, XmlDocument, XmlElement, parse_document, read_document};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
