//! Catalog management.
//!
//! A catalog is either the built-in demo set or built from a YAML
//! catalog file:
//!
//! ```text
//! <project>/
//! ├── .mediacat/
//! │   └── config.yaml      # optional, may point at a catalog file
//! └── catalog.yaml         # items to construct, in display order
//! ```

pub mod catalog;
pub mod entry;

pub use catalog::Catalog;
pub use entry::{CatalogEntry, CatalogFile};
