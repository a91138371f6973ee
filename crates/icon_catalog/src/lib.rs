//! Icon registry contracts consumed by form controls that browse an icon library.
//!
//! The registry is read-mostly: controls list its groups and may ask it to refresh
//! itself. Concrete adapters live here too (`MemoryIconCatalog` for hosts that load
//! icons up front, `NoopIconCatalog` for hosts without an icon library).

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod document;
pub mod service;
pub mod types;

pub use document::{CatalogError, IconCatalogDocument};
pub use service::{CatalogFuture, IconCatalog, MemoryIconCatalog, NoopIconCatalog};
pub use types::{IconGroup, SvgIcon};
