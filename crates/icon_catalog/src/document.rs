//! JSON catalog documents used to seed registries.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{service::MemoryIconCatalog, types::IconGroup};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while loading a catalog document.
pub enum CatalogError {
    /// The document is not valid catalog JSON.
    #[error("invalid icon catalog json: {0}")]
    Parse(String),
    /// Two groups share the same id.
    #[error("duplicate icon group `{0}`")]
    DuplicateGroup(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Serialized icon library: `{"groups": [{"groupId", "name", "children": [...]}]}`.
pub struct IconCatalogDocument {
    /// Icon groups in display order.
    #[serde(default)]
    pub groups: Vec<IconGroup>,
}

impl IconCatalogDocument {
    /// Parses and validates a catalog document.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed JSON and
    /// [`CatalogError::DuplicateGroup`] when a group id repeats.
    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let document: Self =
            serde_json::from_str(raw).map_err(|err| CatalogError::Parse(err.to_string()))?;
        let mut seen = HashSet::new();
        for group in &document.groups {
            if !seen.insert(group.group_id.as_str()) {
                return Err(CatalogError::DuplicateGroup(group.group_id.clone()));
            }
        }
        Ok(document)
    }

    /// Builds an in-memory registry from the document.
    pub fn into_catalog(self) -> MemoryIconCatalog {
        MemoryIconCatalog::new(self.groups)
    }
}
