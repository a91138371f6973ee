//! Catalog entry models shared by registries and controls.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A single icon entry in the library.
pub struct SvgIcon {
    /// Catalog-unique icon id, also used as the sprite `<symbol>` id.
    pub id: String,
    /// Human readable name used for display and search.
    pub name: String,
    /// Full `<svg>` markup for the icon.
    #[serde(default)]
    pub svg: String,
}

impl SvgIcon {
    /// Creates an icon entry.
    pub fn new(id: impl Into<String>, name: impl Into<String>, svg: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            svg: svg.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// A named category of icons.
pub struct IconGroup {
    /// Stable group identifier.
    pub group_id: String,
    /// Display label for the category.
    pub name: String,
    /// Icons in display order.
    #[serde(default)]
    pub children: Vec<SvgIcon>,
}

impl IconGroup {
    /// Creates an icon group.
    pub fn new(
        group_id: impl Into<String>,
        name: impl Into<String>,
        children: Vec<SvgIcon>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            name: name.into(),
            children,
        }
    }
}
