//! JSON schema node configuring an `icon-select` control.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::model::DEFAULT_NO_DATA_TIP;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Behavior options recognized by the control.
pub struct IconSelectOptions {
    /// Text shown while no icon is committed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Suppresses opening and clearing.
    pub disabled: bool,
    /// Message key rendered for an empty icon list.
    pub no_data_tip: String,
    /// Shows the clear affix when a value is committed.
    pub clearable: bool,
    /// Commit annotated SVG markup instead of a structured icon reference.
    pub return_svg: bool,
    /// With `return_svg`, drop the `width`/`height` attributes from committed markup.
    pub no_size: bool,
}

impl Default for IconSelectOptions {
    fn default() -> Self {
        Self {
            placeholder: None,
            disabled: false,
            no_data_tip: DEFAULT_NO_DATA_TIP.to_string(),
            clearable: true,
            return_svg: false,
            no_size: false,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while reading a control schema node.
pub enum SchemaError {
    /// The node is not valid for this control.
    #[error("invalid icon-select schema: {0}")]
    Invalid(String),
    /// The node's `type` names another control.
    #[error("schema type `{0}` is not `icon-select`")]
    WrongType(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Schema node for an icon-select form item.
pub struct IconSelectControlSchema {
    /// Control type tag; always `icon-select`.
    #[serde(rename = "type")]
    pub control_type: String,
    /// Form field name the value is bound to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Field label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Behavior options.
    #[serde(flatten)]
    pub options: IconSelectOptions,
}

impl IconSelectControlSchema {
    /// Reads a schema node.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError::Invalid`] for malformed nodes and
    /// [`SchemaError::WrongType`] when `type` is not `icon-select`.
    pub fn from_json(raw: &Value) -> Result<Self, SchemaError> {
        let schema: Self = serde_json::from_value(raw.clone())
            .map_err(|err| SchemaError::Invalid(err.to_string()))?;
        if schema.control_type != crate::register::ICON_SELECT_TYPE {
            return Err(SchemaError::WrongType(schema.control_type));
        }
        Ok(schema)
    }
}
