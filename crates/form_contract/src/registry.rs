//! Form-control registry keyed by schema type tags.

use std::{cell::RefCell, collections::BTreeMap, fmt, rc::Rc};

use leptos::{logging, View};
use serde_json::Value;
use thiserror::Error;

use crate::props::FormControlProps;

/// Renderer invoked by the host for schema nodes whose `type` matches the registration.
///
/// Receives the host props and the raw schema node; returns an error message when the
/// schema cannot be read.
pub type ControlRenderer = Rc<dyn Fn(FormControlProps, &Value) -> Result<View, String>>;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Discriminated type tag under which a control is registered (for example `icon-select`).
pub struct ControlType(String);

impl ControlType {
    /// Returns a type tag when `raw` is lowercase kebab-case.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidType`] for empty tags, uppercase letters, or
    /// leading/trailing/doubled dashes.
    pub fn new(raw: impl Into<String>) -> Result<Self, RegistryError> {
        let raw = raw.into();
        if is_valid_control_type(&raw) {
            Ok(Self(raw))
        } else {
            Err(RegistryError::InvalidType(raw))
        }
    }

    /// Returns the string form of the tag.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ControlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_valid_control_type(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 64 {
        return false;
    }
    raw.split('-').all(|part| {
        !part.is_empty()
            && part
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
    })
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Registry failures.
pub enum RegistryError {
    /// The type tag is not lowercase kebab-case.
    #[error("invalid control type `{0}`")]
    InvalidType(String),
    /// A renderer is already registered under the tag.
    #[error("control type `{0}` is already registered")]
    Duplicate(String),
    /// The schema node has no string `type` field.
    #[error("schema node has no `type`")]
    MissingType,
    /// No renderer is registered under the tag.
    #[error("no control registered for `{0}`")]
    UnknownType(String),
    /// The renderer rejected the schema node.
    #[error("control `{control_type}` failed to render: {message}")]
    Render {
        /// Tag of the failing control.
        control_type: String,
        /// Renderer error message.
        message: String,
    },
}

#[derive(Clone, Default)]
/// Registry of form controls; clones share the same table.
pub struct FormControlRegistry {
    renderers: Rc<RefCell<BTreeMap<ControlType, ControlRenderer>>>,
}

impl fmt::Debug for FormControlRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormControlRegistry")
            .field("types", &self.types())
            .finish()
    }
}

impl FormControlRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `renderer` under `control_type`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] when the tag is taken; the existing renderer
    /// is kept.
    pub fn register(
        &self,
        control_type: ControlType,
        renderer: ControlRenderer,
    ) -> Result<(), RegistryError> {
        let mut renderers = self.renderers.borrow_mut();
        if renderers.contains_key(&control_type) {
            logging::warn!("form control `{control_type}` registered twice; keeping the first");
            return Err(RegistryError::Duplicate(control_type.0));
        }
        renderers.insert(control_type, renderer);
        Ok(())
    }

    /// Whether a renderer exists for `control_type`.
    pub fn contains(&self, control_type: &str) -> bool {
        self.renderers
            .borrow()
            .keys()
            .any(|key| key.as_str() == control_type)
    }

    /// Registered tags in sorted order.
    pub fn types(&self) -> Vec<String> {
        self.renderers
            .borrow()
            .keys()
            .map(|key| key.as_str().to_string())
            .collect()
    }

    /// Renders a schema node through the renderer registered for its `type`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::MissingType`], [`RegistryError::UnknownType`], or
    /// [`RegistryError::Render`] when the node cannot be rendered.
    pub fn render(&self, schema: &Value, props: FormControlProps) -> Result<View, RegistryError> {
        let control_type = schema
            .get("type")
            .and_then(Value::as_str)
            .ok_or(RegistryError::MissingType)?;
        let renderer = self
            .renderers
            .borrow()
            .iter()
            .find(|(key, _)| key.as_str() == control_type)
            .map(|(_, renderer)| renderer.clone())
            .ok_or_else(|| RegistryError::UnknownType(control_type.to_string()))?;
        renderer(props, schema).map_err(|message| RegistryError::Render {
            control_type: control_type.to_string(),
            message,
        })
    }
}

#[cfg(test)]
mod tests {
    use leptos::{Callback, IntoView, Signal};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;
    use crate::value::ControlValue;

    fn props() -> FormControlProps {
        FormControlProps::new(
            Signal::derive(|| ControlValue::Empty),
            Callback::new(|_: ControlValue| {}),
        )
    }

    fn unit_renderer() -> ControlRenderer {
        Rc::new(|_: FormControlProps, _: &Value| Ok(().into_view()))
    }

    #[test]
    fn control_type_accepts_kebab_case_only() {
        assert!(ControlType::new("icon-select").is_ok());
        assert!(ControlType::new("input-text2").is_ok());
        for bad in ["", "Icon-select", "icon--select", "-icon", "icon-", "icon_select"] {
            assert_eq!(
                ControlType::new(bad),
                Err(RegistryError::InvalidType(bad.to_string()))
            );
        }
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let _ = leptos::create_runtime();
        let registry = FormControlRegistry::new();
        let tag = ControlType::new("icon-select").expect("tag");
        registry
            .register(tag.clone(), unit_renderer())
            .expect("first registration");
        assert_eq!(
            registry.register(tag, unit_renderer()),
            Err(RegistryError::Duplicate("icon-select".to_string()))
        );
        assert_eq!(registry.types(), vec!["icon-select".to_string()]);
    }

    #[test]
    fn render_dispatches_on_schema_type() {
        let _ = leptos::create_runtime();
        let registry = FormControlRegistry::new();
        registry
            .register(ControlType::new("icon-select").expect("tag"), unit_renderer())
            .expect("register");
        registry
            .register(
                ControlType::new("broken").expect("tag"),
                Rc::new(|_: FormControlProps, _: &Value| Err("bad schema".to_string())),
            )
            .expect("register");

        assert!(registry
            .render(&json!({"type": "icon-select"}), props())
            .is_ok());
        assert!(matches!(
            registry.render(&json!({"name": "icon"}), props()),
            Err(RegistryError::MissingType)
        ));
        assert!(matches!(
            registry.render(&json!({"type": "color-picker"}), props()),
            Err(RegistryError::UnknownType(tag)) if tag == "color-picker"
        ));
        assert!(matches!(
            registry.render(&json!({"type": "broken"}), props()),
            Err(RegistryError::Render { message, .. }) if message == "bad schema"
        ));
    }
}
