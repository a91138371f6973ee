//! Committed form values exchanged through the change callback.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Structured icon reference committed by icon controls.
pub struct IconValue {
    /// Committed icon id (icon controls prefix it with `svg-`).
    pub id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Icon markup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Value held by the form model for a single control.
///
/// Serializes as an untagged JSON value: `""` for [`ControlValue::Empty`], a string for
/// [`ControlValue::Text`] and an object for [`ControlValue::Icon`].
pub enum ControlValue {
    /// No value.
    #[default]
    Empty,
    /// Plain string value (for icon controls: SVG markup).
    Text(String),
    /// Structured icon reference.
    Icon(IconValue),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised when reading a committed value from JSON.
pub enum ControlValueError {
    /// The JSON kind cannot represent a control value.
    #[error("unsupported control value kind `{0}`")]
    Unsupported(&'static str),
    /// The object is not a valid icon reference.
    #[error("invalid icon value: {0}")]
    InvalidIcon(String),
}

impl ControlValue {
    /// Wraps a string, mapping the empty string to [`ControlValue::Empty`].
    pub fn text(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        if raw.is_empty() {
            Self::Empty
        } else {
            Self::Text(raw)
        }
    }

    /// Returns `true` for values the form treats as unset.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(raw) => raw.is_empty(),
            Self::Icon(_) => false,
        }
    }

    /// Reads a value from its JSON form. `null` reads as empty.
    ///
    /// # Errors
    ///
    /// Returns [`ControlValueError`] for numbers, arrays, booleans, and objects that do
    /// not describe an icon.
    pub fn from_json(raw: &Value) -> Result<Self, ControlValueError> {
        match raw {
            Value::Null => Ok(Self::Empty),
            Value::String(text) => Ok(Self::text(text.clone())),
            Value::Object(_) => serde_json::from_value::<IconValue>(raw.clone())
                .map(Self::Icon)
                .map_err(|err| ControlValueError::InvalidIcon(err.to_string())),
            Value::Bool(_) => Err(ControlValueError::Unsupported("bool")),
            Value::Number(_) => Err(ControlValueError::Unsupported("number")),
            Value::Array(_) => Err(ControlValueError::Unsupported("array")),
        }
    }

    /// Returns the JSON form of the value.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Empty => Value::String(String::new()),
            Self::Text(text) => Value::String(text.clone()),
            Self::Icon(icon) => {
                let mut object = Map::new();
                object.insert("id".to_string(), Value::String(icon.id.clone()));
                if let Some(name) = &icon.name {
                    object.insert("name".to_string(), Value::String(name.clone()));
                }
                if let Some(svg) = &icon.svg {
                    object.insert("svg".to_string(), Value::String(svg.clone()));
                }
                Value::Object(object)
            }
        }
    }
}

impl From<IconValue> for ControlValue {
    fn from(value: IconValue) -> Self {
        Self::Icon(value)
    }
}

impl Serialize for ControlValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ControlValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        Self::from_json(&raw).map_err(de::Error::custom)
    }
}
