//! Props handed by the form host to every control it mounts.

use std::{collections::HashMap, fmt, rc::Rc};

use leptos::{Callable, Callback, MaybeSignal, Signal};
use serde::{Deserialize, Serialize};

use crate::value::ControlValue;

/// Class prefix applied to control class names when the host does not override it.
pub const DEFAULT_CLASS_PREFIX: &str = "cxd-";

#[derive(Clone)]
/// Host translation function mapping message keys to display text.
pub struct Translator(Rc<dyn Fn(&str) -> String>);

impl Translator {
    /// Wraps a translation function.
    pub fn new(translate: impl Fn(&str) -> String + 'static) -> Self {
        Self(Rc::new(translate))
    }

    /// Translator that returns every key unchanged.
    pub fn identity() -> Self {
        Self::new(|key| key.to_string())
    }

    /// Translator backed by a lookup table; unknown keys fall back to the key itself.
    pub fn from_map(table: HashMap<String, String>) -> Self {
        Self::new(move |key| table.get(key).cloned().unwrap_or_else(|| key.to_string()))
    }

    /// Translates `key`.
    pub fn translate(&self, key: &str) -> String {
        (self.0)(key)
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::identity()
    }
}

impl fmt::Debug for Translator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Translator(..)")
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Host loading-indicator configuration forwarded to spinners.
pub struct LoadingConfig {
    /// DOM id of the element spinners should attach to, when not inline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,
    /// Host-wide override for spinner visibility.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show: Option<bool>,
}

impl LoadingConfig {
    /// Resolves spinner visibility for a control-local loading flag.
    pub fn resolve_show(&self, loading: bool) -> bool {
        loading && self.show.unwrap_or(true)
    }
}

#[derive(Clone)]
/// Props contract for a mounted form control.
pub struct FormControlProps {
    /// Current committed value.
    pub value: Signal<ControlValue>,
    /// Change callback; controls call it once per committed edit.
    pub on_change: Callback<ControlValue>,
    /// Whether the control is disabled.
    pub disabled: MaybeSignal<bool>,
    /// Styling-class prefix (for example `cxd-`).
    pub class_prefix: String,
    /// Extra class applied to the control root.
    pub class_name: Option<String>,
    /// Host translation function.
    pub translate: Translator,
    /// Host loading-indicator configuration.
    pub loading_config: LoadingConfig,
}

impl FormControlProps {
    /// Creates props with host defaults for everything but the value binding.
    pub fn new(value: Signal<ControlValue>, on_change: Callback<ControlValue>) -> Self {
        Self {
            value,
            on_change,
            disabled: MaybeSignal::Static(false),
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            class_name: None,
            translate: Translator::identity(),
            loading_config: LoadingConfig::default(),
        }
    }

    /// Sets the disabled binding.
    pub fn with_disabled(mut self, disabled: impl Into<MaybeSignal<bool>>) -> Self {
        self.disabled = disabled.into();
        self
    }

    /// Sets the class prefix.
    pub fn with_class_prefix(mut self, class_prefix: impl Into<String>) -> Self {
        self.class_prefix = class_prefix.into();
        self
    }

    /// Sets the extra root class.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Sets the translation function.
    pub fn with_translator(mut self, translate: Translator) -> Self {
        self.translate = translate;
        self
    }

    /// Sets the loading-indicator configuration.
    pub fn with_loading_config(mut self, loading_config: LoadingConfig) -> Self {
        self.loading_config = loading_config;
        self
    }

    /// Returns `suffix` prefixed with the host class prefix.
    pub fn class(&self, suffix: &str) -> String {
        format!("{}{suffix}", self.class_prefix)
    }

    /// Sends a committed value to the host.
    pub fn emit(&self, value: ControlValue) {
        self.on_change.call(value);
    }

    /// Translates a message key through the host translator.
    pub fn tr(&self, key: &str) -> String {
        self.translate.translate(key)
    }
}

impl fmt::Debug for FormControlProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormControlProps")
            .field("class_prefix", &self.class_prefix)
            .field("class_name", &self.class_name)
            .field("loading_config", &self.loading_config)
            .finish_non_exhaustive()
    }
}
