//! Shared contract types between the form host and registered form controls.
//!
//! A control is a renderer registered under a discriminated type tag (for example
//! `icon-select`). The host instantiates it with [`FormControlProps`] and owns its
//! mount/unmount lifecycle; the control reports edits through a single change callback
//! carrying a [`ControlValue`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod props;
mod registry;
mod value;

pub use props::{FormControlProps, LoadingConfig, Translator, DEFAULT_CLASS_PREFIX};
pub use registry::{ControlRenderer, ControlType, FormControlRegistry, RegistryError};
pub use value::{ControlValue, ControlValueError, IconValue};
