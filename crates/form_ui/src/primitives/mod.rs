//! Shared control, overlay, and data-display primitives.

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

mod controls;
mod data_display;
mod overlays;

pub use controls::{Button, SearchBox};
pub use data_display::{EmptyState, InlineSvg};
pub use overlays::{Modal, ModalBody, ModalFooter, ModalHeader, Spinner};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Standard action button.
    #[default]
    Standard,
    /// Primary emphasized action button.
    Primary,
    /// Borderless affix/toolbar button.
    Quiet,
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Primary => "primary",
            Self::Quiet => "quiet",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Modal width presets.
pub enum ModalSize {
    /// Narrow dialog.
    Sm,
    /// Default dialog.
    #[default]
    Md,
    /// Wide dialog for pickers.
    Lg,
}

impl ModalSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Spinner size presets.
pub enum SpinnerSize {
    /// Inline spinner.
    Sm,
    /// Default spinner.
    #[default]
    Md,
    /// Overlay spinner.
    Lg,
}

impl SpinnerSize {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<String>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Whether a click landed on the backdrop itself rather than inside the dialog.
///
/// Only meaningful for listeners bound directly to the backdrop; delegated listeners
/// report the window as the current target.
pub(crate) fn is_backdrop_hit<T: PartialEq>(target: Option<T>, backdrop: Option<T>) -> bool {
    matches!((target, backdrop), (Some(target), Some(backdrop)) if target == backdrop)
}

pub(crate) fn is_escape(ev: &KeyboardEvent) -> bool {
    ev.key() == "Escape" || ev.key() == "Esc"
}
