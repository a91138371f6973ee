//! Transient UI state owned by a mounted icon-select control.

use icon_catalog::SvgIcon;

/// Prefix marking an icon id as committed (as opposed to a raw catalog id).
pub const COMMITTED_ID_PREFIX: &str = "svg-";
/// Quiescence window applied to search input before the list is re-filtered.
pub const SEARCH_DEBOUNCE_MS: u64 = 300;
/// Default message key rendered for an empty icon list.
pub const DEFAULT_NO_DATA_TIP: &str = "placeholder.noData";
/// Message key for the modal title.
pub const MODAL_TITLE_KEY: &str = "IconSelect.choice";
/// Message key for the cancel action.
pub const CANCEL_KEY: &str = "cancel";
/// Message key for the confirm action.
pub const CONFIRM_KEY: &str = "confirm";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Icon identity used for rendering and for in-modal selection.
pub struct IconChecked {
    /// Icon id; raw catalog id inside the modal, possibly `svg-` prefixed when decoded
    /// from a committed structured value.
    pub id: String,
    /// Display name.
    pub name: Option<String>,
    /// Icon markup.
    pub svg: Option<String>,
}

impl IconChecked {
    /// Name shown next to the preview; empty for unnamed icons.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Markup to render, or an empty string.
    pub fn markup(&self) -> &str {
        self.svg.as_deref().unwrap_or_default()
    }
}

impl From<&SvgIcon> for IconChecked {
    fn from(icon: &SvgIcon) -> Self {
        Self {
            id: icon.id.clone(),
            name: Some(icon.name.clone()),
            svg: Some(icon.svg.clone()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Presentation state of one control instance.
pub struct IconSelectState {
    /// Whether the picker modal is visible.
    pub show_modal: bool,
    /// Provisional selection inside the modal.
    pub tmp_checked: Option<IconChecked>,
    /// Debounced search text.
    pub search_value: String,
    /// Index of the active category in the catalog.
    pub active_type_index: usize,
    /// Whether a catalog refresh is in flight.
    pub is_refresh_loading: bool,
}

impl IconSelectState {
    /// Whether `icon_id` is the provisional selection.
    pub fn is_checked(&self, icon_id: &str) -> bool {
        self.tmp_checked
            .as_ref()
            .is_some_and(|checked| checked.id == icon_id)
    }
}
