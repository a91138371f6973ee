//! `icon-select` form control: shows the committed icon, opens a modal to browse, search,
//! and pick an icon from a categorized library, and writes the choice back to the form.
//!
//! The control is split the way the rest of the workspace splits runtime code: pure value
//! transforms in [`codec`], an explicit state record and reducer in [`model`] and
//! [`reducer`], listing and search in [`listing`] and [`ranking`], and the Leptos view in
//! [`component`]. [`register_icon_select`] installs the control into a host
//! [`form_contract::FormControlRegistry`].

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod codec;
pub mod component;
pub mod debounce;
pub mod listing;
pub mod model;
pub mod ranking;
pub mod reducer;
pub mod refresh;
mod register;
pub mod schema;

pub use codec::{decode_value, encode_selection, seed_selection};
pub use component::{IconSelectControl, UploadSlot};
pub use listing::{category_tabs, icon_listing, icons_for_type, CategoryTab, IconListing};
pub use model::{IconChecked, IconSelectState};
pub use reducer::{reduce_icon_select, ControlContext, IconSelectAction, IconSelectEffect};
pub use register::{register_icon_select, ICON_SELECT_TYPE};
pub use schema::{IconSelectControlSchema, IconSelectOptions, SchemaError};
