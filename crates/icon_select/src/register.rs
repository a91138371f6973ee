//! Installs the icon-select control into a host registry.

use std::rc::Rc;

use form_contract::{ControlType, FormControlProps, FormControlRegistry, RegistryError};
use icon_catalog::IconCatalog;
use leptos::*;
use serde_json::Value;

use crate::{
    component::{IconSelectControl, UploadSlot},
    schema::IconSelectControlSchema,
};

/// Schema type tag the control is registered under.
pub const ICON_SELECT_TYPE: &str = "icon-select";

/// Registers the icon-select renderer backed by `catalog`.
///
/// Every instance shares the catalog and, when given, the upload slot.
///
/// # Errors
///
/// Returns [`RegistryError::Duplicate`] when an `icon-select` renderer already exists.
pub fn register_icon_select(
    registry: &FormControlRegistry,
    catalog: Rc<dyn IconCatalog>,
    upload: Option<UploadSlot>,
) -> Result<(), RegistryError> {
    let control_type = ControlType::new(ICON_SELECT_TYPE)?;
    registry.register(
        control_type,
        Rc::new(move |props: FormControlProps, raw: &Value| {
            let schema = IconSelectControlSchema::from_json(raw).map_err(|err| err.to_string())?;
            let catalog = Rc::clone(&catalog);
            let upload = upload.clone();
            Ok(view! {
                <IconSelectControl
                    props=props
                    options=schema.options
                    catalog=catalog
                    upload=upload
                />
            }
            .into_view())
        }),
    )
}
