//! Catalog refresh runner.

use icon_catalog::IconCatalog;
use leptos::logging;

/// Asks `catalog` to reload and reports whether it succeeded.
///
/// Failures are logged and swallowed; the caller clears its loading flag either way.
pub async fn refresh_catalog(catalog: &dyn IconCatalog) -> bool {
    if !catalog.supports_refresh() {
        return false;
    }
    match catalog.refresh().await {
        Ok(()) => true,
        Err(err) => {
            logging::error!("icon catalog refresh failed: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use icon_catalog::{IconGroup, MemoryIconCatalog, NoopIconCatalog, SvgIcon};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        model::IconSelectState,
        reducer::{reduce_icon_select, ControlContext, IconSelectAction, IconSelectEffect},
        schema::IconSelectOptions,
    };
    use form_contract::ControlValue;

    fn failing_catalog() -> MemoryIconCatalog {
        MemoryIconCatalog::new(vec![IconGroup::new("base", "Base", Vec::new())])
            .with_refresh(|| Err("registry offline".to_string()))
    }

    #[test]
    fn successful_refresh_reloads_groups() {
        let catalog = MemoryIconCatalog::new(Vec::new()).with_refresh(|| {
            Ok(vec![IconGroup::new(
                "fresh",
                "Fresh",
                vec![SvgIcon::new("a", "Alpha", "<svg></svg>")],
            )])
        });
        assert!(block_on(refresh_catalog(&catalog)));
        assert_eq!(catalog.groups()[0].group_id, "fresh");
    }

    #[test]
    fn unsupported_refresh_is_a_no_op() {
        assert!(!block_on(refresh_catalog(&NoopIconCatalog)));
    }

    #[test]
    fn failing_refresh_clears_loading_and_keeps_modal_open() {
        let catalog = failing_catalog();
        let value = ControlValue::Empty;
        let options = IconSelectOptions::default();
        let ctx = ControlContext {
            value: &value,
            options: &options,
            disabled: false,
            refreshable: catalog.supports_refresh(),
        };
        let mut state = IconSelectState::default();

        reduce_icon_select(&mut state, &ctx, IconSelectAction::Open);
        let effects = reduce_icon_select(&mut state, &ctx, IconSelectAction::Refresh);
        assert_eq!(effects, vec![IconSelectEffect::StartRefresh]);
        assert!(state.is_refresh_loading);

        assert!(!block_on(refresh_catalog(&catalog)));
        reduce_icon_select(&mut state, &ctx, IconSelectAction::RefreshFinished);

        assert!(!state.is_refresh_loading);
        assert!(state.show_modal);
        assert_eq!(catalog.groups()[0].group_id, "base");
    }
}
