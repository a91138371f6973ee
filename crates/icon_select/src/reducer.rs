//! Actions, side-effect intents, and transition logic for the icon-select control.

use form_contract::ControlValue;

use crate::{
    codec::{encode_selection, seed_selection},
    model::{IconChecked, IconSelectState},
    schema::IconSelectOptions,
};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_icon_select`].
pub enum IconSelectAction {
    /// Open the modal over the committed value. Ignored when disabled.
    Open,
    /// Close the modal and drop the provisional selection (cancel, backdrop, Escape,
    /// header close).
    Close,
    /// Flip modal visibility without touching the provisional selection.
    Toggle,
    /// Select an icon in the modal, or deselect it when it is already selected.
    ClickIcon(IconChecked),
    /// Activate a category by position.
    SelectType(usize),
    /// Apply debounced search text.
    SetSearch(String),
    /// Commit the provisional selection and close.
    Confirm,
    /// Commit an empty value without opening the modal.
    Clear,
    /// Commit a value supplied by the upload slot and close.
    Upload(ControlValue),
    /// Ask the catalog to reload.
    Refresh,
    /// A catalog reload finished (successfully or not).
    RefreshFinished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_icon_select`] for the view to execute.
pub enum IconSelectEffect {
    /// Send a committed value through the host change callback.
    Emit(ControlValue),
    /// Run the catalog refresh in the background.
    StartRefresh,
}

#[derive(Debug, Clone, Copy)]
/// Host-owned inputs the reducer reads but never changes.
pub struct ControlContext<'a> {
    /// Current committed value.
    pub value: &'a ControlValue,
    /// Control options.
    pub options: &'a IconSelectOptions,
    /// Whether the host or the schema disables the control.
    pub disabled: bool,
    /// Whether the catalog can be refreshed.
    pub refreshable: bool,
}

/// Applies an [`IconSelectAction`] and collects the resulting side effects.
///
/// Each action replaces only the fields it names; everything else in `state` is left as
/// it was.
pub fn reduce_icon_select(
    state: &mut IconSelectState,
    ctx: &ControlContext<'_>,
    action: IconSelectAction,
) -> Vec<IconSelectEffect> {
    let mut effects = Vec::new();
    match action {
        IconSelectAction::Open => {
            if ctx.disabled {
                return effects;
            }
            state.show_modal = true;
            state.tmp_checked = seed_selection(ctx.value);
            state.search_value.clear();
        }
        IconSelectAction::Close => close(state),
        IconSelectAction::Toggle => {
            state.show_modal = !state.show_modal;
            state.search_value.clear();
        }
        IconSelectAction::ClickIcon(icon) => {
            state.tmp_checked = if state.is_checked(&icon.id) {
                None
            } else {
                Some(icon)
            };
        }
        IconSelectAction::SelectType(index) => {
            state.active_type_index = index;
        }
        IconSelectAction::SetSearch(search) => {
            state.search_value = search;
        }
        IconSelectAction::Confirm => {
            effects.push(IconSelectEffect::Emit(encode_selection(
                state.tmp_checked.as_ref(),
                ctx.options,
            )));
            close(state);
        }
        IconSelectAction::Clear => {
            if !ctx.disabled {
                effects.push(IconSelectEffect::Emit(ControlValue::Empty));
            }
        }
        IconSelectAction::Upload(value) => {
            effects.push(IconSelectEffect::Emit(value));
            close(state);
        }
        IconSelectAction::Refresh => {
            if ctx.refreshable {
                state.is_refresh_loading = true;
                effects.push(IconSelectEffect::StartRefresh);
            }
        }
        IconSelectAction::RefreshFinished => {
            state.is_refresh_loading = false;
        }
    }
    effects
}

fn close(state: &mut IconSelectState) {
    state.show_modal = false;
    state.tmp_checked = None;
    state.search_value.clear();
}

#[cfg(test)]
mod tests {
    use form_contract::IconValue;
    use pretty_assertions::assert_eq;

    use super::*;

    struct Harness {
        state: IconSelectState,
        value: ControlValue,
        options: IconSelectOptions,
        disabled: bool,
        refreshable: bool,
        emitted: Vec<ControlValue>,
        refreshes: usize,
    }

    impl Harness {
        fn new(value: ControlValue) -> Self {
            Self {
                state: IconSelectState::default(),
                value,
                options: IconSelectOptions::default(),
                disabled: false,
                refreshable: true,
                emitted: Vec::new(),
                refreshes: 0,
            }
        }

        fn dispatch(&mut self, action: IconSelectAction) {
            let ctx = ControlContext {
                value: &self.value,
                options: &self.options,
                disabled: self.disabled,
                refreshable: self.refreshable,
            };
            for effect in reduce_icon_select(&mut self.state, &ctx, action) {
                match effect {
                    IconSelectEffect::Emit(value) => {
                        self.value = value.clone();
                        self.emitted.push(value);
                    }
                    IconSelectEffect::StartRefresh => self.refreshes += 1,
                }
            }
        }
    }

    fn icon(id: &str, name: &str) -> IconChecked {
        IconChecked {
            id: id.to_string(),
            name: Some(name.to_string()),
            svg: Some(format!("<svg><title>{name}</title></svg>")),
        }
    }

    fn committed(id: &str) -> ControlValue {
        ControlValue::Icon(IconValue {
            id: id.to_string(),
            name: Some("Home".to_string()),
            svg: None,
        })
    }

    #[test]
    fn open_seeds_unprefixed_selection_and_clears_search() {
        let mut h = Harness::new(committed("svg-home"));
        h.state.search_value = "stale".to_string();

        h.dispatch(IconSelectAction::Open);

        assert!(h.state.show_modal);
        assert_eq!(h.state.tmp_checked.as_ref().map(|c| c.id.as_str()), Some("home"));
        assert_eq!(h.state.search_value, "");
        assert!(h.state.is_checked("home"));
    }

    #[test]
    fn open_over_empty_value_has_no_selection() {
        let mut h = Harness::new(ControlValue::Empty);
        h.dispatch(IconSelectAction::Open);
        assert!(h.state.show_modal);
        assert_eq!(h.state.tmp_checked, None);
    }

    #[test]
    fn open_is_ignored_when_disabled() {
        let mut h = Harness::new(committed("svg-home"));
        h.disabled = true;
        h.state.search_value = "kept".to_string();

        h.dispatch(IconSelectAction::Open);

        assert!(!h.state.show_modal);
        assert_eq!(h.state.tmp_checked, None);
        assert_eq!(h.state.search_value, "kept");
    }

    #[test]
    fn clicking_same_icon_twice_deselects() {
        let mut h = Harness::new(ControlValue::Empty);
        h.dispatch(IconSelectAction::Open);

        h.dispatch(IconSelectAction::ClickIcon(icon("a", "Alpha")));
        assert!(h.state.is_checked("a"));

        h.dispatch(IconSelectAction::ClickIcon(icon("a", "Alpha")));
        assert_eq!(h.state.tmp_checked, None);
    }

    #[test]
    fn clicking_another_icon_replaces_selection() {
        let mut h = Harness::new(ControlValue::Empty);
        h.dispatch(IconSelectAction::ClickIcon(icon("a", "Alpha")));
        h.dispatch(IconSelectAction::ClickIcon(icon("b", "Beta")));
        assert!(h.state.is_checked("b"));
        assert!(!h.state.is_checked("a"));
    }

    #[test]
    fn confirm_emits_structured_value_and_closes() {
        let mut h = Harness::new(ControlValue::Empty);
        h.dispatch(IconSelectAction::Open);
        h.dispatch(IconSelectAction::ClickIcon(icon("a", "Alpha")));

        h.dispatch(IconSelectAction::Confirm);

        assert_eq!(h.emitted.len(), 1);
        match &h.emitted[0] {
            ControlValue::Icon(value) => assert_eq!(value.id, "svg-a"),
            other => panic!("unexpected value {other:?}"),
        }
        assert!(!h.state.show_modal);
        assert_eq!(h.state.tmp_checked, None);
    }

    #[test]
    fn confirm_in_svg_mode_emits_sizeless_annotated_markup() {
        let mut h = Harness::new(ControlValue::Empty);
        h.options.return_svg = true;
        h.options.no_size = true;
        h.dispatch(IconSelectAction::Open);
        h.dispatch(IconSelectAction::ClickIcon(IconChecked {
            id: "a".to_string(),
            name: Some("Alpha".to_string()),
            svg: Some(r#"<svg width="24" height="24"><path/></svg>"#.to_string()),
        }));

        h.dispatch(IconSelectAction::Confirm);

        let ControlValue::Text(markup) = &h.emitted[0] else {
            panic!("expected markup");
        };
        assert!(!markup.contains("width="));
        assert!(!markup.contains("height="));
        assert!(markup.contains(r#"data-name="Alpha""#));
        assert!(markup.contains(r#"data-id="a""#));
    }

    #[test]
    fn confirm_without_selection_emits_empty() {
        let mut h = Harness::new(committed("svg-home"));
        h.dispatch(IconSelectAction::Open);
        h.dispatch(IconSelectAction::ClickIcon(icon("home", "Home")));
        h.dispatch(IconSelectAction::Confirm);
        assert_eq!(h.emitted, vec![ControlValue::Empty]);
    }

    #[test]
    fn reopening_after_confirm_reselects_committed_icon() {
        let mut h = Harness::new(ControlValue::Empty);
        h.dispatch(IconSelectAction::Open);
        h.dispatch(IconSelectAction::ClickIcon(icon("a", "Alpha")));
        h.dispatch(IconSelectAction::Confirm);

        h.dispatch(IconSelectAction::Open);
        assert!(h.state.is_checked("a"));
    }

    #[test]
    fn clear_emits_empty_without_opening() {
        let mut h = Harness::new(committed("svg-home"));
        h.dispatch(IconSelectAction::Clear);
        assert_eq!(h.emitted, vec![ControlValue::Empty]);
        assert!(!h.state.show_modal);
    }

    #[test]
    fn clear_is_ignored_when_disabled() {
        let mut h = Harness::new(committed("svg-home"));
        h.disabled = true;
        h.dispatch(IconSelectAction::Clear);
        assert!(h.emitted.is_empty());
    }

    #[test]
    fn close_drops_selection_and_search() {
        let mut h = Harness::new(committed("svg-home"));
        h.dispatch(IconSelectAction::Open);
        h.dispatch(IconSelectAction::SetSearch("ho".to_string()));
        h.dispatch(IconSelectAction::SelectType(2));

        h.dispatch(IconSelectAction::Close);

        assert!(!h.state.show_modal);
        assert_eq!(h.state.tmp_checked, None);
        assert_eq!(h.state.search_value, "");
        assert_eq!(h.state.active_type_index, 2);
        assert!(h.emitted.is_empty());
    }

    #[test]
    fn toggle_keeps_provisional_selection() {
        let mut h = Harness::new(ControlValue::Empty);
        h.dispatch(IconSelectAction::Open);
        h.dispatch(IconSelectAction::ClickIcon(icon("a", "Alpha")));
        h.dispatch(IconSelectAction::SetSearch("al".to_string()));

        h.dispatch(IconSelectAction::Toggle);

        assert!(!h.state.show_modal);
        assert!(h.state.is_checked("a"));
        assert_eq!(h.state.search_value, "");

        h.dispatch(IconSelectAction::Toggle);
        assert!(h.state.show_modal);
    }

    #[test]
    fn select_type_leaves_selection_and_search_alone() {
        let mut h = Harness::new(ControlValue::Empty);
        h.dispatch(IconSelectAction::Open);
        h.dispatch(IconSelectAction::ClickIcon(icon("a", "Alpha")));
        h.dispatch(IconSelectAction::SetSearch("al".to_string()));

        h.dispatch(IconSelectAction::SelectType(1));

        assert_eq!(h.state.active_type_index, 1);
        assert!(h.state.is_checked("a"));
        assert_eq!(h.state.search_value, "al");
    }

    #[test]
    fn upload_commits_verbatim_and_closes() {
        let mut h = Harness::new(ControlValue::Empty);
        h.dispatch(IconSelectAction::Open);
        h.dispatch(IconSelectAction::ClickIcon(icon("a", "Alpha")));

        h.dispatch(IconSelectAction::Upload(ControlValue::text("<svg id='up'/>")));

        assert_eq!(h.emitted, vec![ControlValue::text("<svg id='up'/>")]);
        assert!(!h.state.show_modal);
        assert_eq!(h.state.tmp_checked, None);
    }

    #[test]
    fn refresh_is_skipped_without_refreshable_catalog() {
        let mut h = Harness::new(ControlValue::Empty);
        h.refreshable = false;
        h.dispatch(IconSelectAction::Refresh);
        assert!(!h.state.is_refresh_loading);
        assert_eq!(h.refreshes, 0);
    }

    #[test]
    fn overlapping_refreshes_are_not_deduplicated() {
        let mut h = Harness::new(ControlValue::Empty);
        h.dispatch(IconSelectAction::Open);
        h.dispatch(IconSelectAction::Refresh);
        h.dispatch(IconSelectAction::Refresh);
        assert_eq!(h.refreshes, 2);
        assert!(h.state.is_refresh_loading);

        h.dispatch(IconSelectAction::RefreshFinished);
        assert!(!h.state.is_refresh_loading);
        assert!(h.state.show_modal);
    }
}
