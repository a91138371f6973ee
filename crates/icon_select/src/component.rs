//! Leptos view for the icon-select control.

use std::{rc::Rc, time::Duration};

use form_contract::{ControlValue, FormControlProps};
use form_ui::prelude::*;
use icon_catalog::{IconCatalog, IconGroup, SvgIcon};
use leptos::ev::MouseEvent;
use leptos::*;

use crate::{
    codec::decode_value,
    debounce::debounced,
    listing::{category_tabs, icon_listing, IconListing},
    model::{
        IconChecked, IconSelectState, CANCEL_KEY, CONFIRM_KEY, MODAL_TITLE_KEY, SEARCH_DEBOUNCE_MS,
    },
    reducer::{reduce_icon_select, ControlContext, IconSelectAction, IconSelectEffect},
    refresh::refresh_catalog,
    schema::IconSelectOptions,
};

/// Optional upload slot rendered inside the modal.
///
/// Receives the callback through which it hands an uploaded icon to the control; the
/// value is committed as-is and the modal closes.
pub type UploadSlot = Rc<dyn Fn(Callback<ControlValue>) -> View>;

/// Click whose default action and propagation can be cancelled.
trait ClickGuard {
    fn halt(&self);
}

impl ClickGuard for MouseEvent {
    fn halt(&self) {
        self.prevent_default();
        self.stop_propagation();
    }
}

#[derive(Clone, Copy)]
struct IconSelectRuntime {
    state: RwSignal<IconSelectState>,
    groups: RwSignal<Vec<IconGroup>>,
    value: Signal<ControlValue>,
    disabled: MaybeSignal<bool>,
    props: StoredValue<FormControlProps>,
    options: StoredValue<IconSelectOptions>,
    catalog: StoredValue<Rc<dyn IconCatalog>>,
    upload: StoredValue<Option<UploadSlot>>,
    refreshable: bool,
}

impl IconSelectRuntime {
    fn new(
        props: FormControlProps,
        options: IconSelectOptions,
        catalog: Rc<dyn IconCatalog>,
        upload: Option<UploadSlot>,
    ) -> Self {
        Self {
            state: create_rw_signal(IconSelectState::default()),
            groups: create_rw_signal(catalog.groups()),
            value: props.value,
            disabled: props.disabled,
            refreshable: catalog.supports_refresh(),
            props: store_value(props),
            options: store_value(options),
            catalog: store_value(catalog),
            upload: store_value(upload),
        }
    }

    fn is_disabled(self) -> bool {
        self.disabled.get() || self.options.with_value(|options| options.disabled)
    }

    /// Runs `action` through the reducer and executes the resulting effects.
    ///
    /// Does nothing once the control has been unmounted.
    fn dispatch(self, action: IconSelectAction) {
        let Some(mut next) = self.state.try_get_untracked() else {
            return;
        };
        let Some(value) = self.value.try_get_untracked() else {
            return;
        };
        let disabled = self.disabled.try_get_untracked().unwrap_or(true);
        let Some(effects) = self.options.try_with_value(|options| {
            let ctx = ControlContext {
                value: &value,
                options,
                disabled: disabled || options.disabled,
                refreshable: self.refreshable,
            };
            reduce_icon_select(&mut next, &ctx, action)
        }) else {
            return;
        };

        if self.state.with_untracked(|current| *current != next) {
            self.state.set(next);
        }
        for effect in effects {
            match effect {
                IconSelectEffect::Emit(value) => {
                    self.props.try_with_value(|props| props.emit(value));
                }
                IconSelectEffect::StartRefresh => self.start_refresh(),
            }
        }
    }

    fn start_refresh(self) {
        let Some(catalog) = self.catalog.try_get_value() else {
            return;
        };
        spawn_local(async move {
            refresh_catalog(catalog.as_ref()).await;
            self.finish_refresh(catalog.groups());
        });
    }

    /// Applies reloaded groups; dropped when the control is gone.
    fn finish_refresh(self, groups: Vec<IconGroup>) {
        if self.groups.try_set(groups).is_some() {
            return;
        }
        self.dispatch(IconSelectAction::RefreshFinished);
    }

    fn clear_clicked(self, ev: &impl ClickGuard) {
        ev.halt();
        self.dispatch(IconSelectAction::Clear);
    }

    fn spinner_visible(self) -> bool {
        let loading = self.state.with(|state| state.is_refresh_loading);
        self.props
            .with_value(|props| props.loading_config.resolve_show(loading))
    }

    fn class(self, suffix: &str) -> String {
        self.props.with_value(|props| props.class(suffix))
    }

    fn tr(self, key: &str) -> String {
        self.props.with_value(|props| props.tr(key))
    }
}

#[component]
/// Icon picker form control.
///
/// Shows the committed icon and name (or the placeholder), opens a modal on click to
/// browse the catalog by category, search by name, and confirm a selection.
pub fn IconSelectControl(
    /// Host props: value binding, change callback, disabled flag, styling, translation.
    props: FormControlProps,
    /// Behavior options read from the schema.
    #[prop(optional)]
    options: IconSelectOptions,
    /// Icon registry backing the modal.
    catalog: Rc<dyn IconCatalog>,
    /// Optional upload slot rendered above the catalog.
    #[prop(optional_no_strip)]
    upload: Option<UploadSlot>,
) -> impl IntoView {
    let runtime = IconSelectRuntime::new(props, options, catalog, upload);

    let root_class = move || {
        let mut classes = Vec::new();
        if let Some(class_name) = runtime.props.with_value(|props| props.class_name.clone()) {
            classes.push(class_name);
        }
        classes.push(runtime.class("IconSelectControl"));
        if runtime.state.with(|state| state.show_modal) {
            classes.push("is-focused".to_string());
        }
        if runtime.is_disabled() {
            classes.push("is-disabled".to_string());
        }
        classes.join(" ")
    };

    view! {
        <div class=root_class data-ui-kind="icon-select">
            <div
                class=runtime.class("IconSelectControl-input")
                on:click=move |_| runtime.dispatch(IconSelectAction::Open)
            >
                <InputArea runtime=runtime />
            </div>

            <Modal
                show=Signal::derive(move || runtime.state.with(|state| state.show_modal))
                size=ModalSize::Lg
                layout_class=runtime.class("IconSelectControl-Modal")
                close_on_outside=true
                close_on_esc=true
                on_hide=Callback::new(move |_| runtime.dispatch(IconSelectAction::Close))
            >
                <ModalHeader on_close=Callback::new(move |_| runtime.dispatch(IconSelectAction::Close))>
                    {runtime.tr(MODAL_TITLE_KEY)}
                </ModalHeader>
                <ModalBody>
                    <ModalContent runtime=runtime />
                </ModalBody>
                <ModalFooter>
                    <Button
                        layout_class="m-l"
                        on_click=Callback::new(move |_| runtime.dispatch(IconSelectAction::Close))
                    >
                        {runtime.tr(CANCEL_KEY)}
                    </Button>
                    <Button
                        variant=ButtonVariant::Primary
                        on_click=Callback::new(move |_| runtime.dispatch(IconSelectAction::Confirm))
                    >
                        {runtime.tr(CONFIRM_KEY)}
                    </Button>
                </ModalFooter>
            </Modal>
        </div>
    }
}

#[component]
fn InputArea(runtime: IconSelectRuntime) -> impl IntoView {
    let decoded = create_memo(move |_| decode_value(&runtime.value.get()));
    let show_clear = move || {
        decoded.with(Option::is_some)
            && runtime.options.with_value(|options| options.clearable)
            && !runtime.is_disabled()
    };

    view! {
        <div class=runtime.class("IconSelectControl-input-area")>
            <div class=runtime.class("IconSelectControl-input-icon-show")>
                <InlineSvg
                    layout_class="icon"
                    markup=Signal::derive(move || {
                        decoded.with(|icon| {
                            icon.as_ref().map(|icon| icon.markup().to_string()).unwrap_or_default()
                        })
                    })
                />
            </div>
            <span class=runtime.class("IconSelectControl-input-icon-id")>
                {move || {
                    decoded.with(|icon| {
                        icon.as_ref().map(|icon| icon.display_name().to_string()).unwrap_or_default()
                    })
                }}
            </span>
            <Show when=show_clear fallback=|| ()>
                <a
                    class=runtime.class("IconSelectControl-clear")
                    on:click:undelegated=move |ev: MouseEvent| runtime.clear_clicked(&ev)
                >
                    <span class="icon" aria-label="clear">"×"</span>
                </a>
            </Show>
            {move || {
                let placeholder = runtime.options.with_value(|options| options.placeholder.clone());
                match placeholder {
                    Some(placeholder) if decoded.with(Option::is_none) => {
                        view! {
                            <span class=runtime.class("IconSelectControl-input-icon-placeholder")>
                                {placeholder}
                            </span>
                        }
                            .into_view()
                    }
                    _ => ().into_view(),
                }
            }}
        </div>
    }
}

#[component]
fn ModalContent(runtime: IconSelectRuntime) -> impl IntoView {
    let on_search = debounced(Duration::from_millis(SEARCH_DEBOUNCE_MS), move |text: String| {
        runtime.dispatch(IconSelectAction::SetSearch(text));
    });
    let spinner_root = runtime
        .props
        .with_value(|props| props.loading_config.root.clone());
    let show_spinner = Signal::derive(move || runtime.spinner_visible());
    let upload = runtime.upload.get_value().map(|slot| {
        let on_upload =
            Callback::new(move |value: ControlValue| runtime.dispatch(IconSelectAction::Upload(value)));
        view! { <div class=runtime.class("IconSelectControl-Modal-func")>{slot(on_upload)}</div> }
    });

    view! {
        <SearchBox
            layout_class=runtime.class("IconSelectControl-Modal-search")
            clearable=true
            on_change=on_search
        />

        {runtime.refreshable.then(|| {
            view! {
                <Button
                    variant=ButtonVariant::Quiet
                    layout_class=runtime.class("IconSelectControl-Modal-refresh")
                    aria_label="refresh"
                    on_click=Callback::new(move |_| runtime.dispatch(IconSelectAction::Refresh))
                >
                    <span class="fa fa-refresh" aria-hidden="true"></span>
                </Button>
            }
        })}

        {upload}

        <div class=runtime.class("IconSelectControl-Modal-content")>
            <Spinner show=show_spinner size=SpinnerSize::Lg overlay=true root=spinner_root />
            <div class=runtime.class("IconSelectControl-Modal-content-aside")>
                <CategoryList runtime=runtime />
            </div>
            <div class=runtime.class("IconSelectControl-Modal-content-main")>
                <IconList runtime=runtime />
            </div>
        </div>
    }
}

#[component]
fn CategoryList(runtime: IconSelectRuntime) -> impl IntoView {
    view! {
        <ul class=runtime.class("IconSelectControl-type-list")>
            <For
                each=move || {
                    runtime
                        .groups
                        .with(|groups| category_tabs(groups))
                        .into_iter()
                        .enumerate()
                        .collect::<Vec<_>>()
                }
                key=|(index, tab)| (*index, tab.id.clone())
                children=move |(index, tab)| {
                    let active = move || runtime.state.with(|state| state.active_type_index == index);
                    view! {
                        <li
                            class=move || if active() { "active" } else { "" }
                            on:click=move |_| runtime.dispatch(IconSelectAction::SelectType(index))
                        >
                            {tab.label}
                        </li>
                    }
                }
            />
        </ul>
    }
}

#[component]
fn IconList(runtime: IconSelectRuntime) -> impl IntoView {
    let listing = create_memo(move |_| {
        let (active_type_index, search) = runtime
            .state
            .with(|state| (state.active_type_index, state.search_value.clone()));
        runtime.groups.with(|groups| {
            runtime.options.with_value(|options| {
                icon_listing(groups, active_type_index, &search, &options.no_data_tip)
            })
        })
    });

    move || match listing.get() {
        IconListing::Empty { tip } => view! {
            <EmptyState layout_class=runtime.class("IconSelectControl-icon-list-empty")>
                {runtime.tr(&tip)}
            </EmptyState>
        }
        .into_view(),
        IconListing::Icons(icons) => view! {
            <ul class=runtime.class("IconSelectControl-icon-list")>
                {icons
                    .into_iter()
                    .map(|icon| view! { <IconListItem runtime=runtime icon=icon /> })
                    .collect_view()}
            </ul>
        }
        .into_view(),
    }
}

#[component]
fn IconListItem(runtime: IconSelectRuntime, icon: SvgIcon) -> impl IntoView {
    let item_class = runtime.class("IconSelectControl-icon-list-item");
    let icon_id = icon.id.clone();
    let is_active = move || runtime.state.with(|state| state.is_checked(&icon_id));
    let checked = IconChecked::from(&icon);

    view! {
        <li>
            <div
                class=move || {
                    if is_active() {
                        format!("{item_class} active")
                    } else {
                        item_class.clone()
                    }
                }
                on:click=move |_| runtime.dispatch(IconSelectAction::ClickIcon(checked.clone()))
            >
                <InlineSvg markup=icon.svg.clone() />
                <div class=runtime.class("IconSelectControl-icon-list-item-info")>
                    <p class=runtime.class("IconSelectControl-icon-list-item-info-name")>
                        {icon.name.clone()}
                    </p>
                </div>
            </div>
        </li>
    }
}
