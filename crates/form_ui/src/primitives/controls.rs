use super::*;

#[component]
/// Shared button primitive with standardized states.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] title: MaybeSignal<String>,
    #[prop(optional)] ui_slot: Option<&'static str>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            aria-label=move || aria_label.get()
            title=move || title.get()
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-slot=ui_slot
            data-ui-variant=variant.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Search input with an optional clear affix.
///
/// `on_change` fires on every edit with the full input text, and with an empty string
/// when the clear affix is used. Callers that need quiescence should debounce it.
pub fn SearchBox(
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] clearable: bool,
    #[prop(optional)] on_change: Option<Callback<String>>,
) -> impl IntoView {
    let text = create_rw_signal(String::new());
    let notify = move |next: String| {
        text.set(next.clone());
        if let Some(on_change) = on_change.as_ref() {
            on_change.call(next);
        }
    };

    view! {
        <div
            class=merge_layout_class("ui-search-box", layout_class)
            data-ui-primitive="true"
            data-ui-kind="search-box"
        >
            <input
                class="ui-field"
                type="search"
                placeholder=placeholder
                aria-label=aria_label
                autocomplete="off"
                prop:value=move || text.get()
                data-ui-slot="input"
                on:input=move |ev| notify(event_target_value(&ev))
            />
            <Show when=move || clearable && !text.get().is_empty() fallback=|| ()>
                <button
                    type="button"
                    class="ui-search-box-clear"
                    aria-label="Clear search"
                    data-ui-slot="clear"
                    on:click=move |_| notify(String::new())
                >
                    "×"
                </button>
            </Show>
        </div>
    }
}
