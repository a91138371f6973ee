use super::*;

#[component]
/// Shared modal dialog with backdrop.
///
/// Children are rendered only while `show` is true. `on_hide` fires for backdrop clicks
/// (when `close_on_outside`) and for Escape (when `close_on_esc`).
pub fn Modal(
    #[prop(into)] show: MaybeSignal<bool>,
    #[prop(default = ModalSize::Md)] size: ModalSize,
    #[prop(optional, into)] layout_class: Option<String>,
    #[prop(optional)] close_on_outside: bool,
    #[prop(optional)] close_on_esc: bool,
    #[prop(optional)] on_hide: Option<Callback<()>>,
    children: ChildrenFn,
) -> impl IntoView {
    let hide = move || {
        if let Some(on_hide) = on_hide.as_ref() {
            on_hide.call(());
        }
    };

    if close_on_esc {
        let handle = window_event_listener(ev::keydown, move |ev| {
            if show.get_untracked() && is_escape(&ev) {
                hide();
            }
        });
        on_cleanup(move || handle.remove());
    }

    let class = merge_layout_class("ui-modal", layout_class);
    let children = store_value(children);

    view! {
        <Show when=move || show.get() fallback=|| ()>
            <div
                class="ui-modal-backdrop"
                data-ui-primitive="true"
                data-ui-kind="modal-backdrop"
                on:click:undelegated=move |ev: MouseEvent| {
                    if close_on_outside && is_backdrop_hit(ev.target(), ev.current_target()) {
                        hide();
                    }
                }
            >
                <div
                    class=class.clone()
                    role="dialog"
                    aria-modal="true"
                    data-ui-primitive="true"
                    data-ui-kind="modal"
                    data-ui-size=size.token()
                >
                    {children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}

#[component]
/// Modal title row with an optional close control.
pub fn ModalHeader(
    #[prop(optional)] on_close: Option<Callback<()>>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="ui-modal-header" data-ui-slot="header">
            <div class="ui-modal-title">{children()}</div>
            {on_close.map(|on_close| {
                view! {
                    <button
                        type="button"
                        class="ui-modal-close"
                        aria-label="Close"
                        data-ui-slot="close"
                        on:click=move |_| on_close.call(())
                    >
                        "×"
                    </button>
                }
            })}
        </div>
    }
}

#[component]
/// Modal content region.
pub fn ModalBody(children: Children) -> impl IntoView {
    view! { <div class="ui-modal-body" data-ui-slot="body">{children()}</div> }
}

#[component]
/// Modal action row.
pub fn ModalFooter(children: Children) -> impl IntoView {
    view! { <div class="ui-modal-footer" data-ui-slot="footer">{children()}</div> }
}

#[component]
/// Loading indicator; with `overlay` it covers and blocks its positioned parent.
pub fn Spinner(
    #[prop(into)] show: MaybeSignal<bool>,
    #[prop(default = SpinnerSize::Md)] size: SpinnerSize,
    #[prop(optional)] overlay: bool,
    #[prop(optional_no_strip)] root: Option<String>,
) -> impl IntoView {
    view! {
        <Show when=move || show.get() fallback=|| ()>
            <div
                class=if overlay { "ui-spinner-overlay" } else { "ui-spinner-inline" }
                role="status"
                aria-busy="true"
                data-ui-primitive="true"
                data-ui-kind="spinner"
                data-ui-size=size.token()
                data-ui-root=root.clone()
            >
                <span class="ui-spinner-icon" aria-hidden="true"></span>
            </div>
        </Show>
    }
}
