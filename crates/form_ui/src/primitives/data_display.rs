use super::*;

#[component]
/// Renders trusted icon markup (a full `<svg>` element) inline.
pub fn InlineSvg(
    #[prop(into)] markup: MaybeSignal<String>,
    #[prop(optional, into)] layout_class: Option<String>,
) -> impl IntoView {
    view! {
        <span
            class=merge_layout_class("ui-inline-svg", layout_class)
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="inline-svg"
            inner_html=move || markup.get()
        ></span>
    }
}

#[component]
/// Placeholder shown in place of an empty list.
pub fn EmptyState(
    #[prop(optional, into)] layout_class: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <p
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {children()}
        </p>
    }
}
