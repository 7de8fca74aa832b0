use leptos::prelude::*;

/// Inline error region shown next to (or instead of) the data it belongs
/// to. The message arrives preformatted from the API layer.
#[component]
pub fn ErrorBox(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="warning-box warning-box--error">
            <span class="warning-box__icon">"⚠"</span>
            <span class="warning-box__text">{message}</span>
        </div>
    }
}
