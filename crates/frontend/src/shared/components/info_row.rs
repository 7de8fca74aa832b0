use leptos::prelude::*;

/// Label/value pair for detail cards. Missing values render as an em dash.
#[component]
pub fn InfoRow(
    #[prop(into)] label: String,
    #[prop(optional, into)] value: Option<String>,
) -> impl IntoView {
    let value = value.filter(|v| !v.is_empty()).unwrap_or_else(|| "—".to_string());
    view! {
        <div class="info-row">
            <span class="info-row__label">{label}</span>
            <span class="info-row__value">{value}</span>
        </div>
    }
}
