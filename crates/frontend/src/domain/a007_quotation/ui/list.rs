use contracts::domain::a007_quotation::dto::Quotation;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a007_quotation::api;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::{format_date, format_datetime};
use crate::shared::icons::icon;
use crate::shared::list_utils::status_variant;
use crate::system::auth::context::use_api_context;

#[component]
pub fn QuotationListPage() -> impl IntoView {
    let ctx = use_api_context();
    let (items, set_items) = signal(Vec::<Quotation>::new());
    let (error, set_error) = signal(None::<String>);

    let fetch = {
        let ctx = ctx.clone();
        move || {
            let ctx = ctx.clone();
            spawn_local(async move {
                match api::fetch_quotations(&ctx).await {
                    Ok(v) => {
                        set_items.set(v);
                        set_error.set(None);
                    }
                    Err(e) => set_error.set(Some(e)),
                }
            });
        }
    };

    let on_refresh = Callback::new({
        let fetch = fetch.clone();
        move |_: ()| fetch()
    });

    fetch();

    view! {
        <div class="page">
            <PageHeader title="Quotations" subtitle="Offers prepared for customers">
                <button class="button button--secondary" on:click=move |_| on_refresh.run(())>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            {move || error.get().map(|e| view! { <ErrorBox message=e /> })}

            <Show
                when=move || !items.get().is_empty()
                fallback=move || view! { <EmptyState message="No quotations found." /> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Quotation #"</th>
                                <th class="table__header-cell">"Customer"</th>
                                <th class="table__header-cell">"Items"</th>
                                <th class="table__header-cell">"Total"</th>
                                <th class="table__header-cell">"Valid Until"</th>
                                <th class="table__header-cell">"Status"</th>
                                <th class="table__header-cell">"Created"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                items
                                    .get()
                                    .into_iter()
                                    .map(|q| {
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell table__cell--mono">
                                                    {q.quotation_number.clone().unwrap_or_else(|| "—".into())}
                                                </td>
                                                <td class="table__cell">{q.customer.display_name().to_string()}</td>
                                                <td class="table__cell">{q.items.len()}</td>
                                                <td class="table__cell">{format!("₹{}", q.total_amount)}</td>
                                                <td class="table__cell">
                                                    {q.valid_until.as_deref().map(format_date).unwrap_or_else(|| "—".into())}
                                                </td>
                                                <td class="table__cell">
                                                    <Badge variant=status_variant(&q.status)>{q.status.clone()}</Badge>
                                                </td>
                                                <td class="table__cell">{format_datetime(&q.created_at)}</td>
                                            </tr>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
