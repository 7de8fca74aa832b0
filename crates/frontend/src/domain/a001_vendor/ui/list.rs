use contracts::domain::a001_vendor::dto::Vendor;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_vendor::api;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::status_variant;
use crate::system::auth::context::use_api_context;

#[component]
pub fn VendorListPage() -> impl IntoView {
    let ctx = use_api_context();
    let (items, set_items) = signal(Vec::<Vendor>::new());
    let (error, set_error) = signal(None::<String>);

    let fetch = {
        let ctx = ctx.clone();
        move || {
            let ctx = ctx.clone();
            spawn_local(async move {
                match api::fetch_vendors(&ctx).await {
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

    let on_delete = Callback::new({
        let ctx = ctx.clone();
        let fetch = fetch.clone();
        move |(id, name): (String, String)| {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message(&format!("Delete vendor \"{}\"?", name))
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let ctx = ctx.clone();
            let fetch = fetch.clone();
            spawn_local(async move {
                match api::delete_vendor(&ctx, &id).await {
                    Ok(()) => fetch(),
                    Err(e) => set_error.set(Some(e)),
                }
            });
        }
    });

    fetch();

    view! {
        <div class="page">
            <PageHeader title="Vendors" subtitle="Installation partners onboarded to the platform">
                <button class="button button--secondary" on:click=move |_| on_refresh.run(())>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            {move || error.get().map(|e| view! { <ErrorBox message=e /> })}

            <Show
                when=move || !items.get().is_empty()
                fallback=move || view! { <EmptyState message="No vendors found." /> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Name"</th>
                                <th class="table__header-cell">"Company"</th>
                                <th class="table__header-cell">"Status"</th>
                                <th class="table__header-cell">"Created"</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                items
                                    .get()
                                    .into_iter()
                                    .map(|v| {
                                        let id = v.id.clone();
                                        let name = v.name.clone();
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{v.name.clone()}</td>
                                                <td class="table__cell">
                                                    {v.company_name.clone().unwrap_or_else(|| "—".into())}
                                                </td>
                                                <td class="table__cell">
                                                    <Badge variant=status_variant(&v.status)>{v.status.clone()}</Badge>
                                                </td>
                                                <td class="table__cell">{format_datetime(&v.created_at)}</td>
                                                <td class="table__cell table__cell--actions">
                                                    <button
                                                        class="button button--ghost"
                                                        title="Delete vendor"
                                                        on:click=move |_| on_delete.run((id.clone(), name.clone()))
                                                    >
                                                        {icon("delete")}
                                                    </button>
                                                </td>
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
