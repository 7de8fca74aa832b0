use contracts::domain::a009_cms::dto::CmsPage;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a009_cms::api;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::system::auth::context::use_api_context;

#[component]
pub fn CmsPageListPage() -> impl IntoView {
    let ctx = use_api_context();
    let (items, set_items) = signal(Vec::<CmsPage>::new());
    let (error, set_error) = signal(None::<String>);

    let fetch = {
        let ctx = ctx.clone();
        move || {
            let ctx = ctx.clone();
            spawn_local(async move {
                match api::fetch_pages(&ctx).await {
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
            <PageHeader title="CMS Pages" subtitle="Static pages on the customer site">
                <button class="button button--secondary" on:click=move |_| on_refresh.run(())>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            {move || error.get().map(|e| view! { <ErrorBox message=e /> })}

            <Show
                when=move || !items.get().is_empty()
                fallback=move || view! { <EmptyState message="No pages found." /> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Title"</th>
                                <th class="table__header-cell">"Slug"</th>
                                <th class="table__header-cell">"Date"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                items
                                    .get()
                                    .into_iter()
                                    .map(|p| {
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">{p.title.clone()}</td>
                                                <td class="table__cell table__cell--mono">{p.slug.clone()}</td>
                                                <td class="table__cell">{format_date(&p.date)}</td>
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
