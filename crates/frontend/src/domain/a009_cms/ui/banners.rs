use contracts::domain::a009_cms::dto::Banner;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a009_cms::api;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::list_utils::status_variant;
use crate::system::auth::context::use_api_context;

#[component]
pub fn BannerListPage() -> impl IntoView {
    let ctx = use_api_context();
    let (items, set_items) = signal(Vec::<Banner>::new());
    let (error, set_error) = signal(None::<String>);

    let fetch = {
        let ctx = ctx.clone();
        move || {
            let ctx = ctx.clone();
            spawn_local(async move {
                match api::fetch_banners(&ctx).await {
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
            <PageHeader title="Top Banners" subtitle="Promotional banners on the storefront">
                <button class="button button--secondary" on:click=move |_| on_refresh.run(())>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            {move || error.get().map(|e| view! { <ErrorBox message=e /> })}

            <Show
                when=move || !items.get().is_empty()
                fallback=move || view! { <EmptyState message="No banners found." /> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Title"</th>
                                <th class="table__header-cell">"Image"</th>
                                <th class="table__header-cell">"Link"</th>
                                <th class="table__header-cell">"Position"</th>
                                <th class="table__header-cell">"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                items
                                    .get()
                                    .into_iter()
                                    .map(|b| {
                                        view! {
                                            <tr class="table__row">
                                                <td class="table__cell">
                                                    {b.title.clone().unwrap_or_else(|| "—".into())}
                                                </td>
                                                <td class="table__cell">
                                                    <img class="table__thumb" src=b.image.clone() alt="banner" />
                                                </td>
                                                <td class="table__cell table__cell--mono">
                                                    {b.link.clone().unwrap_or_else(|| "—".into())}
                                                </td>
                                                <td class="table__cell">
                                                    {b.position.clone().unwrap_or_else(|| "—".into())}
                                                </td>
                                                <td class="table__cell">
                                                    <Badge variant=status_variant(&b.status)>{b.status.clone()}</Badge>
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
