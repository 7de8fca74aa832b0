use contracts::domain::a003_brand::dto::Brand;
use contracts::domain::a004_category::dto::Category;
use contracts::domain::a005_product::dto::{Product, ProductListParams};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a003_brand::api as brand_api;
use crate::domain::a004_category::api as category_api;
use crate::domain::a005_product::api;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::list_utils::status_variant;
use crate::system::auth::context::use_api_context;

const SEARCH_DEBOUNCE_MS: u32 = 400;

fn opt(value: String) -> Option<String> {
    if value.is_empty() || value == "ALL" {
        None
    } else {
        Some(value)
    }
}

#[component]
pub fn ProductListPage() -> impl IntoView {
    let ctx = use_api_context();
    let (items, set_items) = signal(Vec::<Product>::new());
    let (brands, set_brands) = signal(Vec::<Brand>::new());
    let (categories, set_categories) = signal(Vec::<Category>::new());
    let (error, set_error) = signal(None::<String>);

    // Filter state; name is applied server-side after a debounce.
    let (name_input, set_name_input) = signal(String::new());
    let (name_filter, set_name_filter) = signal(String::new());
    let (brand_filter, set_brand_filter) = signal(String::from("ALL"));
    let (category_filter, set_category_filter) = signal(String::from("ALL"));
    let (status_filter, set_status_filter) = signal(String::from("ALL"));
    // Generation counter so only the latest pending debounce fires.
    let (debounce_gen, set_debounce_gen) = signal(0u32);

    // Dropdown options load once.
    {
        let ctx = ctx.clone();
        spawn_local(async move {
            if let Ok(v) = brand_api::fetch_brands(&ctx).await {
                set_brands.set(v);
            }
            if let Ok(v) = category_api::fetch_categories(&ctx).await {
                set_categories.set(v);
            }
        });
    }

    // Refetch whenever a filter settles.
    Effect::new({
        let ctx = ctx.clone();
        move |_| {
            let params = ProductListParams {
                name: opt(name_filter.get()),
                brand_id: opt(brand_filter.get()),
                category_id: opt(category_filter.get()),
                status: opt(status_filter.get()),
            };
            let ctx = ctx.clone();
            spawn_local(async move {
                match api::fetch_products(&ctx, &params).await {
                    Ok(v) => {
                        set_items.set(v);
                        set_error.set(None);
                    }
                    Err(e) => set_error.set(Some(e)),
                }
            });
        }
    });

    let on_name_input = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        set_name_input.set(value.clone());
        let generation = debounce_gen.get_untracked() + 1;
        set_debounce_gen.set(generation);
        spawn_local(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if debounce_gen.get_untracked() == generation {
                set_name_filter.set(value);
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Products" subtitle="Solar hardware catalog">
                {()}
            </PageHeader>

            <div class="filter-bar">
                <div class="filter-bar__search">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Search by name…"
                        prop:value=move || name_input.get()
                        on:input=on_name_input
                    />
                </div>
                <select
                    class="filter-bar__select"
                    on:change=move |ev| set_brand_filter.set(event_target_value(&ev))
                >
                    <option value="ALL">"All Brands"</option>
                    {move || {
                        brands
                            .get()
                            .into_iter()
                            .map(|b| view! { <option value=b.id.clone()>{b.name.clone()}</option> })
                            .collect_view()
                    }}
                </select>
                <select
                    class="filter-bar__select"
                    on:change=move |ev| set_category_filter.set(event_target_value(&ev))
                >
                    <option value="ALL">"All Categories"</option>
                    {move || {
                        categories
                            .get()
                            .into_iter()
                            .map(|c| view! { <option value=c.id.clone()>{c.name.clone()}</option> })
                            .collect_view()
                    }}
                </select>
                <select
                    class="filter-bar__select"
                    on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                >
                    <option value="ALL">"All Statuses"</option>
                    <option value="ACTIVE">"Active"</option>
                    <option value="INACTIVE">"Inactive"</option>
                </select>
            </div>

            {move || error.get().map(|e| view! { <ErrorBox message=e /> })}

            <Show
                when=move || !items.get().is_empty()
                fallback=move || view! { <EmptyState message="No products found." /> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Name"</th>
                                <th class="table__header-cell">"SKU"</th>
                                <th class="table__header-cell">"Brand"</th>
                                <th class="table__header-cell">"Category"</th>
                                <th class="table__header-cell">"Price"</th>
                                <th class="table__header-cell">"Qty"</th>
                                <th class="table__header-cell">"Stock"</th>
                                <th class="table__header-cell">"Status"</th>
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
                                                <td class="table__cell">{p.name.clone()}</td>
                                                <td class="table__cell table__cell--mono">{p.sku.clone()}</td>
                                                <td class="table__cell">{p.brand.name.clone()}</td>
                                                <td class="table__cell">{p.category.name.clone()}</td>
                                                <td class="table__cell">{format!("₹{}", p.amount)}</td>
                                                <td class="table__cell">{p.quantity}</td>
                                                <td class="table__cell">
                                                    <Badge variant=p.stock_status.badge_variant()>
                                                        {p.stock_status.label()}
                                                    </Badge>
                                                </td>
                                                <td class="table__cell">
                                                    <Badge variant=status_variant(&p.status)>{p.status.clone()}</Badge>
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
