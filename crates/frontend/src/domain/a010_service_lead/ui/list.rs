use contracts::domain::a010_service_lead::dto::{ServiceLead, ServiceLeadListParams};
use contracts::domain::a010_service_lead::tracker::{
    derive_overall_status, matches_stage_filter, StageFilter,
};
use contracts::enums::{LeadStatus, ProjectType, StageSlug};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::domain::a010_service_lead::api;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::system::auth::context::use_api_context;

#[component]
pub fn ServiceLeadListPage() -> impl IntoView {
    let ctx = use_api_context();
    let navigate = use_navigate();
    let (items, set_items) = signal(Vec::<ServiceLead>::new());
    let (error, set_error) = signal(None::<String>);

    // All filtering below happens client-side over one fetched batch.
    // Status and stage can be seeded from the query string so dashboard
    // drill-downs land pre-filtered.
    let query = use_query_map();
    let initial_status = query
        .get_untracked()
        .get("status")
        .unwrap_or_else(|| "ALL".to_string());
    let initial_stage = query
        .get_untracked()
        .get("stage")
        .unwrap_or_else(|| "ALL".to_string());
    let (search, set_search) = signal(String::new());
    let (status_filter, set_status_filter) = signal(initial_status);
    let (type_filter, set_type_filter) = signal(String::from("ALL"));
    let (stage_filter, set_stage_filter) = signal(initial_stage);

    let fetch = {
        let ctx = ctx.clone();
        move || {
            let ctx = ctx.clone();
            spawn_local(async move {
                match api::fetch_service_leads(&ctx, &ServiceLeadListParams::default()).await {
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

    let filtered = Memo::new(move |_| {
        let term = search.get().to_lowercase();
        let status = status_filter.get();
        let project_type = type_filter.get();
        let stage = StageFilter::from_value(&stage_filter.get());

        items
            .get()
            .into_iter()
            .filter(|lead| {
                let matches_search = term.is_empty()
                    || lead.service_id.to_lowercase().contains(&term)
                    || lead.consumer_name.to_lowercase().contains(&term)
                    || lead
                        .customer
                        .as_ref()
                        .and_then(|c| c.name.as_ref())
                        .map(|n| n.to_lowercase().contains(&term))
                        .unwrap_or(false)
                    || lead
                        .field_agent
                        .as_ref()
                        .and_then(|a| a.name.as_ref())
                        .map(|n| n.to_lowercase().contains(&term))
                        .unwrap_or(false);

                let matches_status = status == "ALL" || lead.status.as_str() == status;
                let matches_type = project_type == "ALL"
                    || lead
                        .project_type
                        .map(|t| t.as_str() == project_type)
                        .unwrap_or(false);
                let matches_stage = matches_stage_filter(&lead.stages, lead.status, stage);

                matches_search && matches_status && matches_type && matches_stage
            })
            .collect::<Vec<_>>()
    });

    let go_new = {
        let navigate = navigate.clone();
        move |_| navigate("/service-leads/new", Default::default())
    };

    view! {
        <div class="page">
            <PageHeader
                title="Service Leads"
                subtitle="Solar project applications, field assignments, and tracking"
            >
                <button class="button button--primary" on:click=go_new>
                    {icon("plus")}
                    "Create Service Lead"
                </button>
                <button class="button button--secondary" on:click=move |_| on_refresh.run(())>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            <div class="filter-bar">
                <div class="filter-bar__search">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Search by ID, Customer, or Agent…"
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                </div>
                <select
                    class="filter-bar__select"
                    prop:value=move || status_filter.get()
                    on:change=move |ev| set_status_filter.set(event_target_value(&ev))
                >
                    <option value="ALL">"All Statuses"</option>
                    {LeadStatus::ALL
                        .iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                </select>
                <select
                    class="filter-bar__select"
                    on:change=move |ev| set_type_filter.set(event_target_value(&ev))
                >
                    <option value="ALL">"All Types"</option>
                    {ProjectType::ALL
                        .iter()
                        .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                        .collect_view()}
                </select>
                <select
                    class="filter-bar__select"
                    prop:value=move || stage_filter.get()
                    on:change=move |ev| set_stage_filter.set(event_target_value(&ev))
                >
                    <option value="ALL">"All Stages"</option>
                    {StageSlug::ORDER
                        .iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect_view()}
                    <option value="COMPLETED">"Completed"</option>
                </select>
            </div>

            {move || error.get().map(|e| view! { <ErrorBox message=e /> })}

            <Show
                when=move || !filtered.get().is_empty()
                fallback=move || view! { <EmptyState message="No service leads found." /> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Service ID"</th>
                                <th class="table__header-cell">"Customer"</th>
                                <th class="table__header-cell">"Field Agent"</th>
                                <th class="table__header-cell">"Type"</th>
                                <th class="table__header-cell">"Capacity (kWp)"</th>
                                <th class="table__header-cell">"Status"</th>
                                <th class="table__header-cell">"Govt Stage"</th>
                                <th class="table__header-cell"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                let navigate = navigate.clone();
                                move || {
                                    let navigate = navigate.clone();
                                    filtered
                                        .get()
                                        .into_iter()
                                        .map(|lead| {
                                            let navigate = navigate.clone();
                                            let id = lead.id.clone();
                                            // Derived stage signal and the independent
                                            // backend status, displayed side by side.
                                            let overall = derive_overall_status(&lead.stages);
                                            let customer_name = lead
                                                .customer
                                                .as_ref()
                                                .and_then(|c| c.name.clone())
                                                .unwrap_or_else(|| lead.consumer_name.clone());
                                            let agent_name = lead
                                                .field_agent
                                                .as_ref()
                                                .and_then(|a| a.name.clone())
                                                .unwrap_or_else(|| "Unassigned".to_string());
                                            view! {
                                                <tr
                                                    class="table__row table__row--clickable"
                                                    on:click=move |_| {
                                                        navigate(
                                                            &format!(
                                                                "/service-leads/{}",
                                                                urlencoding::encode(&id),
                                                            ),
                                                            Default::default(),
                                                        )
                                                    }
                                                >
                                                    <td class="table__cell table__cell--mono">
                                                        {lead.service_id.clone()}
                                                    </td>
                                                    <td class="table__cell">{customer_name}</td>
                                                    <td class="table__cell">{agent_name}</td>
                                                    <td class="table__cell">
                                                        {lead
                                                            .project_type
                                                            .map(|t| t.label().to_string())
                                                            .unwrap_or_else(|| "—".into())}
                                                    </td>
                                                    <td class="table__cell">
                                                        {lead
                                                            .approved_capacity_kwp
                                                            .clone()
                                                            .unwrap_or_else(|| "—".into())}
                                                    </td>
                                                    <td class="table__cell">
                                                        <Badge variant=lead.status.badge_variant()>
                                                            {lead.status.label()}
                                                        </Badge>
                                                    </td>
                                                    <td class="table__cell">
                                                        <Badge variant=overall.badge_variant()>
                                                            {overall.label()}
                                                        </Badge>
                                                    </td>
                                                    <td class="table__cell table__cell--actions">
                                                        {icon("eye")}
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                }
                            }
                        </tbody>
                    </table>
                </div>
            </Show>
        </div>
    }
}
