use contracts::domain::a010_service_lead::dto::{LeadDocument, ServiceLead};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::actions::LeadActions;
use crate::domain::a010_service_lead::api;
use crate::domain::a010_service_lead::ui::stage_tracker::StageTracker;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::info_row::InfoRow;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::system::auth::context::use_api_context;

const SAVED_FLASH_MS: u32 = 2500;

#[component]
pub fn ServiceLeadDetailsPage() -> impl IntoView {
    let ctx = use_api_context();
    let navigate = use_navigate();
    let params = use_params_map();
    let lead_id = move || params.get().get("id").unwrap_or_default();

    let (lead, set_lead) = signal(None::<ServiceLead>);
    let (documents, set_documents) = signal(Vec::<LeadDocument>::new());
    let (error, set_error) = signal(None::<String>);
    let (flash, set_flash) = signal(None::<String>);
    // Generation guard so an earlier flash timeout cannot clear a newer one.
    let (flash_gen, set_flash_gen) = signal(0u32);

    let fetch = {
        let ctx = ctx.clone();
        move || {
            let id = lead_id();
            if id.is_empty() {
                return;
            }
            let ctx = ctx.clone();
            spawn_local(async move {
                match api::fetch_service_lead(&ctx, &id).await {
                    Ok(l) => {
                        set_lead.set(Some(l));
                        set_error.set(None);
                    }
                    Err(e) => set_error.set(Some(e)),
                }
                if let Ok(docs) = api::fetch_documents(&ctx, &id).await {
                    set_documents.set(docs);
                }
            });
        }
    };

    // Reactive on the routed id: `fetch` reads the params inside, so the
    // effect re-runs when navigation lands on a different lead.
    Effect::new({
        let fetch = fetch.clone();
        move |_| fetch()
    });

    // Full re-fetch after a stage update resolves; no optimistic state.
    let on_updated = Callback::new({
        let fetch = fetch.clone();
        move |_: ()| {
            fetch();
            set_flash.set(Some("Stage updated.".to_string()));
            let generation = flash_gen.get_untracked() + 1;
            set_flash_gen.set(generation);
            spawn_local(async move {
                TimeoutFuture::new(SAVED_FLASH_MS).await;
                if flash_gen.get_untracked() == generation {
                    set_flash.set(None);
                }
            });
        }
    });

    let on_delete_document = Callback::new({
        let ctx = ctx.clone();
        let fetch = fetch.clone();
        move |doc_id: String| {
            let confirmed = web_sys::window()
                .map(|w| w.confirm_with_message("Remove this document?").unwrap_or(false))
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let ctx = ctx.clone();
            let fetch = fetch.clone();
            spawn_local(async move {
                match api::delete_document(&ctx, &doc_id).await {
                    Ok(()) => fetch(),
                    Err(e) => set_error.set(Some(e)),
                }
            });
        }
    });

    let back = {
        let navigate = navigate.clone();
        move |_| navigate("/service-leads", Default::default())
    };

    let stages = Signal::derive(move || lead.get().map(|l| l.stages).unwrap_or_default());
    let routed_id = Signal::derive(lead_id);

    view! {
        <div class="page">
            <div class="page-header">
                <div class="page-header__content">
                    <div class="page-header__text">
                        <button class="link-button" on:click=back>
                            {icon("arrow-left")}
                            "Service Leads"
                        </button>
                        <h1 class="page-header__title">
                            {move || {
                                lead.get().map(|l| l.service_id).unwrap_or_else(|| "…".into())
                            }}
                        </h1>
                        <div class="page-header__badges">
                            {move || {
                                lead.get()
                                    .map(|l| {
                                        view! {
                                            <Badge variant=l.status.badge_variant()>{l.status.label()}</Badge>
                                            {l.project_type.map(|t| view! {
                                                <Badge variant="neutral">{t.label()}</Badge>
                                            })}
                                        }
                                    })
                            }}
                        </div>
                        <div class="page-header__subtitle">
                            {move || {
                                lead.get()
                                    .map(|l| {
                                        let who = l
                                            .customer
                                            .as_ref()
                                            .and_then(|c| c.name.clone())
                                            .unwrap_or(l.consumer_name);
                                        format!("{} · {}", who, l.consumer_phone)
                                    })
                                    .unwrap_or_default()
                            }}
                        </div>
                    </div>
                </div>
                <div class="page-header__actions">
                    <LeadActions lead_id=routed_id stages=stages on_updated=on_updated />
                </div>
            </div>

            {move || flash.get().map(|m| view! { <div class="flash flash--success">{m}</div> })}
            {move || error.get().map(|e| view! { <ErrorBox message=e /> })}

            <div class="card">
                <h3 class="card__title">"Government Application Progress"</h3>
                <StageTracker stages=stages />
            </div>

            {move || {
                lead.get()
                    .map(|l| {
                        let discom = l.discom.clone();
                        view! {
                            <div class="card-grid">
                                <div class="card">
                                    <h3 class="card__title">"Project Details"</h3>
                                    <InfoRow label="Service ID" value=l.service_id.clone() />
                                    <InfoRow
                                        label="Project Type"
                                        value=l.project_type.map(|t| t.label().to_string()).unwrap_or_default()
                                    />
                                    <InfoRow label="Status" value=l.status.label().to_string() />
                                    <InfoRow
                                        label="Assigned Field Agent"
                                        value=l
                                            .field_agent
                                            .as_ref()
                                            .and_then(|a| a.name.clone())
                                            .unwrap_or_else(|| "Unassigned".into())
                                    />
                                </div>

                                <div class="card">
                                    <h3 class="card__title">"Discom & Capacity"</h3>
                                    <InfoRow
                                        label="Discom"
                                        value=discom.as_ref().map(|d| d.name.clone()).unwrap_or_default()
                                    />
                                    <InfoRow
                                        label="Circle"
                                        value=l
                                            .circle
                                            .clone()
                                            .or_else(|| discom.as_ref().and_then(|d| d.circle.clone()))
                                            .unwrap_or_default()
                                    />
                                    <InfoRow
                                        label="Division"
                                        value=l
                                            .division
                                            .clone()
                                            .or_else(|| discom.as_ref().and_then(|d| d.division.clone()))
                                            .unwrap_or_default()
                                    />
                                    <InfoRow
                                        label="Sub Division"
                                        value=l
                                            .sub_division
                                            .clone()
                                            .or_else(|| discom.as_ref().and_then(|d| d.sub_division.clone()))
                                            .unwrap_or_default()
                                    />
                                    <InfoRow
                                        label="Approved capacity (kWp)"
                                        value=l.approved_capacity_kwp.clone().unwrap_or_default()
                                    />
                                </div>

                                <div class="card">
                                    <h3 class="card__title">"Financial & Technical"</h3>
                                    <InfoRow
                                        label="Subsidy Amount (Rs)"
                                        value=l.subsidy_amount_rs.clone().map(|v| format!("₹{}", v)).unwrap_or_default()
                                    />
                                    <InfoRow
                                        label="Existing Installed Capacity (kWp)"
                                        value=l.existing_installed_capacity_kwp.clone().unwrap_or_default()
                                    />
                                    <InfoRow
                                        label="Installed PV Capacity (kWp)"
                                        value=l.installed_pv_capacity_kwp.clone().unwrap_or_default()
                                    />
                                </div>

                                <div class="card">
                                    <h3 class="card__title">"Location"</h3>
                                    <InfoRow label="State" value=l.state.clone().unwrap_or_default() />
                                    <InfoRow label="District" value=l.district.clone().unwrap_or_default() />
                                    <InfoRow label="Village" value=l.village.clone().unwrap_or_default() />
                                    <InfoRow label="Pin Code" value=l.pin_code.clone().unwrap_or_default() />
                                </div>
                            </div>
                        }
                    })
            }}

            <div class="card">
                <h3 class="card__title">"Documents"</h3>
                <Show
                    when=move || !documents.get().is_empty()
                    fallback=|| view! { <p class="muted">"No documents uploaded."</p> }
                >
                    <div class="table">
                        <table class="table__data">
                            <thead class="table__head">
                                <tr>
                                    <th class="table__header-cell">"Type"</th>
                                    <th class="table__header-cell">"File"</th>
                                    <th class="table__header-cell">"Approved"</th>
                                    <th class="table__header-cell">"Uploaded"</th>
                                    <th class="table__header-cell"></th>
                                </tr>
                            </thead>
                            <tbody>
                                {move || {
                                    documents
                                        .get()
                                        .into_iter()
                                        .map(|doc| {
                                            let doc_id = doc.id.clone();
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell">{doc.doc_type.clone()}</td>
                                                    <td class="table__cell">
                                                        <a href=doc.file_url.clone() target="_blank" rel="noopener">
                                                            {doc.file_name.clone()}
                                                        </a>
                                                    </td>
                                                    <td class="table__cell">
                                                        {if doc.approved {
                                                            view! { <Badge variant="success">"Approved"</Badge> }
                                                        } else {
                                                            view! { <Badge variant="warning">"Pending"</Badge> }
                                                        }}
                                                    </td>
                                                    <td class="table__cell">{format_datetime(&doc.created_at)}</td>
                                                    <td class="table__cell table__cell--actions">
                                                        <button
                                                            class="button button--ghost"
                                                            title="Remove document"
                                                            on:click=move |_| on_delete_document.run(doc_id.clone())
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
        </div>
    }
}
