use contracts::dashboards::DashboardStats;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::dashboards::d400_overview::api;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::system::auth::context::use_api_context;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_api_context();
    let (stats, set_stats) = signal(None::<DashboardStats>);
    let (error, set_error) = signal(None::<String>);

    let fetch = {
        let ctx = ctx.clone();
        move || {
            let ctx = ctx.clone();
            spawn_local(async move {
                match api::fetch_stats(&ctx).await {
                    Ok(s) => {
                        set_stats.set(Some(s));
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

    let stat = move |pick: fn(&DashboardStats) -> i64| {
        Signal::derive(move || stats.get().map(|s| pick(&s)))
    };

    view! {
        <div class="page">
            <PageHeader title="Dashboard" subtitle="Operations at a glance">
                <button class="button button--secondary" on:click=move |_| on_refresh.run(())>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            {move || error.get().map(|e| view! { <ErrorBox message=e /> })}

            <div class="stat-grid">
                <StatCard label="Customers".to_string() icon_name="users".to_string() value=stat(|s| s.customers) />
                <StatCard label="Field Agents".to_string() icon_name="user".to_string() value=stat(|s| s.field_agents) />
                <StatCard label="Sub Admins".to_string() icon_name="users".to_string() value=stat(|s| s.sub_admins) />
                <StatCard label="Products".to_string() icon_name="package".to_string() value=stat(|s| s.products) />
                <StatCard label="Orders".to_string() icon_name="shopping-cart".to_string() value=stat(|s| s.orders) />
                <StatCard label="Pending Quotations".to_string() icon_name="file-text".to_string() value=stat(|s| s.pending_quotations) />
                <StatCard label="Accepted Quotations".to_string() icon_name="file-text".to_string() value=stat(|s| s.accepted_quotations) />
                <StatCard label="Rejected Quotations".to_string() icon_name="x-circle".to_string() value=stat(|s| s.rejected_quotations) />
            </div>

            <div class="card">
                <h3 class="card__title">"Service Lead Summary"</h3>
                {move || {
                    stats
                        .get()
                        .map(|s| {
                            let lead = s.lead_summary;
                            view! {
                                <div class="lead-summary">
                                    <A href="/service-leads?status=PENDING">
                                        <div class="lead-summary__item">
                                            <Badge variant="neutral">"Pending"</Badge>
                                            <span>{lead.pending}</span>
                                        </div>
                                    </A>
                                    <A href="/service-leads?status=ASSIGNED">
                                        <div class="lead-summary__item">
                                            <Badge variant="primary">"Assigned"</Badge>
                                            <span>{lead.assigned}</span>
                                        </div>
                                    </A>
                                    <A href="/service-leads?status=COMPLETED">
                                        <div class="lead-summary__item">
                                            <Badge variant="success">"Completed"</Badge>
                                            <span>{lead.completed}</span>
                                        </div>
                                    </A>
                                    <A href="/service-leads?status=CANCELLED">
                                        <div class="lead-summary__item">
                                            <Badge variant="error">"Cancelled"</Badge>
                                            <span>{lead.cancelled}</span>
                                        </div>
                                    </A>
                                </div>
                            }
                        })
                }}
            </div>

            <div class="card">
                <h3 class="card__title">"Operational Stage Buckets"</h3>
                // Legacy buckets reported by the backend. Only the Completed
                // bucket maps onto the catalogue's stage filter, so it is the
                // sole drill-down; the rest are display-only counts.
                {move || {
                    stats
                        .get()
                        .map(|s| {
                            let b = s.lead_stage_summary;
                            let buckets = [
                                ("Payment Pending", b.payment_pending),
                                ("Installation Incomplete", b.installation_incomplete),
                                ("Bank Balance", b.bank_balance),
                                ("Lead Lost", b.lead_lost),
                                ("Document Pending", b.document_pending),
                                ("Inspection Waiting", b.inspection_waiting),
                                ("Site Technical Issue", b.site_technical_issue),
                                ("Feasibility Balance", b.feasibility_balance),
                                ("Waiting for Subsidy", b.waiting_for_subsidy),
                                ("Jansamarth Balance", b.jansamarth_balance),
                            ];
                            view! {
                                <div class="bucket-grid">
                                    {buckets
                                        .into_iter()
                                        .map(|(label, count)| {
                                            view! {
                                                <div class="bucket-grid__item">
                                                    <span class="bucket-grid__label">{label}</span>
                                                    <span class="bucket-grid__count">{count}</span>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                    <A href="/service-leads?stage=COMPLETED">
                                        <div class="bucket-grid__item bucket-grid__item--link">
                                            <span class="bucket-grid__label">"Completed"</span>
                                            <span class="bucket-grid__count">{b.completed}</span>
                                        </div>
                                    </A>
                                </div>
                            }
                        })
                }}
            </div>
        </div>
    }
}
