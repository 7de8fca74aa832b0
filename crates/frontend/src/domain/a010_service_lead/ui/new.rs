use contracts::domain::a010_service_lead::dto::ServiceLeadCreate;
use contracts::enums::ProjectType;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::domain::a010_service_lead::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::system::auth::context::use_api_context;

fn optional(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Manual lead entry, for inquiries that did not come through the portal.
#[component]
pub fn ServiceLeadNewPage() -> impl IntoView {
    let ctx = use_api_context();
    let navigate = use_navigate();

    let form = RwSignal::new(ServiceLeadCreate::default());
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    let is_valid = move || {
        let f = form.get();
        !f.consumer_name.trim().is_empty() && !f.consumer_phone.trim().is_empty()
    };

    let on_submit = {
        let ctx = ctx.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            set_saving.set(true);
            set_error.set(None);
            let payload = form.get();
            let ctx = ctx.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::create_service_lead(&ctx, &payload).await {
                    Ok(_) => navigate("/service-leads", Default::default()),
                    Err(e) => {
                        set_error.set(Some(e));
                        set_saving.set(false);
                    }
                }
            });
        }
    };

    let back = {
        let navigate = navigate.clone();
        move |_| navigate("/service-leads", Default::default())
    };

    view! {
        <div class="page">
            <PageHeader
                title="Create Service Lead"
                subtitle="Manually log a new inquiry or government application"
            >
                <button class="button button--secondary" on:click=back>
                    {icon("arrow-left")}
                    "Back to leads"
                </button>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <form class="card details-form" on:submit=on_submit>
                <div class="form-grid">
                    <div class="form-group">
                        <label for="consumer-name">"Consumer Name"</label>
                        <input
                            type="text"
                            id="consumer-name"
                            prop:value=move || form.get().consumer_name
                            on:input=move |ev| {
                                form.update(|f| f.consumer_name = event_target_value(&ev))
                            }
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="consumer-phone">"Consumer Phone"</label>
                        <input
                            type="tel"
                            id="consumer-phone"
                            prop:value=move || form.get().consumer_phone
                            on:input=move |ev| {
                                form.update(|f| f.consumer_phone = event_target_value(&ev))
                            }
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="project-type">"Project Type"</label>
                        <select
                            id="project-type"
                            on:change=move |ev| {
                                form.update(|f| f.project_type = optional(event_target_value(&ev)))
                            }
                        >
                            <option value="">"—"</option>
                            {ProjectType::ALL
                                .iter()
                                .map(|t| view! { <option value=t.as_str()>{t.label()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="capacity">"Approved Capacity (kWp)"</label>
                        <input
                            type="text"
                            id="capacity"
                            placeholder="e.g. 3.5"
                            on:input=move |ev| {
                                form.update(|f| {
                                    f.approved_capacity_kwp = optional(event_target_value(&ev))
                                })
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="state">"State / UT"</label>
                        <input
                            type="text"
                            id="state"
                            on:input=move |ev| {
                                form.update(|f| f.state = optional(event_target_value(&ev)))
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="district">"District"</label>
                        <input
                            type="text"
                            id="district"
                            on:input=move |ev| {
                                form.update(|f| f.district = optional(event_target_value(&ev)))
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="village">"Village"</label>
                        <input
                            type="text"
                            id="village"
                            on:input=move |ev| {
                                form.update(|f| f.village = optional(event_target_value(&ev)))
                            }
                        />
                    </div>
                    <div class="form-group">
                        <label for="pin-code">"Pin Code"</label>
                        <input
                            type="text"
                            id="pin-code"
                            maxlength="6"
                            on:input=move |ev| {
                                form.update(|f| f.pin_code = optional(event_target_value(&ev)))
                            }
                        />
                    </div>
                </div>

                <div class="details-actions">
                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || saving.get() || !is_valid()
                    >
                        {icon("save")}
                        {move || if saving.get() { "Creating…" } else { "Create Lead" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
