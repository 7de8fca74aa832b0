use contracts::domain::a002_user::dto::UserCreate;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::domain::a002_user::api;
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

#[component]
pub fn UserNewPage() -> impl IntoView {
    let ctx = use_api_context();
    let navigate = use_navigate();

    let form = RwSignal::new(UserCreate {
        role: "CUSTOMER".to_string(),
        status: "ACTIVE".to_string(),
        ..Default::default()
    });
    let (confirm_password, set_confirm_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (saving, set_saving) = signal(false);

    let is_valid = move || {
        let f = form.get();
        !f.name.trim().is_empty()
            && !f.email.trim().is_empty()
            && !f.mobile.trim().is_empty()
            && !f.password.is_empty()
    };

    let on_submit = {
        let ctx = ctx.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let f = form.get();
            if f.password != confirm_password.get() {
                set_error.set(Some("Passwords do not match.".to_string()));
                return;
            }
            set_saving.set(true);
            set_error.set(None);
            let ctx = ctx.clone();
            let navigate = navigate.clone();
            spawn_local(async move {
                match api::create_user(&ctx, &f).await {
                    Ok(_) => navigate("/users", Default::default()),
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
        move |_| navigate("/users", Default::default())
    };

    view! {
        <div class="page">
            <PageHeader title="New User" subtitle="Create a customer, field agent, or admin account">
                <button class="button button--secondary" on:click=back>
                    {icon("arrow-left")}
                    "Back to users"
                </button>
            </PageHeader>

            {move || error.get().map(|e| view! { <div class="error-message">{e}</div> })}

            <form class="card details-form" on:submit=on_submit>
                <div class="form-grid">
                    <div class="form-group">
                        <label for="role">"User Role"</label>
                        <select
                            id="role"
                            on:change=move |ev| form.update(|f| f.role = event_target_value(&ev))
                        >
                            <option value="CUSTOMER">"Customer"</option>
                            <option value="FIELD_AGENT">"Field Agent"</option>
                            <option value="SUB_ADMIN">"Sub Admin"</option>
                            <option value="SUPER_ADMIN">"Super Admin"</option>
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="status">"Status"</label>
                        <select
                            id="status"
                            on:change=move |ev| form.update(|f| f.status = event_target_value(&ev))
                        >
                            <option value="ACTIVE">"Active"</option>
                            <option value="INACTIVE">"Inactive"</option>
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="name">"Name"</label>
                        <input
                            type="text"
                            id="name"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="email">"Email"</label>
                        <input
                            type="email"
                            id="email"
                            prop:value=move || form.get().email
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="mobile">"Mobile"</label>
                        <input
                            type="tel"
                            id="mobile"
                            prop:value=move || form.get().mobile
                            on:input=move |ev| form.update(|f| f.mobile = event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="gender">"Gender"</label>
                        <select
                            id="gender"
                            on:change=move |ev| {
                                form.update(|f| f.gender = optional(event_target_value(&ev)))
                            }
                        >
                            <option value="">"—"</option>
                            <option value="MALE">"Male"</option>
                            <option value="FEMALE">"Female"</option>
                            <option value="OTHER">"Other"</option>
                        </select>
                    </div>
                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || form.get().password
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="confirm-password">"Confirm Password"</label>
                        <input
                            type="password"
                            id="confirm-password"
                            prop:value=move || confirm_password.get()
                            on:input=move |ev| set_confirm_password.set(event_target_value(&ev))
                            required
                        />
                    </div>
                    <div class="form-group">
                        <label for="city">"City"</label>
                        <input
                            type="text"
                            id="city"
                            on:input=move |ev| {
                                form.update(|f| f.city = optional(event_target_value(&ev)))
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
                    <div class="form-group form-group--wide">
                        <label for="address">"Address"</label>
                        <textarea
                            id="address"
                            rows="2"
                            on:input=move |ev| {
                                form.update(|f| f.address = optional(event_target_value(&ev)))
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
                        {move || if saving.get() { "Creating…" } else { "Create User" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
