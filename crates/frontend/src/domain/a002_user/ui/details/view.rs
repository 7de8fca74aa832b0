use contracts::domain::a002_user::dto::{ActivityLog, BaseUser};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_params_map};

use super::view_model::UserDetailsViewModel;
use crate::domain::a002_user::api;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::info_row::InfoRow;
use crate::shared::components::ui::Badge;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_utils::status_variant;
use crate::system::auth::context::use_api_context;

#[component]
pub fn UserDetailsPage() -> impl IntoView {
    let ctx = use_api_context();
    let navigate = use_navigate();
    let params = use_params_map();
    let user_id = move || params.get().get("id").unwrap_or_default();

    let (user, set_user) = signal(None::<BaseUser>);
    let (logs, set_logs) = signal(Vec::<ActivityLog>::new());
    let (error, set_error) = signal(None::<String>);
    let (editing, set_editing) = signal(false);

    let vm = UserDetailsViewModel::new();

    // Fetch the user and its audit trail for the routed id.
    Effect::new({
        let ctx = ctx.clone();
        let vm = vm.clone();
        move |_| {
            let id = user_id();
            if id.is_empty() {
                return;
            }
            let ctx = ctx.clone();
            let vm = vm.clone();
            spawn_local(async move {
                match api::fetch_user(&ctx, &id).await {
                    Ok(u) => {
                        vm.load_from(&u);
                        set_user.set(Some(u));
                        set_error.set(None);
                    }
                    Err(e) => set_error.set(Some(e)),
                }
                if let Ok(entries) = api::fetch_activity_logs(&ctx, "USER", &id).await {
                    set_logs.set(entries);
                }
            });
        }
    });

    let on_saved = Callback::new(move |updated: BaseUser| {
        set_user.set(Some(updated));
        set_editing.set(false);
    });

    let on_save = {
        let ctx = ctx.clone();
        let vm = vm.clone();
        move |_| {
            vm.save_command(ctx.clone(), user_id(), on_saved);
        }
    };

    let on_delete = {
        let ctx = ctx.clone();
        let navigate = navigate.clone();
        move |_| {
            let confirmed = web_sys::window()
                .map(|w| {
                    w.confirm_with_message("Delete this user? This cannot be undone.")
                        .unwrap_or(false)
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            let ctx = ctx.clone();
            let navigate = navigate.clone();
            let id = user_id();
            spawn_local(async move {
                match api::delete_user(&ctx, &id).await {
                    Ok(()) => navigate("/users", Default::default()),
                    Err(e) => set_error.set(Some(e)),
                }
            });
        }
    };

    let back = {
        let navigate = navigate.clone();
        move |_| navigate("/users", Default::default())
    };

    let vm_view = vm.clone();

    view! {
        <div class="page">
            <div class="page-header">
                <div class="page-header__content">
                    <div class="page-header__text">
                        <h1 class="page-header__title">
                            {move || {
                                user.get()
                                    .map(|u| u.display_name().to_string())
                                    .unwrap_or_else(|| "User".to_string())
                            }}
                        </h1>
                        <div class="page-header__subtitle">"Account details and activity"</div>
                    </div>
                </div>
                <div class="page-header__actions">
                    <button class="button button--secondary" on:click=back>
                        {icon("arrow-left")}
                        "Back"
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=move |_| set_editing.update(|e| *e = !*e)
                    >
                        {icon("edit")}
                        {move || if editing.get() { "Cancel edit" } else { "Edit" }}
                    </button>
                    <button class="button button--danger" on:click=on_delete>
                        {icon("delete")}
                        "Delete"
                    </button>
                </div>
            </div>

            {move || error.get().map(|e| view! { <ErrorBox message=e /> })}

            {move || {
                user.get()
                    .map(|u| {
                        let profile = u.customer_profile.clone();
                        let agent_profile = u.field_agent_profile.clone();
                        view! {
                            <div class="card-grid">
                                <div class="card">
                                    <h3 class="card__title">"Account"</h3>
                                    <InfoRow label="Email" value=u.email.clone() />
                                    <InfoRow label="Phone" value=u.phone.clone().unwrap_or_default() />
                                    <InfoRow label="Role" value=u.role.label().to_string() />
                                    <div class="info-row">
                                        <span class="info-row__label">"Status"</span>
                                        <Badge variant=status_variant(&u.status)>{u.status.clone()}</Badge>
                                    </div>
                                    <InfoRow
                                        label="Vendor"
                                        value=u.vendor.clone().map(|v| v.name).unwrap_or_default()
                                    />
                                </div>

                                {profile.map(|p| view! {
                                    <div class="card">
                                        <h3 class="card__title">"Customer Profile"</h3>
                                        <InfoRow label="Mobile" value=p.mobile.clone() />
                                        <InfoRow label="City" value=p.city.clone().unwrap_or_default() />
                                        <InfoRow label="State" value=p.state.clone().unwrap_or_default() />
                                        <InfoRow label="Address" value=p.address.clone().unwrap_or_default() />
                                        <InfoRow
                                            label="Field Agent"
                                            value=p.field_agent.clone().map(|a| a.display_name().to_string()).unwrap_or_default()
                                        />
                                        <InfoRow
                                            label="Team Lead"
                                            value=p.team_lead.clone().map(|t| t.display_name().to_string()).unwrap_or_default()
                                        />
                                    </div>
                                })}

                                {agent_profile.map(|p| view! {
                                    <div class="card">
                                        <h3 class="card__title">"Field Agent Profile"</h3>
                                        <InfoRow label="Mobile" value=p.mobile.clone() />
                                        <InfoRow label="City" value=p.city.clone().unwrap_or_default() />
                                        <InfoRow label="State" value=p.state.clone().unwrap_or_default() />
                                        <InfoRow label="Address" value=p.address.clone().unwrap_or_default() />
                                    </div>
                                })}
                            </div>
                        }
                    })
            }}

            <Show when=move || editing.get()>
                {
                    let vm = vm_view.clone();
                    let on_save = on_save.clone();
                    move || {
                        let vm = vm.clone();
                        let vm_name = vm.clone();
                        let vm_phone = vm.clone();
                        let vm_status = vm.clone();
                        let vm_error = vm.clone();
                        let vm_saving = vm.clone();
                        let vm_valid = vm.clone();
                        let on_save = on_save.clone();
                        view! {
                            <div class="card details-form">
                                <h3 class="card__title">"Edit User"</h3>

                                {move || vm_error.error.get().map(|e| view! { <div class="error-message">{e}</div> })}

                                <div class="form-group">
                                    <label for="edit-name">"Name"</label>
                                    <input
                                        type="text"
                                        id="edit-name"
                                        prop:value={
                                            let vm = vm_name.clone();
                                            move || vm.form.get().name
                                        }
                                        on:input={
                                            let vm = vm_name.clone();
                                            move |ev| vm.form.update(|f| f.name = event_target_value(&ev))
                                        }
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="edit-phone">"Phone"</label>
                                    <input
                                        type="tel"
                                        id="edit-phone"
                                        prop:value={
                                            let vm = vm_phone.clone();
                                            move || vm.form.get().phone
                                        }
                                        on:input={
                                            let vm = vm_phone.clone();
                                            move |ev| vm.form.update(|f| f.phone = event_target_value(&ev))
                                        }
                                    />
                                </div>
                                <div class="form-group">
                                    <label for="edit-status">"Status"</label>
                                    <select
                                        id="edit-status"
                                        on:change={
                                            let vm = vm_status.clone();
                                            move |ev| vm.form.update(|f| f.status = event_target_value(&ev))
                                        }
                                    >
                                        <option value="ACTIVE">"Active"</option>
                                        <option value="INACTIVE">"Inactive"</option>
                                        <option value="BLOCKED">"Blocked"</option>
                                    </select>
                                </div>

                                <div class="details-actions">
                                    <button
                                        class="button button--primary"
                                        on:click=move |_| on_save(())
                                        disabled={
                                            move || vm_saving.saving.get() || !vm_valid.is_form_valid()()
                                        }
                                    >
                                        {icon("save")}
                                        "Save"
                                    </button>
                                </div>
                            </div>
                        }
                    }
                }
            </Show>

            <div class="card">
                <h3 class="card__title">"Recent Activity"</h3>
                <Show
                    when=move || !logs.get().is_empty()
                    fallback=|| view! { <p class="muted">"No recorded activity."</p> }
                >
                    <ul class="activity-list">
                        {move || {
                            logs.get()
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <li class="activity-list__item">
                                            <span class="activity-list__action">{entry.action.clone()}</span>
                                            <span class="activity-list__meta">
                                                {entry
                                                    .user
                                                    .clone()
                                                    .map(|u| u.display_name().to_string())
                                                    .unwrap_or_default()}
                                                " · "
                                                {format_datetime(&entry.created_at)}
                                            </span>
                                            {entry.details.clone().map(|d| view! {
                                                <span class="activity-list__details">{d}</span>
                                            })}
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </Show>
            </div>
        </div>
    }
}
