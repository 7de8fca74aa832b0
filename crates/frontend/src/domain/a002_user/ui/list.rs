use contracts::domain::a002_user::dto::BaseUser;
use contracts::enums::UserRole;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a002_user::api;
use crate::shared::components::empty_state::EmptyState;
use crate::shared::components::error_box::ErrorBox;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::Badge;
use crate::shared::icons::icon;
use crate::shared::list_utils::status_variant;
use crate::system::auth::context::use_api_context;

/// All users with a free role dropdown.
#[component]
pub fn UserListPage() -> impl IntoView {
    view! { <UserList /> }
}

/// Pre-filtered routes, mirroring the dedicated screens the operators
/// deep-link to.
#[component]
pub fn CustomerListPage() -> impl IntoView {
    view! { <UserList preset_role=UserRole::Customer /> }
}

#[component]
pub fn FieldAgentListPage() -> impl IntoView {
    view! { <UserList preset_role=UserRole::FieldAgent /> }
}

#[component]
pub fn SubAdminListPage() -> impl IntoView {
    view! { <UserList preset_role=UserRole::SubAdmin /> }
}

fn page_title(preset_role: Option<UserRole>) -> &'static str {
    match preset_role {
        Some(UserRole::Customer) => "Customers",
        Some(UserRole::FieldAgent) => "Field Agents",
        Some(UserRole::SubAdmin) => "Sub Admins",
        Some(UserRole::SuperAdmin) => "Super Admins",
        _ => "Users",
    }
}

/// Shared list body. A preset role locks the server-side filter and
/// drops the dropdown; otherwise the operator picks one.
#[component]
fn UserList(#[prop(optional)] preset_role: Option<UserRole>) -> impl IntoView {
    let ctx = use_api_context();
    let navigate = use_navigate();
    let (items, set_items) = signal(Vec::<BaseUser>::new());
    let (error, set_error) = signal(None::<String>);
    let initial_role = preset_role.map(|r| r.as_str()).unwrap_or("ALL");
    let (role_filter, set_role_filter) = signal(String::from(initial_role));
    let (search, set_search) = signal(String::new());

    // Role filter is applied server-side; search narrows client-side.
    Effect::new({
        let ctx = ctx.clone();
        move |_| {
            let role = role_filter.get();
            let ctx = ctx.clone();
            spawn_local(async move {
                let role = if role == "ALL" { None } else { Some(role.as_str()) };
                match api::fetch_users(&ctx, role).await {
                    Ok(v) => {
                        set_items.set(v);
                        set_error.set(None);
                    }
                    Err(e) => set_error.set(Some(e)),
                }
            });
        }
    });

    let visible = move || {
        let term = search.get().to_lowercase();
        items
            .get()
            .into_iter()
            .filter(|u| {
                term.is_empty()
                    || u.email.to_lowercase().contains(&term)
                    || u.display_name().to_lowercase().contains(&term)
            })
            .collect::<Vec<_>>()
    };

    let go_new = {
        let navigate = navigate.clone();
        move |_| navigate("/users/new", Default::default())
    };

    view! {
        <div class="page">
            <PageHeader
                title=page_title(preset_role)
                subtitle="Customers, field agents, and administrators"
            >
                <button class="button button--primary" on:click=go_new>
                    {icon("plus")}
                    "New User"
                </button>
            </PageHeader>

            <div class="filter-bar">
                <div class="filter-bar__search">
                    {icon("search")}
                    <input
                        type="text"
                        placeholder="Search by name or email…"
                        prop:value=move || search.get()
                        on:input=move |ev| set_search.set(event_target_value(&ev))
                    />
                </div>
                <Show when=move || preset_role.is_none()>
                    <select
                        class="filter-bar__select"
                        on:change=move |ev| set_role_filter.set(event_target_value(&ev))
                    >
                        <option value="ALL">"All Roles"</option>
                        <option value="CUSTOMER">"Customers"</option>
                        <option value="FIELD_AGENT">"Field Agents"</option>
                        <option value="SUB_ADMIN">"Sub Admins"</option>
                        <option value="SUPER_ADMIN">"Super Admins"</option>
                    </select>
                </Show>
            </div>

            {move || error.get().map(|e| view! { <ErrorBox message=e /> })}

            <Show
                when=move || !items.get().is_empty()
                fallback=move || view! { <EmptyState message="No users found." /> }
            >
                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Name"</th>
                                <th class="table__header-cell">"Email"</th>
                                <th class="table__header-cell">"Phone"</th>
                                <th class="table__header-cell">"Role"</th>
                                <th class="table__header-cell">"Vendor"</th>
                                <th class="table__header-cell">"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {
                                let navigate = navigate.clone();
                                move || {
                                    let navigate = navigate.clone();
                                    visible()
                                        .into_iter()
                                        .map(|u| {
                                            let navigate = navigate.clone();
                                            let id = u.id.clone();
                                            view! {
                                                <tr
                                                    class="table__row table__row--clickable"
                                                    on:click=move |_| {
                                                        navigate(
                                                            &format!("/users/{}", urlencoding::encode(&id)),
                                                            Default::default(),
                                                        )
                                                    }
                                                >
                                                    <td class="table__cell">{u.display_name().to_string()}</td>
                                                    <td class="table__cell">{u.email.clone()}</td>
                                                    <td class="table__cell">
                                                        {u.phone.clone().unwrap_or_else(|| "—".into())}
                                                    </td>
                                                    <td class="table__cell">
                                                        <Badge variant="neutral">{u.role.label()}</Badge>
                                                    </td>
                                                    <td class="table__cell">
                                                        {u.vendor.clone().map(|v| v.name).unwrap_or_else(|| "—".into())}
                                                    </td>
                                                    <td class="table__cell">
                                                        <Badge variant=status_variant(&u.status)>{u.status.clone()}</Badge>
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
