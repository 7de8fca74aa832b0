//! Sidebar with role-filtered navigation items.

use contracts::enums::UserRole;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use super::sidebar_state::SidebarState;
use crate::shared::icons::icon;
use crate::system::auth::context::current_role;

#[derive(Clone, Copy)]
struct MenuItem {
    href: &'static str,
    label: &'static str,
    icon: &'static str,
    roles: &'static [UserRole],
}

const EVERYONE: &[UserRole] = &[
    UserRole::SystemAdmin,
    UserRole::SuperAdmin,
    UserRole::SubAdmin,
    UserRole::FieldAgent,
    UserRole::Customer,
];

const STAFF: &[UserRole] = &[
    UserRole::SystemAdmin,
    UserRole::SuperAdmin,
    UserRole::SubAdmin,
    UserRole::FieldAgent,
];

const ADMINS: &[UserRole] = &[
    UserRole::SystemAdmin,
    UserRole::SuperAdmin,
    UserRole::SubAdmin,
];

const MENU: &[MenuItem] = &[
    MenuItem { href: "/", label: "Dashboard", icon: "dashboard", roles: EVERYONE },
    MenuItem { href: "/users", label: "Users", icon: "users", roles: STAFF },
    MenuItem { href: "/users/customers", label: "Customers", icon: "user", roles: STAFF },
    MenuItem { href: "/users/field-agents", label: "Field Agents", icon: "user", roles: ADMINS },
    MenuItem { href: "/users/sub-admins", label: "Sub Admins", icon: "user", roles: ADMINS },
    MenuItem { href: "/service-leads", label: "Service Leads", icon: "file-text", roles: EVERYONE },
    MenuItem { href: "/vendors", label: "Vendors", icon: "store", roles: ADMINS },
    MenuItem { href: "/brands", label: "Brands", icon: "tag", roles: ADMINS },
    MenuItem { href: "/categories", label: "Categories", icon: "grid", roles: ADMINS },
    MenuItem { href: "/products", label: "Products", icon: "package", roles: ADMINS },
    MenuItem { href: "/quotations", label: "Quotations", icon: "file-text", roles: EVERYONE },
    MenuItem { href: "/orders", label: "Orders", icon: "shopping-cart", roles: EVERYONE },
    MenuItem { href: "/cms/pages", label: "CMS Pages", icon: "layout", roles: ADMINS },
    MenuItem { href: "/cms/faq", label: "FAQ", icon: "help-circle", roles: ADMINS },
    MenuItem { href: "/cms/top-banners", label: "Banners", icon: "image", roles: ADMINS },
    MenuItem { href: "/cancel-reasons", label: "Reasons", icon: "x-circle", roles: ADMINS },
];

#[component]
pub fn Sidebar() -> impl IntoView {
    let state = use_context::<SidebarState>().expect("SidebarState not found in context");
    let role = current_role();
    let location = use_location();

    let aside_class = move || {
        if state.collapsed.get() {
            "sidebar sidebar--collapsed"
        } else {
            "sidebar"
        }
    };

    view! {
        <aside class=aside_class>
            <div class="sidebar__brand">
                <span class="sidebar__brand-mark">"☀"</span>
                <span class="sidebar__brand-name">"Solar Services"</span>
            </div>
            <nav class="sidebar__nav">
                <ul>
                    {move || {
                        let current = role.get();
                        MENU
                            .iter()
                            .filter(|item| item.roles.contains(&current))
                            .map(|item| {
                                let item = *item;
                                let location = location.clone();
                                let active = move || {
                                    let path = location.pathname.get();
                                    if item.href == "/" {
                                        path == "/"
                                    } else {
                                        path == item.href
                                            || path.starts_with(&format!("{}/", item.href))
                                    }
                                };
                                view! {
                                    <li
                                        class="sidebar__item"
                                        class:sidebar__item--active=active
                                    >
                                        <A href=item.href>
                                            {icon(item.icon)}
                                            <span class="sidebar__item-label">{item.label}</span>
                                        </A>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </nav>
        </aside>
    }
}
