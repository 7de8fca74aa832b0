use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::d400_overview::ui::DashboardPage;
use crate::domain::a001_vendor::ui::list::VendorListPage;
use crate::domain::a002_user::ui::details::UserDetailsPage;
use crate::domain::a002_user::ui::list::{
    CustomerListPage, FieldAgentListPage, SubAdminListPage, UserListPage,
};
use crate::domain::a002_user::ui::new::UserNewPage;
use crate::domain::a003_brand::ui::list::BrandListPage;
use crate::domain::a004_category::ui::list::CategoryListPage;
use crate::domain::a005_product::ui::list::ProductListPage;
use crate::domain::a006_order::ui::list::OrderListPage;
use crate::domain::a007_quotation::ui::list::QuotationListPage;
use crate::domain::a008_cancel_reason::ui::list::CancelReasonListPage;
use crate::domain::a009_cms::ui::banners::BannerListPage;
use crate::domain::a009_cms::ui::faqs::FaqListPage;
use crate::domain::a009_cms::ui::pages::CmsPageListPage;
use crate::domain::a010_service_lead::ui::details::ServiceLeadDetailsPage;
use crate::domain::a010_service_lead::ui::list::ServiceLeadListPage;
use crate::domain::a010_service_lead::ui::new::ServiceLeadNewPage;
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=DashboardPage />
                    <Route path=path!("/vendors") view=VendorListPage />
                    <Route path=path!("/users") view=UserListPage />
                    <Route path=path!("/users/customers") view=CustomerListPage />
                    <Route path=path!("/users/field-agents") view=FieldAgentListPage />
                    <Route path=path!("/users/sub-admins") view=SubAdminListPage />
                    <Route path=path!("/users/new") view=UserNewPage />
                    <Route path=path!("/users/:id") view=UserDetailsPage />
                    <Route path=path!("/brands") view=BrandListPage />
                    <Route path=path!("/categories") view=CategoryListPage />
                    <Route path=path!("/cancel-reasons") view=CancelReasonListPage />
                    <Route path=path!("/products") view=ProductListPage />
                    <Route path=path!("/orders") view=OrderListPage />
                    <Route path=path!("/quotations") view=QuotationListPage />
                    <Route path=path!("/cms/pages") view=CmsPageListPage />
                    <Route path=path!("/cms/faq") view=FaqListPage />
                    <Route path=path!("/cms/top-banners") view=BannerListPage />
                    <Route path=path!("/service-leads") view=ServiceLeadListPage />
                    <Route path=path!("/service-leads/new") view=ServiceLeadNewPage />
                    <Route path=path!("/service-leads/:id") view=ServiceLeadDetailsPage />
                </Routes>
            </Shell>
        </Router>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let (auth_state, _) = use_auth();

    view! {
        <Show
            when=move || auth_state.get().token.is_some()
            fallback=|| view! { <LoginPage /> }
        >
            <MainLayout />
        </Show>
    }
}
