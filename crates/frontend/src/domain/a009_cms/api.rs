use contracts::domain::a009_cms::dto::{Banner, CmsPage, Faq};

use crate::shared::api_utils::ApiContext;

pub async fn fetch_pages(ctx: &ApiContext) -> Result<Vec<CmsPage>, String> {
    ctx.get_json("/cms/pages").await
}

pub async fn fetch_faqs(ctx: &ApiContext) -> Result<Vec<Faq>, String> {
    ctx.get_json("/cms/faqs").await
}

pub async fn fetch_banners(ctx: &ApiContext) -> Result<Vec<Banner>, String> {
    ctx.get_json("/cms/banners").await
}
