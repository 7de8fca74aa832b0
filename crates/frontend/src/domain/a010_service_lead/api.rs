use contracts::domain::a010_service_lead::dto::{
    ApplicationStage, LeadDocument, ServiceLead, ServiceLeadCreate, ServiceLeadListParams,
    StageUpdateRequest,
};

use crate::shared::api_utils::{query_string, ApiContext};

pub async fn fetch_service_leads(
    ctx: &ApiContext,
    params: &ServiceLeadListParams,
) -> Result<Vec<ServiceLead>, String> {
    ctx.get_json(&format!("/service-leads{}", query_string(params)))
        .await
}

pub async fn fetch_service_lead(ctx: &ApiContext, id: &str) -> Result<ServiceLead, String> {
    ctx.get_json(&format!("/service-leads/{}", urlencoding::encode(id)))
        .await
}

pub async fn create_service_lead(
    ctx: &ApiContext,
    payload: &ServiceLeadCreate,
) -> Result<ServiceLead, String> {
    ctx.post_json("/service-leads", payload).await
}

/// The sole write path for stage state: a single-stage upsert. The stage
/// slug is not validated locally; a backend rejection surfaces verbatim.
pub async fn update_stage(
    ctx: &ApiContext,
    lead_id: &str,
    request: &StageUpdateRequest,
) -> Result<ApplicationStage, String> {
    ctx.put_json(
        &format!("/service-leads/{}/stages", urlencoding::encode(lead_id)),
        request,
    )
    .await
}

pub async fn fetch_documents(ctx: &ApiContext, lead_id: &str) -> Result<Vec<LeadDocument>, String> {
    ctx.get_json(&format!(
        "/service-leads/{}/documents",
        urlencoding::encode(lead_id)
    ))
    .await
}

pub async fn delete_document(ctx: &ApiContext, document_id: &str) -> Result<(), String> {
    ctx.delete(&format!("/documents/{}", urlencoding::encode(document_id)))
        .await
}
