use serde::{Deserialize, Serialize};

use crate::domain::common::PersonRef;
use crate::enums::{LeadStatus, ProjectType, StageSlug, StageStatus};

/// Distribution company a lead is registered under.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Discom {
    pub id: String,
    pub name: String,
    pub circle: Option<String>,
    pub division: Option<String>,
    pub sub_division: Option<String>,
    pub state: Option<String>,
    pub district: Option<String>,
}

/// Persisted status of one catalogue stage for one lead. A lead may carry
/// zero, some, or all ten records; a missing record reads as Pending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationStage {
    pub id: String,
    pub service_lead_id: String,
    #[serde(default)]
    pub stage_slug: StageSlug,
    #[serde(default)]
    pub status: StageStatus,
    pub completed_at: Option<String>,
    pub notes: Option<String>,
}

/// A tracked solar-installation application. `status` is assigned by the
/// backend independently of the stage records; both are displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLead {
    pub id: String,
    pub service_id: String,
    #[serde(default)]
    pub discom_id: Option<String>,
    #[serde(default)]
    pub discom: Option<Discom>,
    pub consumer_name: String,
    pub consumer_phone: String,
    #[serde(default)]
    pub consumer_id_ref: Option<String>,
    #[serde(default)]
    pub approved_capacity_kwp: Option<String>,
    #[serde(default)]
    pub existing_installed_capacity_kwp: Option<String>,
    #[serde(default)]
    pub installed_pv_capacity_kwp: Option<String>,
    #[serde(default)]
    pub subsidy_amount_rs: Option<String>,
    #[serde(default)]
    pub circle: Option<String>,
    #[serde(default)]
    pub division: Option<String>,
    #[serde(default)]
    pub sub_division: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub pin_code: Option<String>,
    #[serde(default)]
    pub stages: Vec<ApplicationStage>,
    #[serde(default)]
    pub customer: Option<PersonRef>,
    #[serde(default)]
    pub field_agent: Option<PersonRef>,
    #[serde(default)]
    pub project_type: Option<ProjectType>,
    #[serde(default)]
    pub status: LeadStatus,
    pub created_at: String,
    pub updated_at: String,
}

/// Body of the single-stage upsert `PUT /service-leads/:id/stages`. The
/// backend validates the slug; the console sends it as picked.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageUpdateRequest {
    pub stage_slug: StageSlug,
    pub status: StageStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Server-side filters for `GET /service-leads`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLeadListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
}

/// Payload for `POST /service-leads` (manual lead entry).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceLeadCreate {
    pub consumer_name: String,
    pub consumer_phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discom_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_capacity_kwp: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub district: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub village: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_code: Option<String>,
}

/// Uploaded document attached to a lead. Storage itself lives elsewhere;
/// the console only lists and unlinks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadDocument {
    pub id: String,
    pub service_lead_id: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub file_name: String,
    pub file_url: String,
    pub uploaded_by: Option<String>,
    pub approved: bool,
    pub approved_by: Option<String>,
    pub score: Option<f64>,
    pub created_at: String,
    pub updated_at: String,
}
