use serde::{Deserialize, Serialize};

/// Aggregate counters for the landing dashboard, computed server-side.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    #[serde(default)]
    pub customers: i64,
    #[serde(default)]
    pub field_agents: i64,
    #[serde(default)]
    pub sub_admins: i64,
    #[serde(default)]
    pub pending_quotations: i64,
    #[serde(default)]
    pub accepted_quotations: i64,
    #[serde(default)]
    pub rejected_quotations: i64,
    #[serde(default)]
    pub products: i64,
    #[serde(default)]
    pub orders: i64,
    #[serde(default)]
    pub lead_summary: LeadSummary,
    #[serde(default)]
    pub lead_stage_summary: LeadStageSummary,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSummary {
    #[serde(default)]
    pub pending: i64,
    #[serde(default)]
    pub assigned: i64,
    #[serde(default)]
    pub completed: i64,
    #[serde(default)]
    pub cancelled: i64,
}

/// Legacy operational buckets still reported by the backend; rendered
/// verbatim, not derived from the ten-stage catalogue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadStageSummary {
    #[serde(default)]
    pub payment_pending: i64,
    #[serde(default)]
    pub installation_incomplete: i64,
    #[serde(default)]
    pub bank_balance: i64,
    #[serde(default)]
    pub lead_lost: i64,
    #[serde(default)]
    pub document_pending: i64,
    #[serde(default)]
    pub inspection_waiting: i64,
    #[serde(default)]
    pub site_technical_issue: i64,
    #[serde(default)]
    pub feasibility_balance: i64,
    #[serde(default)]
    pub waiting_for_subsidy: i64,
    #[serde(default)]
    pub jansamarth_balance: i64,
    #[serde(default)]
    pub completed: i64,
}
