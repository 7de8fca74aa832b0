use serde::{Deserialize, Serialize};

/// Top-level lead status as assigned by the backend. Independent of the
/// stage records: the two signals coexist and are both displayed, never
/// reconciled locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LeadStatus {
    Assigned,
    Completed,
    Cancelled,
    #[default]
    #[serde(other)]
    Pending,
}

impl LeadStatus {
    pub const ALL: [LeadStatus; 4] = [
        LeadStatus::Pending,
        LeadStatus::Assigned,
        LeadStatus::Completed,
        LeadStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LeadStatus::Pending => "Pending",
            LeadStatus::Assigned => "Assigned",
            LeadStatus::Completed => "Completed",
            LeadStatus::Cancelled => "Cancelled",
        }
    }

    pub fn badge_variant(&self) -> &'static str {
        match self {
            LeadStatus::Pending => "neutral",
            LeadStatus::Assigned => "primary",
            LeadStatus::Completed => "success",
            LeadStatus::Cancelled => "error",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::Pending => "PENDING",
            LeadStatus::Assigned => "ASSIGNED",
            LeadStatus::Completed => "COMPLETED",
            LeadStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        LeadStatus::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}
