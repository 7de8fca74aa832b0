use serde::{Deserialize, Serialize};

/// Per-stage progress state. Transitions happen only through an explicit
/// operator update; the console never advances a stage on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StageStatus {
    InProgress,
    Completed,
    /// Also the fallback for statuses this console does not recognize:
    /// malformed stage data degrades to Pending rather than erroring.
    #[default]
    #[serde(other)]
    Pending,
}

impl StageStatus {
    pub const ALL: [StageStatus; 3] = [
        StageStatus::Pending,
        StageStatus::InProgress,
        StageStatus::Completed,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StageStatus::Pending => "Pending",
            StageStatus::InProgress => "In Progress",
            StageStatus::Completed => "Completed",
        }
    }

    /// Glyph shown inside the tracker circle.
    pub fn icon(&self) -> &'static str {
        match self {
            StageStatus::Pending => "○",
            StageStatus::InProgress => "●",
            StageStatus::Completed => "✓",
        }
    }

    /// Badge variant used by the shared `Badge` component.
    pub fn badge_variant(&self) -> &'static str {
        match self {
            StageStatus::Pending => "neutral",
            StageStatus::InProgress => "primary",
            StageStatus::Completed => "success",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StageStatus::Pending => "PENDING",
            StageStatus::InProgress => "IN_PROGRESS",
            StageStatus::Completed => "COMPLETED",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        StageStatus::ALL.iter().copied().find(|s| s.as_str() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_round_trips() {
        for status in StageStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            let back: StageStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
        }
    }

    #[test]
    fn malformed_status_degrades_to_pending() {
        let parsed: StageStatus = serde_json::from_str("\"ON_HOLD\"").unwrap();
        assert_eq!(parsed, StageStatus::Pending);
    }
}
