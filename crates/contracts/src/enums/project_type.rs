use serde::{Deserialize, Serialize};

/// Kind of solar project a lead or order concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectType {
    NewInstallation,
    Upgrade,
    Amc,
    Residential,
    Commercial,
    #[serde(other)]
    Other,
}

impl ProjectType {
    /// The types offered in filter dropdowns; `Other` is display-only.
    pub const ALL: [ProjectType; 5] = [
        ProjectType::NewInstallation,
        ProjectType::Upgrade,
        ProjectType::Amc,
        ProjectType::Residential,
        ProjectType::Commercial,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::NewInstallation => "New Installation",
            ProjectType::Upgrade => "Upgrade",
            ProjectType::Amc => "AMC",
            ProjectType::Residential => "Residential",
            ProjectType::Commercial => "Commercial",
            ProjectType::Other => "Other",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::NewInstallation => "NEW_INSTALLATION",
            ProjectType::Upgrade => "UPGRADE",
            ProjectType::Amc => "AMC",
            ProjectType::Residential => "RESIDENTIAL",
            ProjectType::Commercial => "COMMERCIAL",
            ProjectType::Other => "OTHER",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        ProjectType::ALL.iter().copied().find(|t| t.as_str() == value)
    }
}
