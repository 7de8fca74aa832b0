use serde::{Deserialize, Serialize};

/// The ten steps of the government rooftop-solar application workflow.
///
/// [`StageSlug::ORDER`] is the business-process order; every tracker and
/// filter renders stages in this order regardless of how the backend
/// happens to return the records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StageSlug {
    Registration,
    Application,
    Feasibility,
    VendorSelection,
    UploadAgreement,
    Installation,
    Inspection,
    ProjectCommissioning,
    SubsidyRequest,
    SubsidyDisbursal,
    /// Stage identifiers this console does not know. Records carrying one
    /// are ignored by the tracker and never match a stage filter.
    #[serde(other)]
    Unknown,
}

impl Default for StageSlug {
    fn default() -> Self {
        StageSlug::Unknown
    }
}

impl StageSlug {
    /// The fixed stage catalogue, in process order.
    pub const ORDER: [StageSlug; 10] = [
        StageSlug::Registration,
        StageSlug::Application,
        StageSlug::Feasibility,
        StageSlug::VendorSelection,
        StageSlug::UploadAgreement,
        StageSlug::Installation,
        StageSlug::Inspection,
        StageSlug::ProjectCommissioning,
        StageSlug::SubsidyRequest,
        StageSlug::SubsidyDisbursal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StageSlug::Registration => "Registration",
            StageSlug::Application => "Application",
            StageSlug::Feasibility => "Feasibility",
            StageSlug::VendorSelection => "Vendor Selection",
            StageSlug::UploadAgreement => "Upload Agreement",
            StageSlug::Installation => "Installation",
            StageSlug::Inspection => "Inspection",
            StageSlug::ProjectCommissioning => "Project Commissioning",
            StageSlug::SubsidyRequest => "Subsidy Request",
            StageSlug::SubsidyDisbursal => "Subsidy Disbursal",
            StageSlug::Unknown => "Unknown",
        }
    }

    /// Party responsible for moving the stage forward.
    pub fn responsible(&self) -> &'static str {
        match self {
            StageSlug::Registration => "Consumer",
            StageSlug::Application => "Consumer",
            StageSlug::Feasibility => "Discom",
            StageSlug::VendorSelection => "Consumer",
            StageSlug::UploadAgreement => "Vendor",
            StageSlug::Installation => "Vendor",
            StageSlug::Inspection => "Discom",
            StageSlug::ProjectCommissioning => "Discom",
            StageSlug::SubsidyRequest => "Consumer",
            StageSlug::SubsidyDisbursal => "REC",
            StageSlug::Unknown => "—",
        }
    }

    /// Wire value as the backend stores it.
    pub fn as_str(&self) -> &'static str {
        match self {
            StageSlug::Registration => "REGISTRATION",
            StageSlug::Application => "APPLICATION",
            StageSlug::Feasibility => "FEASIBILITY",
            StageSlug::VendorSelection => "VENDOR_SELECTION",
            StageSlug::UploadAgreement => "UPLOAD_AGREEMENT",
            StageSlug::Installation => "INSTALLATION",
            StageSlug::Inspection => "INSPECTION",
            StageSlug::ProjectCommissioning => "PROJECT_COMMISSIONING",
            StageSlug::SubsidyRequest => "SUBSIDY_REQUEST",
            StageSlug::SubsidyDisbursal => "SUBSIDY_DISBURSAL",
            StageSlug::Unknown => "UNKNOWN",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        StageSlug::ORDER.iter().copied().find(|s| s.as_str() == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_is_process_ordered() {
        assert_eq!(StageSlug::ORDER.len(), 10);
        assert_eq!(StageSlug::ORDER[0], StageSlug::Registration);
        assert_eq!(StageSlug::ORDER[9], StageSlug::SubsidyDisbursal);
    }

    #[test]
    fn wire_format_round_trips() {
        for slug in StageSlug::ORDER {
            let json = serde_json::to_string(&slug).unwrap();
            assert_eq!(json, format!("\"{}\"", slug.as_str()));
            let back: StageSlug = serde_json::from_str(&json).unwrap();
            assert_eq!(back, slug);
        }
    }

    #[test]
    fn unknown_identifiers_degrade_instead_of_failing() {
        let parsed: StageSlug = serde_json::from_str("\"JANSAMARTH_BALANCE\"").unwrap();
        assert_eq!(parsed, StageSlug::Unknown);
        assert_eq!(StageSlug::from_value("JANSAMARTH_BALANCE"), None);
    }
}
