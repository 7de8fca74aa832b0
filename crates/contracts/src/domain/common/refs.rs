use serde::{Deserialize, Serialize};

/// Embedded snapshot the backend attaches next to a foreign key so lists
/// can render a name without a second round trip.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IdName {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Person snapshot (customer, field agent, team lead). The backend is not
/// consistent about which of these fields it embeds, so all are optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PersonRef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl PersonRef {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("—")
    }
}
