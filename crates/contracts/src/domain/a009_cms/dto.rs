use serde::{Deserialize, Serialize};

/// Static content page rendered on the customer-facing site.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CmsPage {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub date: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub id: String,
    pub title: Option<String>,
    pub image: String,
    pub link: Option<String>,
    pub position: Option<String>,
    pub status: String,
    pub created_at: String,
    pub updated_at: String,
}
