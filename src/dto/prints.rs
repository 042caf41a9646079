use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{entity::prints::Technique, models::Print};

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePrintRequest {
    pub name: String,
    pub description: Option<String>,
    pub file_url: Option<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub positions: Vec<String>,
    /// Defaults to silk.
    pub technique: Option<Technique>,
    pub dimensions: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePrintRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub file_url: Option<String>,
    pub colors: Option<Vec<String>>,
    pub positions: Option<Vec<String>>,
    pub technique: Option<Technique>,
    pub dimensions: Option<String>,
    pub active: Option<bool>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PrintList {
    pub items: Vec<Print>,
}
