use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::company::Company;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyPayload {
    #[validate(length(min = 1, message = "Company name is required"))]
    pub name: String,
    pub type_id: Option<String>,
    pub company_type: Option<String>,
    pub address: Option<String>,
    pub logo_url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyPayload {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    pub type_id: Option<String>,
    pub company_type: Option<String>,
    pub address: Option<String>,
    pub logo_url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub website: Option<String>,
}

/// Company as it appears in search results, with display defaults filled in.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySearchResult {
    pub id: String,
    pub name: String,
    pub description: String,
    pub location: String,
    pub company_type: String,
    pub logo_url: Option<String>,
    pub is_verified: bool,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub user_id: Option<String>,
    pub type_id: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<Company> for CompanySearchResult {
    fn from(c: Company) -> Self {
        Self {
            id: c.id,
            name: c.name,
            description: c.description.unwrap_or_default(),
            location: c.location.unwrap_or_default(),
            company_type: c
                .company_type
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "General".to_string()),
            logo_url: c.logo_url,
            is_verified: c.is_verified,
            email: c.email,
            phone: c.phone,
            user_id: c.user_id,
            type_id: c.type_id,
            address: c.address,
            website: c.website,
            created_at: c.created_at,
        }
    }
}
