use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Rfq {
    pub id: String,
    pub item_name: String,
    pub company_id: Option<String>,
    pub user_id: Option<String>,
    pub quantity: Option<i64>,
    pub unit: Option<String>,
    pub description: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}
