use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateRfqPayload {
    #[validate(length(min = 1, message = "Item name is required"))]
    pub item_name: String,
    pub company_id: Option<String>,
    #[validate(range(min = 1))]
    pub quantity: Option<i64>,
    pub unit: Option<String>,
    pub description: Option<String>,
}
