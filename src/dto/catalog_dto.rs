use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryPayload {
    pub id: Option<String>,
    #[validate(length(min = 1, message = "Category name is required"))]
    pub category: String,
    #[serde(rename = "type")]
    #[validate(length(min = 1, message = "Category type is required"))]
    pub category_type: String,
    pub parent_id: Option<String>,
}
