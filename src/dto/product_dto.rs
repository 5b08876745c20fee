use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::item::ItemWithRelations;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateItemPayload {
    #[validate(length(min = 1, message = "Product name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "Company is required"))]
    pub company_id: String,
    #[validate(length(min = 1, message = "Category is required"))]
    pub category_id: String,
    pub price: Option<f64>,
    pub unit: String,
    pub description: Option<String>,
    pub image_urls: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItemPayload {
    #[validate(length(min = 1))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub company_id: Option<String>,
    #[validate(length(min = 1))]
    pub category_id: Option<String>,
    pub price: Option<f64>,
    pub unit: Option<String>,
    pub description: Option<String>,
    pub image_urls: Option<Vec<String>>,
}

/// Listing shape: the item plus denormalized company and category names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub company_id: Option<String>,
    pub user_id: Option<String>,
    pub category_id: Option<String>,
    pub price: Option<f64>,
    pub unit: Option<String>,
    pub description: Option<String>,
    pub image_urls: Vec<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub company_name: String,
    pub category_name: String,
    pub company_phone: String,
    pub company_email: String,
}

impl From<ItemWithRelations> for ProductResponse {
    fn from(row: ItemWithRelations) -> Self {
        let image_urls = row.image_url_list();
        Self {
            id: row.id,
            name: row.name,
            company_id: row.company_id,
            user_id: row.user_id,
            category_id: row.category_id,
            price: row.price,
            unit: row.unit,
            description: row.description,
            image_urls,
            created_at: row.created_at,
            company_name: row.company_name.unwrap_or_else(|| "N/A".to_string()),
            category_name: row
                .category_name
                .unwrap_or_else(|| "Uncategorized".to_string()),
            company_phone: row.company_phone.unwrap_or_default(),
            company_email: row.company_email.unwrap_or_default(),
        }
    }
}

/// Search shape: `company` and `category` carry names rather than ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchProduct {
    pub id: String,
    pub name: String,
    pub company: Option<String>,
    pub category: String,
    pub price: f64,
    pub unit: Option<String>,
    pub image_urls: Vec<String>,
    pub company_phone: String,
    pub company_email: String,
    pub description: Option<String>,
    pub is_owner: bool,
    pub user_id: Option<String>,
    pub company_id: Option<String>,
    pub category_id: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<ItemWithRelations> for SearchProduct {
    fn from(row: ItemWithRelations) -> Self {
        let image_urls = row.image_url_list();
        Self {
            id: row.id,
            name: row.name,
            company: row.company_name,
            category: row
                .category_name
                .unwrap_or_else(|| "Uncategorized".to_string()),
            price: row.price.unwrap_or(0.0),
            unit: row.unit,
            image_urls,
            company_phone: row.company_phone.unwrap_or_default(),
            company_email: row.company_email.unwrap_or_default(),
            description: row.description,
            is_owner: false,
            user_id: row.user_id,
            company_id: row.company_id,
            category_id: row.category_id,
            created_at: row.created_at,
        }
    }
}
