use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Units a listing may be priced in.
pub const ALLOWED_UNITS: &[&str] = &[
    "m²",
    "m³",
    "kg",
    "ton",
    "liter",
    "gallon",
    "bag",
    "quintal",
    "piece",
    "roll",
    "sheet",
    "bundle",
    "foot (ft)",
    "inch (in)",
    "lm",
    "Per Point",
    "Per hour",
    "Per day",
    "Per week",
    "Per month",
    "Per shift",
    "Per project (lumpsum)",
];

pub const MAX_ITEM_IMAGES: usize = 3;

/// An item row joined with the names of its company and category.
#[derive(Debug, Clone, FromRow)]
pub struct ItemWithRelations {
    pub id: String,
    pub name: String,
    pub company_id: Option<String>,
    pub user_id: Option<String>,
    pub category_id: Option<String>,
    pub price: Option<f64>,
    pub unit: Option<String>,
    pub description: Option<String>,
    pub image_urls: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub company_name: Option<String>,
    pub company_phone: Option<String>,
    pub company_email: Option<String>,
    pub category_name: Option<String>,
}

impl ItemWithRelations {
    /// Stored as a JSON text list; anything unreadable counts as no images.
    pub fn image_url_list(&self) -> Vec<String> {
        decode_image_urls(self.image_urls.as_deref())
    }
}

pub fn decode_image_urls(raw: Option<&str>) -> Vec<String> {
    raw.and_then(|s| serde_json::from_str::<Vec<String>>(s).ok())
        .unwrap_or_default()
}

pub fn encode_image_urls(urls: &[String]) -> serde_json::Result<String> {
    serde_json::to_string(urls)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
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
}

impl From<&ItemWithRelations> for Item {
    fn from(row: &ItemWithRelations) -> Self {
        Self {
            id: row.id.clone(),
            name: row.name.clone(),
            company_id: row.company_id.clone(),
            user_id: row.user_id.clone(),
            category_id: row.category_id.clone(),
            price: row.price,
            unit: row.unit.clone(),
            description: row.description.clone(),
            image_urls: row.image_url_list(),
            created_at: row.created_at,
        }
    }
}

pub fn is_allowed_unit(unit: &str) -> bool {
    ALLOWED_UNITS.contains(&unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_urls_tolerate_missing_and_garbage() {
        assert!(decode_image_urls(None).is_empty());
        assert!(decode_image_urls(Some("not json")).is_empty());
        assert_eq!(
            decode_image_urls(Some(r#"["/api/uploads/a.png"]"#)),
            vec!["/api/uploads/a.png".to_string()]
        );
    }

    #[test]
    fn units_are_a_closed_set() {
        assert!(is_allowed_unit("quintal"));
        assert!(is_allowed_unit("m²"));
        assert!(!is_allowed_unit("furlong"));
    }
}
