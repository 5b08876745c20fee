use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dto::catalog_dto::CreateCategoryPayload;
use crate::error::{Error, Result};
use crate::models::category::{ItemCategory, CATEGORY_TYPE_TENDER};
use crate::models::company::CompanyType;
use crate::models::location::{Location, Unit};

/// Reference data: categories, company types, cities and units.
#[derive(Clone)]
pub struct CatalogService {
    pool: SqlitePool,
}

impl CatalogService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn list_categories(&self) -> Result<Vec<ItemCategory>> {
        let rows = sqlx::query_as::<_, ItemCategory>(
            "SELECT id, category, type, parent_id FROM item_category ORDER BY rowid",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn list_tender_categories(&self) -> Result<Vec<ItemCategory>> {
        let rows = sqlx::query_as::<_, ItemCategory>(
            "SELECT id, category, type, parent_id FROM item_category WHERE type = ? ORDER BY rowid",
        )
        .bind(CATEGORY_TYPE_TENDER)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn create_category(&self, payload: CreateCategoryPayload) -> Result<ItemCategory> {
        if let Some(parent_id) = payload.parent_id.as_deref() {
            let parent = sqlx::query_scalar::<_, String>("SELECT id FROM item_category WHERE id = ?")
                .bind(parent_id)
                .fetch_optional(&self.pool)
                .await?;
            if parent.is_none() {
                return Err(Error::BadRequest(format!("Unknown parent category {}", parent_id)));
            }
        }
        let id = payload
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let row = sqlx::query_as::<_, ItemCategory>(
            r#"
            INSERT INTO item_category (id, category, type, parent_id)
            VALUES (?, ?, ?, ?)
            RETURNING id, category, type, parent_id
            "#,
        )
        .bind(&id)
        .bind(&payload.category)
        .bind(&payload.category_type)
        .bind(&payload.parent_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    /// Inserts a category unless one with the same id already exists.
    pub async fn ensure_category(&self, id: &str, category: &str, category_type: &str) -> Result<()> {
        sqlx::query("INSERT OR IGNORE INTO item_category (id, category, type) VALUES (?, ?, ?)")
            .bind(id)
            .bind(category)
            .bind(category_type)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn list_company_types(&self) -> Result<Vec<CompanyType>> {
        let rows = sqlx::query_as::<_, CompanyType>("SELECT id, name FROM company_types ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn ensure_company_type(&self, id: &str, name: &str) -> Result<CompanyType> {
        sqlx::query("INSERT OR IGNORE INTO company_types (id, name) VALUES (?, ?)")
            .bind(id)
            .bind(name)
            .execute(&self.pool)
            .await?;
        let row = sqlx::query_as::<_, CompanyType>("SELECT id, name FROM company_types WHERE name = ?")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    pub async fn list_cities(&self) -> Result<Vec<Location>> {
        let rows = sqlx::query_as::<_, Location>("SELECT id, city, region FROM locations ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn ensure_city(&self, id: &str, city: &str, region: Option<&str>) -> Result<()> {
        sqlx::query("INSERT OR IGNORE INTO locations (id, city, region) VALUES (?, ?, ?)")
            .bind(id)
            .bind(city)
            .bind(region)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn list_units(&self) -> Result<Vec<Unit>> {
        let rows = sqlx::query_as::<_, Unit>("SELECT id, name FROM units ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn ensure_unit(&self, id: &str, name: &str) -> Result<()> {
        sqlx::query("INSERT OR IGNORE INTO units (id, name) VALUES (?, ?)")
            .bind(id)
            .bind(name)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}
