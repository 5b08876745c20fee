use sqlx::SqlitePool;
use uuid::Uuid;

use super::matches_query;
use crate::dto::product_dto::{CreateItemPayload, UpdateItemPayload};
use crate::error::{Error, Result};
use crate::models::item::{encode_image_urls, Item, ItemWithRelations};
use crate::utils::time::now;

const ITEM_WITH_RELATIONS: &str = r#"
    SELECT
        i.id, i.name, i.company_id, i.user_id, i.category_id, i.price, i.unit,
        i.description, i.image_urls, i.created_at,
        c.name AS company_name, c.phone AS company_phone, c.email AS company_email,
        cat.category AS category_name
    FROM items i
    LEFT JOIN companies c ON c.id = i.company_id
    LEFT JOIN item_category cat ON cat.id = i.category_id
"#;

#[derive(Clone)]
pub struct ItemService {
    pool: SqlitePool,
}

impl ItemService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: &str, payload: CreateItemPayload) -> Result<Item> {
        self.create_with_id(&Uuid::new_v4().to_string(), user_id, payload)
            .await
    }

    pub async fn create_with_id(
        &self,
        id: &str,
        user_id: &str,
        payload: CreateItemPayload,
    ) -> Result<Item> {
        sqlx::query(
            r#"
            INSERT INTO items (
                id, name, company_id, user_id, category_id, price, unit,
                description, image_urls, created_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(id)
        .bind(&payload.name)
        .bind(&payload.company_id)
        .bind(user_id)
        .bind(&payload.category_id)
        .bind(payload.price)
        .bind(&payload.unit)
        .bind(&payload.description)
        .bind(encode_image_urls(&payload.image_urls)?)
        .bind(now())
        .execute(&self.pool)
        .await?;

        tracing::info!(item_id = id, user_id, "product created");
        let row = self.get_with_relations(id).await?;
        Ok(Item::from(&row))
    }

    pub async fn get_with_relations(&self, id: &str) -> Result<ItemWithRelations> {
        let sql = format!("{ITEM_WITH_RELATIONS} WHERE i.id = ?");
        sqlx::query_as::<_, ItemWithRelations>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Product not found".into()))
    }

    pub async fn list(&self) -> Result<Vec<ItemWithRelations>> {
        let sql = format!("{ITEM_WITH_RELATIONS} ORDER BY i.rowid");
        let rows = sqlx::query_as::<_, ItemWithRelations>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<ItemWithRelations>> {
        let sql = format!("{ITEM_WITH_RELATIONS} WHERE i.user_id = ? ORDER BY i.rowid");
        let rows = sqlx::query_as::<_, ItemWithRelations>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn list_by_company(&self, company_id: &str) -> Result<Vec<ItemWithRelations>> {
        let sql = format!("{ITEM_WITH_RELATIONS} WHERE i.company_id = ? ORDER BY i.rowid");
        let rows = sqlx::query_as::<_, ItemWithRelations>(&sql)
            .bind(company_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn count(&self) -> Result<i64> {
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM items")
            .fetch_one(&self.pool)
            .await?;
        Ok(total)
    }

    pub async fn update(&self, id: &str, payload: UpdateItemPayload) -> Result<Item> {
        self.get_with_relations(id).await?;
        let image_urls = payload
            .image_urls
            .as_deref()
            .map(encode_image_urls)
            .transpose()?;

        sqlx::query(
            r#"
            UPDATE items
            SET
                name = COALESCE(?2, name),
                company_id = COALESCE(?3, company_id),
                category_id = COALESCE(?4, category_id),
                price = COALESCE(?5, price),
                unit = COALESCE(?6, unit),
                description = COALESCE(?7, description),
                image_urls = COALESCE(?8, image_urls)
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&payload.name)
        .bind(&payload.company_id)
        .bind(&payload.category_id)
        .bind(payload.price)
        .bind(&payload.unit)
        .bind(&payload.description)
        .bind(image_urls)
        .execute(&self.pool)
        .await?;

        let row = self.get_with_relations(id).await?;
        Ok(Item::from(&row))
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let res = sqlx::query("DELETE FROM items WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Product not found".into()));
        }
        tracing::info!(item_id = id, "product deleted");
        Ok(())
    }

    /// Case-insensitive substring match over product name, description and
    /// category name, in insertion order, one page at a time.
    pub async fn search(&self, query: &str, limit: i64, offset: i64) -> Result<Vec<ItemWithRelations>> {
        let sql = format!("{ITEM_WITH_RELATIONS} ORDER BY i.rowid");
        let rows = sqlx::query_as::<_, ItemWithRelations>(&sql)
            .fetch_all(&self.pool)
            .await?;
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or_default();
        Ok(rows
            .into_iter()
            .filter(|row| {
                matches_query(
                    query,
                    &[
                        Some(row.name.as_str()),
                        row.description.as_deref(),
                        row.category_name.as_deref(),
                    ],
                )
            })
            .skip(skip)
            .take(take)
            .collect())
    }
}
