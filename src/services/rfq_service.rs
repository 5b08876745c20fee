use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dto::rfq_dto::CreateRfqPayload;
use crate::error::{Error, Result};
use crate::models::rfq::Rfq;
use crate::utils::time::now;

const RFQ_COLUMNS: &str = "id, item_name, company_id, user_id, quantity, unit, description, created_at";

#[derive(Clone)]
pub struct RfqService {
    pool: SqlitePool,
}

impl RfqService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: &str, payload: CreateRfqPayload) -> Result<Rfq> {
        let sql = format!(
            "INSERT INTO rfq ({RFQ_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING {RFQ_COLUMNS}"
        );
        let rfq = sqlx::query_as::<_, Rfq>(&sql)
            .bind(Uuid::new_v4().to_string())
            .bind(&payload.item_name)
            .bind(&payload.company_id)
            .bind(user_id)
            .bind(payload.quantity)
            .bind(&payload.unit)
            .bind(&payload.description)
            .bind(now())
            .fetch_one(&self.pool)
            .await?;
        tracing::info!(rfq_id = %rfq.id, user_id, "request for quotation submitted");
        Ok(rfq)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Rfq> {
        let sql = format!("SELECT {RFQ_COLUMNS} FROM rfq WHERE id = ?");
        sqlx::query_as::<_, Rfq>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("RFQ not found".into()))
    }

    pub async fn list(&self, user_id: Option<&str>) -> Result<Vec<Rfq>> {
        let rows = match user_id {
            Some(user_id) => {
                let sql = format!("SELECT {RFQ_COLUMNS} FROM rfq WHERE user_id = ? ORDER BY rowid");
                sqlx::query_as::<_, Rfq>(&sql)
                    .bind(user_id)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let sql = format!("SELECT {RFQ_COLUMNS} FROM rfq ORDER BY rowid");
                sqlx::query_as::<_, Rfq>(&sql).fetch_all(&self.pool).await?
            }
        };
        Ok(rows)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let res = sqlx::query("DELETE FROM rfq WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound("RFQ not found".into()));
        }
        Ok(())
    }
}
