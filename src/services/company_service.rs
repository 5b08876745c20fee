use sqlx::SqlitePool;
use uuid::Uuid;

use super::matches_query;
use crate::dto::company_dto::{CreateCompanyPayload, UpdateCompanyPayload};
use crate::error::{Error, Result};
use crate::models::company::Company;
use crate::utils::time::now;

const COMPANY_COLUMNS: &str = "id, name, type_id, address, user_id, logo_url, email, phone, location, description, website, is_verified, created_at, company_type";

#[derive(Clone)]
pub struct CompanyService {
    pool: SqlitePool,
}

impl CompanyService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: &str, payload: CreateCompanyPayload) -> Result<Company> {
        self.create_with_id(&Uuid::new_v4().to_string(), user_id, payload)
            .await
    }

    pub async fn create_with_id(
        &self,
        id: &str,
        user_id: &str,
        payload: CreateCompanyPayload,
    ) -> Result<Company> {
        let sql = format!(
            r#"
            INSERT INTO companies (
                id, name, type_id, address, user_id, logo_url, email, phone,
                location, description, website, is_verified, created_at, company_type
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 0, ?, ?)
            RETURNING {COMPANY_COLUMNS}
            "#
        );
        let company = sqlx::query_as::<_, Company>(&sql)
            .bind(id)
            .bind(&payload.name)
            .bind(&payload.type_id)
            .bind(&payload.address)
            .bind(user_id)
            .bind(&payload.logo_url)
            .bind(&payload.email)
            .bind(&payload.phone)
            .bind(&payload.location)
            .bind(&payload.description)
            .bind(&payload.website)
            .bind(now())
            .bind(&payload.company_type)
            .fetch_one(&self.pool)
            .await?;

        tracing::info!(company_id = %company.id, user_id, "company created");
        Ok(company)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<Company>> {
        let sql = format!("SELECT {COMPANY_COLUMNS} FROM companies WHERE id = ?");
        let company = sqlx::query_as::<_, Company>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(company)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Company> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound("Company not found".into()))
    }

    pub async fn list(&self) -> Result<Vec<Company>> {
        let sql = format!("SELECT {COMPANY_COLUMNS} FROM companies ORDER BY rowid");
        let rows = sqlx::query_as::<_, Company>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Company>> {
        let sql = format!("SELECT {COMPANY_COLUMNS} FROM companies WHERE user_id = ? ORDER BY rowid");
        let rows = sqlx::query_as::<_, Company>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn update(&self, id: &str, payload: UpdateCompanyPayload) -> Result<Company> {
        self.get_by_id(id).await?;

        let sql = format!(
            r#"
            UPDATE companies
            SET
                name = COALESCE(?2, name),
                type_id = COALESCE(?3, type_id),
                company_type = COALESCE(?4, company_type),
                address = COALESCE(?5, address),
                logo_url = COALESCE(?6, logo_url),
                email = COALESCE(?7, email),
                phone = COALESCE(?8, phone),
                location = COALESCE(?9, location),
                description = COALESCE(?10, description),
                website = COALESCE(?11, website)
            WHERE id = ?1
            RETURNING {COMPANY_COLUMNS}
            "#
        );
        let company = sqlx::query_as::<_, Company>(&sql)
            .bind(id)
            .bind(&payload.name)
            .bind(&payload.type_id)
            .bind(&payload.company_type)
            .bind(&payload.address)
            .bind(&payload.logo_url)
            .bind(&payload.email)
            .bind(&payload.phone)
            .bind(&payload.location)
            .bind(&payload.description)
            .bind(&payload.website)
            .fetch_one(&self.pool)
            .await?;

        Ok(company)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let res = sqlx::query("DELETE FROM companies WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Company not found".into()));
        }
        tracing::info!(company_id = id, "company deleted");
        Ok(())
    }

    /// Case-insensitive substring match over name, description, location and type.
    pub async fn search(&self, query: &str) -> Result<Vec<Company>> {
        let sql = format!("SELECT {COMPANY_COLUMNS} FROM companies ORDER BY rowid");
        let rows = sqlx::query_as::<_, Company>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows
            .into_iter()
            .filter(|c| {
                matches_query(
                    query,
                    &[
                        Some(c.name.as_str()),
                        c.description.as_deref(),
                        c.location.as_deref(),
                        c.company_type.as_deref(),
                    ],
                )
            })
            .collect())
    }
}
