use sqlx::SqlitePool;
use uuid::Uuid;

use super::matches_query;
use crate::dto::job_dto::{CreateJobPayload, UpdateJobPayload};
use crate::error::{Error, Result};
use crate::models::job::Job;
use crate::utils::time::now;

const JOB_COLUMNS: &str = "id, title, category, description, company_id, user_id, location, salary, type, position, experience, required_skills, qualifications, how_to_apply, additional_notes, application_link, deadline, created_at";

#[derive(Clone)]
pub struct JobService {
    pool: SqlitePool,
}

impl JobService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, user_id: &str, payload: CreateJobPayload) -> Result<Job> {
        let sql = format!(
            r#"
            INSERT INTO jobs ({JOB_COLUMNS})
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            RETURNING {JOB_COLUMNS}
            "#
        );
        let job = sqlx::query_as::<_, Job>(&sql)
            .bind(Uuid::new_v4().to_string())
            .bind(&payload.title)
            .bind(&payload.category)
            .bind(&payload.description)
            .bind(&payload.company_id)
            .bind(user_id)
            .bind(&payload.location)
            .bind(&payload.salary)
            .bind(&payload.job_type)
            .bind(&payload.position)
            .bind(&payload.experience)
            .bind(&payload.required_skills)
            .bind(&payload.qualifications)
            .bind(&payload.how_to_apply)
            .bind(&payload.additional_notes)
            .bind(&payload.application_link)
            .bind(payload.deadline)
            .bind(now())
            .fetch_one(&self.pool)
            .await?;

        tracing::info!(job_id = %job.id, user_id, "job posted");
        Ok(job)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Job> {
        let sql = format!("SELECT {JOB_COLUMNS} FROM jobs WHERE id = ?");
        sqlx::query_as::<_, Job>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| Error::NotFound("Job not found".into()))
    }

    pub async fn list(&self) -> Result<Vec<Job>> {
        let sql = format!("SELECT {JOB_COLUMNS} FROM jobs ORDER BY rowid");
        let rows = sqlx::query_as::<_, Job>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    pub async fn list_by_user(&self, user_id: &str) -> Result<Vec<Job>> {
        let sql = format!("SELECT {JOB_COLUMNS} FROM jobs WHERE user_id = ? ORDER BY rowid");
        let rows = sqlx::query_as::<_, Job>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn update(&self, id: &str, payload: UpdateJobPayload) -> Result<Job> {
        self.get_by_id(id).await?;

        let sql = format!(
            r#"
            UPDATE jobs
            SET
                title = COALESCE(?2, title),
                category = COALESCE(?3, category),
                description = COALESCE(?4, description),
                company_id = COALESCE(?5, company_id),
                location = COALESCE(?6, location),
                salary = COALESCE(?7, salary),
                type = COALESCE(?8, type),
                position = COALESCE(?9, position),
                experience = COALESCE(?10, experience),
                required_skills = COALESCE(?11, required_skills),
                qualifications = COALESCE(?12, qualifications),
                how_to_apply = COALESCE(?13, how_to_apply),
                additional_notes = COALESCE(?14, additional_notes),
                application_link = COALESCE(?15, application_link),
                deadline = COALESCE(?16, deadline)
            WHERE id = ?1
            RETURNING {JOB_COLUMNS}
            "#
        );
        let job = sqlx::query_as::<_, Job>(&sql)
            .bind(id)
            .bind(&payload.title)
            .bind(&payload.category)
            .bind(&payload.description)
            .bind(&payload.company_id)
            .bind(&payload.location)
            .bind(&payload.salary)
            .bind(&payload.job_type)
            .bind(&payload.position)
            .bind(&payload.experience)
            .bind(&payload.required_skills)
            .bind(&payload.qualifications)
            .bind(&payload.how_to_apply)
            .bind(&payload.additional_notes)
            .bind(&payload.application_link)
            .bind(payload.deadline)
            .fetch_one(&self.pool)
            .await?;

        Ok(job)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let res = sqlx::query("DELETE FROM jobs WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if res.rows_affected() == 0 {
            return Err(Error::NotFound("Job not found".into()));
        }
        tracing::info!(job_id = id, "job deleted");
        Ok(())
    }

    pub async fn search(&self, query: &str) -> Result<Vec<Job>> {
        let sql = format!("SELECT {JOB_COLUMNS} FROM jobs ORDER BY rowid");
        let rows = sqlx::query_as::<_, Job>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows
            .into_iter()
            .filter(|j| {
                matches_query(
                    query,
                    &[
                        Some(j.title.as_str()),
                        Some(j.description.as_str()),
                        j.category.as_deref(),
                        j.location.as_deref(),
                        j.position.as_deref(),
                    ],
                )
            })
            .collect())
    }
}
