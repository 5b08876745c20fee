use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub title: String,
    pub category: Option<String>,
    pub description: String,
    pub company_id: Option<String>,
    pub user_id: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub job_type: Option<String>,
    pub position: Option<String>,
    pub experience: Option<String>,
    pub required_skills: Option<String>,
    pub qualifications: Option<String>,
    pub how_to_apply: Option<String>,
    pub additional_notes: Option<String>,
    pub application_link: Option<String>,
    pub deadline: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}
