use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::time::deserialize_optional_datetime;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobPayload {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    pub category: Option<String>,
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    pub company_id: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub position: Option<String>,
    pub experience: Option<String>,
    pub required_skills: Option<String>,
    pub qualifications: Option<String>,
    pub how_to_apply: Option<String>,
    pub additional_notes: Option<String>,
    pub application_link: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub deadline: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, Default)]
#[serde(rename_all = "camelCase")]
pub struct UpdateJobPayload {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    pub category: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub company_id: Option<String>,
    pub location: Option<String>,
    pub salary: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
    pub position: Option<String>,
    pub experience: Option<String>,
    pub required_skills: Option<String>,
    pub qualifications: Option<String>,
    pub how_to_apply: Option<String>,
    pub additional_notes: Option<String>,
    pub application_link: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub deadline: Option<DateTime<Utc>>,
}
