use sqlx::SqlitePool;
use uuid::Uuid;

use crate::dto::auth_dto::{CreateUserPayload, UpdateUserPayload};
use crate::error::{Error, Result};
use crate::models::user::User;
use crate::utils::crypto::{hash_password, verify_password};

const USER_COLUMNS: &str = "id, username, password, full_name, email, phone, company, bio, location, profile_picture_url, role";

#[derive(Clone)]
pub struct UserService {
    pool: SqlitePool,
}

impl UserService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, payload: CreateUserPayload) -> Result<User> {
        self.create_with_id(&Uuid::new_v4().to_string(), payload).await
    }

    pub async fn create_with_id(&self, id: &str, payload: CreateUserPayload) -> Result<User> {
        if self.get_by_username(&payload.username).await?.is_some() {
            return Err(Error::BadRequest("Username already exists".into()));
        }
        let password = hash_password(&payload.password)?;

        let sql = format!(
            "INSERT INTO users ({USER_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?) RETURNING {USER_COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .bind(&payload.username)
            .bind(password)
            .bind(&payload.full_name)
            .bind(&payload.email)
            .bind(&payload.phone)
            .bind(&payload.company)
            .bind(&payload.bio)
            .bind(&payload.location)
            .bind(&payload.profile_picture_url)
            .bind(&payload.role)
            .fetch_one(&self.pool)
            .await?;

        tracing::info!(user_id = %user.id, username = %user.username, "user registered");
        Ok(user)
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE username = ?");
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;
        Ok(user)
    }

    /// Returns the user only when the password matches the stored hash.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<Option<User>> {
        let user = self.get_by_username(username).await?;
        Ok(user.filter(|u| verify_password(password, &u.password)))
    }

    pub async fn update(&self, id: &str, payload: UpdateUserPayload) -> Result<User> {
        let existing = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| Error::NotFound("User not found".into()))?;

        if let Some(username) = payload.username.as_deref() {
            if username != existing.username && self.get_by_username(username).await?.is_some() {
                return Err(Error::BadRequest("Username already exists".into()));
            }
        }
        let password = match payload.password.as_deref() {
            Some(plain) => Some(hash_password(plain)?),
            None => None,
        };

        let sql = format!(
            r#"
            UPDATE users
            SET
                username = COALESCE(?2, username),
                password = COALESCE(?3, password),
                full_name = COALESCE(?4, full_name),
                email = COALESCE(?5, email),
                phone = COALESCE(?6, phone),
                company = COALESCE(?7, company),
                bio = COALESCE(?8, bio),
                location = COALESCE(?9, location),
                profile_picture_url = COALESCE(?10, profile_picture_url)
            WHERE id = ?1
            RETURNING {USER_COLUMNS}
            "#
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .bind(&payload.username)
            .bind(password)
            .bind(&payload.full_name)
            .bind(&payload.email)
            .bind(&payload.phone)
            .bind(&payload.company)
            .bind(&payload.bio)
            .bind(&payload.location)
            .bind(&payload.profile_picture_url)
            .fetch_one(&self.pool)
            .await?;

        Ok(user)
    }
}
