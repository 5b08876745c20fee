use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_ADMIN_USERNAME: &str = "admin77";

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub session_secret: String,
    pub data_dir: PathBuf,
    pub admin_username: String,
    pub session_ttl_hours: i64,
    pub cookie_secure: bool,
    pub upload_max_bytes: usize,
    pub cors_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env_or("SERVER_ADDRESS", "0.0.0.0:5000"),
            database_url: get_env_or("DATABASE_URL", "sqlite://data/buildmart.db"),
            session_secret: get_env("SESSION_SECRET")?,
            data_dir: PathBuf::from(get_env_or("DATA_DIR", "./data")),
            admin_username: get_env_or("ADMIN_USERNAME", DEFAULT_ADMIN_USERNAME),
            session_ttl_hours: get_env_parse_or("SESSION_TTL_HOURS", 7 * 24)?,
            cookie_secure: get_env_parse_or("COOKIE_SECURE", false)?,
            upload_max_bytes: get_env_parse_or("UPLOAD_MAX_BYTES", 5 * 1024 * 1024)?,
            cors_origins: get_env_or("CORS_ORIGINS", "")
                .split(',')
                .map(str::trim)
                .filter(|o| !o.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }

    /// Configuration for tests and tooling: in-memory database, caller-chosen data directory.
    pub fn for_data_dir(data_dir: impl Into<PathBuf>, session_secret: &str) -> Self {
        Self {
            server_address: "127.0.0.1:0".to_string(),
            database_url: "sqlite::memory:".to_string(),
            session_secret: session_secret.to_string(),
            data_dir: data_dir.into(),
            admin_username: DEFAULT_ADMIN_USERNAME.to_string(),
            session_ttl_hours: 7 * 24,
            cookie_secure: false,
            upload_max_bytes: 5 * 1024 * 1024,
            cors_origins: Vec::new(),
        }
    }

    pub fn uploads_dir(&self) -> PathBuf {
        self.data_dir.join("uploads")
    }

    pub fn articles_dir(&self) -> PathBuf {
        self.data_dir.join("articles")
    }

    pub fn tenders_dir(&self) -> PathBuf {
        self.data_dir.join("tender")
    }

    pub fn ads_file(&self) -> PathBuf {
        self.data_dir.join("ad").join("ads.md")
    }

    pub fn ad_banner_dir(&self) -> PathBuf {
        self.data_dir.join("ad").join("banner")
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}
