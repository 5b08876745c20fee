use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::{fs, sync::Mutex};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::models::ad::{Ad, AdStatus};
use crate::utils::upload::write_atomic;

/// Ads live as one YAML sequence in a single file. Every mutation is a
/// read-modify-write of the whole file, serialized through `write_lock`.
#[derive(Clone)]
pub struct AdService {
    path: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl AdService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub async fn list(&self) -> Result<Vec<Ad>> {
        let raw = match fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        let ads: Option<Vec<Ad>> = serde_yaml::from_str(&raw)?;
        Ok(ads.unwrap_or_default())
    }

    async fn save(&self, ads: &[Ad]) -> Result<()> {
        let yaml = serde_yaml::to_string(ads)?;
        write_atomic(&self.path, yaml.as_bytes()).await
    }

    pub async fn create(&self, title: &str, link: &str, banner: &str) -> Result<Ad> {
        let _guard = self.write_lock.lock().await;
        let mut ads = self.list().await?;
        let ad = Ad {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            link: link.to_string(),
            banner: banner.to_string(),
            status: AdStatus::On,
        };
        ads.push(ad.clone());
        self.save(&ads).await?;
        tracing::info!(ad_id = %ad.id, "ad created");
        Ok(ad)
    }

    pub async fn set_status(&self, id: &str, status: AdStatus) -> Result<Ad> {
        self.modify(id, |ad| ad.status = status).await
    }

    pub async fn update(
        &self,
        id: &str,
        title: Option<String>,
        link: Option<String>,
        banner: Option<String>,
    ) -> Result<Ad> {
        self.modify(id, move |ad| {
            if let Some(title) = title {
                ad.title = title;
            }
            if let Some(link) = link {
                ad.link = link;
            }
            if let Some(banner) = banner {
                ad.banner = banner;
            }
        })
        .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut ads = self.list().await?;
        let before = ads.len();
        ads.retain(|ad| ad.id != id);
        if ads.len() == before {
            return Err(Error::NotFound("Ad not found.".into()));
        }
        self.save(&ads).await?;
        tracing::info!(ad_id = id, "ad deleted");
        Ok(())
    }

    async fn modify<F>(&self, id: &str, change: F) -> Result<Ad>
    where
        F: FnOnce(&mut Ad),
    {
        let _guard = self.write_lock.lock().await;
        let mut ads = self.list().await?;
        let ad = ads
            .iter_mut()
            .find(|ad| ad.id == id)
            .ok_or_else(|| Error::NotFound("Ad not found.".into()))?;
        change(ad);
        let updated = ad.clone();
        self.save(&ads).await?;
        Ok(updated)
    }
}
