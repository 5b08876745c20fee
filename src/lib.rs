pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use std::sync::Arc;

use sqlx::SqlitePool;

use crate::config::Config;
use crate::error::Result;
use crate::services::{
    ad_service::AdService,
    catalog_service::CatalogService,
    company_service::CompanyService,
    content_service::{ArticleStore, TenderStore},
    item_service::ItemService,
    job_service::JobService,
    rfq_service::RfqService,
    search_service::SearchService,
    seed_service::SeedService,
    user_service::UserService,
};
use crate::utils::upload::UploadTarget;

pub use routes::build_router;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Arc<Config>,
    pub user_service: UserService,
    pub company_service: CompanyService,
    pub item_service: ItemService,
    pub job_service: JobService,
    pub catalog_service: CatalogService,
    pub rfq_service: RfqService,
    pub articles: ArticleStore,
    pub tenders: TenderStore,
    pub ad_service: AdService,
    pub search_service: SearchService,
    pub seed_service: SeedService,
}

impl AppState {
    /// Builds every service over `pool` and makes sure the content directories exist.
    pub fn new(pool: SqlitePool, config: Config) -> Result<Self> {
        for dir in [
            config.uploads_dir(),
            config.articles_dir(),
            config.tenders_dir(),
            config.ad_banner_dir(),
        ] {
            std::fs::create_dir_all(&dir)?;
        }

        let user_service = UserService::new(pool.clone());
        let company_service = CompanyService::new(pool.clone());
        let item_service = ItemService::new(pool.clone());
        let job_service = JobService::new(pool.clone());
        let catalog_service = CatalogService::new(pool.clone());
        let rfq_service = RfqService::new(pool.clone());
        let articles = ArticleStore::new(config.articles_dir());
        let tenders = TenderStore::new(config.tenders_dir());
        let ad_service = AdService::new(config.ads_file());
        let search_service = SearchService::new(
            item_service.clone(),
            company_service.clone(),
            job_service.clone(),
            tenders.clone(),
            articles.clone(),
        );
        let seed_service = SeedService::new(
            user_service.clone(),
            company_service.clone(),
            item_service.clone(),
            catalog_service.clone(),
        );

        Ok(Self {
            pool,
            config: Arc::new(config),
            user_service,
            company_service,
            item_service,
            job_service,
            catalog_service,
            rfq_service,
            articles,
            tenders,
            ad_service,
            search_service,
            seed_service,
        })
    }

    pub fn image_uploads(&self) -> UploadTarget {
        UploadTarget {
            dir: self.config.uploads_dir(),
            url_prefix: "/api/uploads",
            max_bytes: self.config.upload_max_bytes,
        }
    }

    pub fn banner_uploads(&self) -> UploadTarget {
        UploadTarget {
            dir: self.config.ad_banner_dir(),
            url_prefix: "/api/ad/banner",
            max_bytes: self.config.upload_max_bytes,
        }
    }
}
