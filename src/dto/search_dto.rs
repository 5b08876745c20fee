use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

use crate::dto::{company_dto::CompanySearchResult, product_dto::SearchProduct};
use crate::models::{article::Article, job::Job, tender::Tender};

pub const DEFAULT_SEARCH_TYPES: &str = "products,companies,tenders,jobs,articles";
pub const DEFAULT_PAGE_SIZE: i64 = 16;

#[derive(Debug, Clone, Serialize, Deserialize, Default, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    pub query: Option<String>,
    pub types: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// One entry per requested type; unrequested types are left out of the JSON entirely.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchResults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<SearchProduct>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companies: Option<Vec<CompanySearchResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenders: Option<Vec<Tender>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jobs: Option<Vec<Job>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub articles: Option<Vec<Article>>,
}
