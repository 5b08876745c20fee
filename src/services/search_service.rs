use crate::dto::company_dto::CompanySearchResult;
use crate::dto::product_dto::SearchProduct;
use crate::dto::search_dto::{SearchQuery, SearchResults, DEFAULT_PAGE_SIZE, DEFAULT_SEARCH_TYPES};
use crate::error::Result;
use crate::services::{
    company_service::CompanyService,
    content_service::{ArticleStore, TenderStore},
    item_service::ItemService,
    job_service::JobService,
};

const MAX_PAGE_SIZE: i64 = 100;

/// Which collections a search should cover.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchTypes {
    pub products: bool,
    pub companies: bool,
    pub tenders: bool,
    pub jobs: bool,
    pub articles: bool,
}

impl SearchTypes {
    /// Comma separated, case-insensitive; unknown names are ignored.
    pub fn parse(raw: &str) -> Self {
        let mut types = SearchTypes::default();
        for name in raw.split(',').map(|t| t.trim().to_lowercase()) {
            match name.as_str() {
                "products" => types.products = true,
                "companies" => types.companies = true,
                "tenders" => types.tenders = true,
                "jobs" => types.jobs = true,
                "articles" => types.articles = true,
                _ => {}
            }
        }
        types
    }
}

/// Normalized paging: page from 1, limit within 1..=100.
pub fn page_window(page: Option<i64>, limit: Option<i64>) -> (i64, i64) {
    let page = page.unwrap_or(1).max(1);
    let limit = limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE);
    (limit, page.saturating_sub(1).saturating_mul(limit))
}

#[derive(Clone)]
pub struct SearchService {
    items: ItemService,
    companies: CompanyService,
    jobs: JobService,
    tenders: TenderStore,
    articles: ArticleStore,
}

impl SearchService {
    pub fn new(
        items: ItemService,
        companies: CompanyService,
        jobs: JobService,
        tenders: TenderStore,
        articles: ArticleStore,
    ) -> Self {
        Self {
            items,
            companies,
            jobs,
            tenders,
            articles,
        }
    }

    pub async fn search(&self, params: SearchQuery) -> Result<SearchResults> {
        let query = params.query.unwrap_or_default().to_lowercase();
        let types = SearchTypes::parse(params.types.as_deref().unwrap_or(DEFAULT_SEARCH_TYPES));
        let (limit, offset) = page_window(params.page, params.limit);

        tracing::debug!(query = %query, ?types, limit, offset, "search");

        let mut results = SearchResults::default();
        if types.products {
            let rows = self.items.search(&query, limit, offset).await?;
            results.products = Some(rows.into_iter().map(SearchProduct::from).collect());
        }
        if types.companies {
            let rows = self.companies.search(&query).await?;
            results.companies = Some(rows.into_iter().map(CompanySearchResult::from).collect());
        }
        if types.tenders {
            results.tenders = Some(self.tenders.search(&query).await?);
        }
        if types.jobs {
            results.jobs = Some(self.jobs.search(&query).await?);
        }
        if types.articles {
            results.articles = Some(self.articles.search(&query).await?);
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_requested_types() {
        let types = SearchTypes::parse(" Products , jobs,unknown");
        assert!(types.products);
        assert!(types.jobs);
        assert!(!types.companies && !types.tenders && !types.articles);
        assert_eq!(SearchTypes::parse(""), SearchTypes::default());
    }

    #[test]
    fn default_types_cover_everything() {
        let types = SearchTypes::parse(DEFAULT_SEARCH_TYPES);
        assert!(types.products && types.companies && types.tenders && types.jobs && types.articles);
    }

    #[test]
    fn paging_defaults_and_bounds() {
        assert_eq!(page_window(None, None), (16, 0));
        assert_eq!(page_window(Some(3), Some(10)), (10, 20));
        assert_eq!(page_window(Some(0), Some(0)), (1, 0));
        assert_eq!(page_window(Some(2), Some(1000)), (100, 100));
        assert_eq!(page_window(Some(i64::MAX), Some(16)), (16, i64::MAX));
        assert_eq!(page_window(Some(i64::MIN), None), (16, 0));
    }
}
