pub mod auth_dto;
pub mod catalog_dto;
pub mod common_dto;
pub mod company_dto;
pub mod content_dto;
pub mod job_dto;
pub mod product_dto;
pub mod rfq_dto;
pub mod search_dto;
