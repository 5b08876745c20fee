pub mod ad;
pub mod article;
pub mod category;
pub mod company;
pub mod item;
pub mod job;
pub mod location;
pub mod rfq;
pub mod tender;
pub mod user;
