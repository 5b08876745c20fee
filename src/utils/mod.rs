pub mod crypto;
pub mod front_matter;
pub mod multipart;
pub mod time;
pub mod token;
pub mod upload;
pub mod validation;
