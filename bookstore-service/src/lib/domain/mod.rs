pub mod authentication;
pub mod book;
pub mod seller;
