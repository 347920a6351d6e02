pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use domain::authentication;
pub use domain::book;
pub use domain::seller;
pub use outbound::repositories;
