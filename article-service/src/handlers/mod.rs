pub mod articles;
pub mod health;

pub use articles::{create_article, get_article, list_articles, route_not_found};
pub use health::{health_check, metrics_endpoint, readiness_check};
