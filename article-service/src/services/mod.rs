pub mod database;
pub mod metrics;
pub mod mock;
pub mod store;

pub use database::MongoDb;
pub use metrics::{get_metrics, init_metrics, record_article_operation};
pub use mock::MockArticleStore;
pub use store::ArticleStore;
