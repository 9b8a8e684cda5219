use crate::models::Article;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;

/// Persistence seam for articles. Handlers only ever see this trait, so the
/// MongoDB handle and the in-memory mock are interchangeable.
#[async_trait]
pub trait ArticleStore: Send + Sync {
    /// Liveness check against the backend.
    async fn health_check(&self) -> Result<(), AppError>;

    /// Insert one article and return the id the store assigned.
    async fn insert(&self, article: &Article) -> Result<ObjectId, AppError>;

    /// `Ok(None)` when nothing matches.
    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Article>, AppError>;

    /// Every article, in whatever order the backend yields them. Fails as a
    /// whole if any record cannot be decoded.
    async fn find_all(&self) -> Result<Vec<Article>, AppError>;
}
