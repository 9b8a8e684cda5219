use crate::models::Article;
use crate::services::store::ArticleStore;
use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use std::sync::{Mutex, MutexGuard};

/// In-memory store for tests. `failing` builds one whose every call returns a
/// backend error with the given text.
pub struct MockArticleStore {
    articles: Mutex<Vec<Article>>,
    failure: Option<String>,
}

impl Default for MockArticleStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockArticleStore {
    pub fn new() -> Self {
        Self {
            articles: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            articles: Mutex::new(Vec::new()),
            failure: Some(message.into()),
        }
    }

    /// Number of stored articles, bypassing any configured failure.
    pub fn len(&self) -> usize {
        self.articles.lock().map(|a| a.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn check(&self) -> Result<(), AppError> {
        match &self.failure {
            Some(message) => Err(AppError::DatabaseError(anyhow::anyhow!("{}", message))),
            None => Ok(()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<Article>>, AppError> {
        self.articles
            .lock()
            .map_err(|e| AppError::InternalError(anyhow::anyhow!("Mock store mutex poisoned: {}", e)))
    }
}

#[async_trait]
impl ArticleStore for MockArticleStore {
    async fn health_check(&self) -> Result<(), AppError> {
        self.check()
    }

    async fn insert(&self, article: &Article) -> Result<ObjectId, AppError> {
        self.check()?;
        let id = ObjectId::new();
        self.lock()?.push(article.clone().with_id(id));
        Ok(id)
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Article>, AppError> {
        self.check()?;
        Ok(self
            .lock()?
            .iter()
            .find(|article| article.id == Some(id))
            .cloned())
    }

    async fn find_all(&self) -> Result<Vec<Article>, AppError> {
        self.check()?;
        Ok(self.lock()?.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use service_core::error::ErrorCategory;

    fn sample() -> Article {
        Article::new("Title".into(), "Body".into(), "Ada".into())
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let store = MockArticleStore::new();
        let first = store.insert(&sample()).await.unwrap();
        let second = store.insert(&sample()).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(store.len(), 2);
        assert_eq!(
            store.find_by_id(first).await.unwrap(),
            Some(sample().with_id(first))
        );
    }

    #[tokio::test]
    async fn failing_store_reports_backend_errors() {
        let store = MockArticleStore::failing("connection refused");
        let err = store.insert(&sample()).await.unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Backend);
        assert_eq!(err.message(), "connection refused");
        assert!(store.is_empty());
    }
}
