use crate::models::Article;
use crate::services::store::ArticleStore;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{doc, oid::ObjectId},
    Client as MongoClient, Collection, Database,
};
use service_core::error::AppError;

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
    collection: String,
}

impl MongoDb {
    /// Connect and ping once; an unreachable server is reported here rather
    /// than on the first request.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);
        let mongo = Self {
            client,
            db,
            collection: collection.to_string(),
        };

        mongo.health_check().await?;
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(mongo)
    }

    pub fn articles(&self) -> Collection<Article> {
        self.db.collection(&self.collection)
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}

#[async_trait]
impl ArticleStore for MongoDb {
    async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    async fn insert(&self, article: &Article) -> Result<ObjectId, AppError> {
        let result = self.articles().insert_one(article, None).await?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::DatabaseError(anyhow::anyhow!(
                "inserted id is not an ObjectId: {}",
                result.inserted_id
            ))
        })
    }

    async fn find_by_id(&self, id: ObjectId) -> Result<Option<Article>, AppError> {
        Ok(self.articles().find_one(doc! { "_id": id }, None).await?)
    }

    async fn find_all(&self) -> Result<Vec<Article>, AppError> {
        let mut cursor = self.articles().find(doc! {}, None).await?;

        let mut articles = Vec::new();
        while let Some(article) = cursor.try_next().await? {
            articles.push(article);
        }
        Ok(articles)
    }
}
