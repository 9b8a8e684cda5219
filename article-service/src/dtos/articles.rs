use crate::models::Article;
use serde::{Deserialize, Serialize};
use service_core::error::AppError;
use validator::Validate;

pub const MISSING_FIELDS_MESSAGE: &str = "json request missing some required fields";

/// Body of `POST /articles`.
///
/// Fields are optional at the decoding stage so that an absent or `null` field
/// is reported as a missing field rather than a JSON error. Any inbound `id` is
/// ignored; the store assigns it.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateArticleRequest {
    #[validate(required, length(min = 1))]
    #[serde(default)]
    pub title: Option<String>,
    #[validate(required, length(min = 1))]
    #[serde(default)]
    pub content: Option<String>,
    #[validate(required, length(min = 1))]
    #[serde(default)]
    pub author: Option<String>,
}

impl CreateArticleRequest {
    pub fn into_article(self) -> Result<Article, AppError> {
        self.validate().map_err(|_| missing_fields())?;

        match (self.title, self.content, self.author) {
            (Some(title), Some(content), Some(author)) => Ok(Article::new(title, content, author)),
            _ => Err(missing_fields()),
        }
    }
}

fn missing_fields() -> AppError {
    AppError::BadRequest(anyhow::anyhow!(MISSING_FIELDS_MESSAGE))
}

/// Wire form of a stored article.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArticleResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: String,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.map(|id| id.to_hex()).unwrap_or_default(),
            title: article.title,
            content: article.content,
            author: article.author,
        }
    }
}

/// Payload of a successful create: the assigned id only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreatedArticle {
    pub id: String,
}

/// Every `data` shape the article endpoints can return.
///
/// Untagged so the wire JSON is just the payload; a client tells the variants
/// apart by shape (object vs array).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum ResponseData {
    Created(CreatedArticle),
    Articles(Vec<ArticleResponse>),
}

impl ResponseData {
    pub fn articles(&self) -> Option<&[ArticleResponse]> {
        match self {
            ResponseData::Articles(articles) => Some(articles),
            ResponseData::Created(_) => None,
        }
    }
}
