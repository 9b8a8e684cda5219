//! The three article endpoints. Each one is a single validate, store, respond
//! pass; every failure is turned into an envelope by `AppError`.

use crate::dtos::{ArticleResponse, CreateArticleRequest, CreatedArticle, ResponseData};
use crate::services::record_article_operation;
use crate::startup::AppState;
use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
};
use mongodb::bson::oid::ObjectId;
use service_core::error::AppError;
use service_core::response::Envelope;

pub const NO_DOCUMENTS_MESSAGE: &str = "no documents in result";
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "404 page not found";

/// `POST /articles`
///
/// The body is decoded regardless of `Content-Type`. Only the first JSON value
/// is read; anything after it is ignored, and a bare `null` counts as an
/// object with every field missing.
pub async fn create_article(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Envelope<ResponseData>, AppError> {
    tracing::info!("Creating article");

    let article = decode_create_request(&body)
        .and_then(CreateArticleRequest::into_article)
        .inspect_err(|_| record_article_operation("create", "invalid"))?;

    let id = state.store.insert(&article).await.inspect_err(|e| {
        tracing::error!(error = %e, "Failed to insert article");
        record_article_operation("create", "error");
    })?;

    tracing::info!(article_id = %id, author = %article.author, "Article created");
    record_article_operation("create", "success");

    Ok(Envelope::success(ResponseData::Created(CreatedArticle {
        id: id.to_hex(),
    })))
}

/// `GET /articles/:article_id`
///
/// A malformed id is a 400, an absent one a 404. Backend failures stay 500s
/// instead of being folded into the not-found case.
pub async fn get_article(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Envelope<ResponseData>, AppError> {
    let id = path
        .map_err(|rejection| AppError::BadRequest(anyhow::anyhow!(rejection.body_text())))
        .and_then(|Path(article_id)| {
            tracing::info!(article_id = %article_id, "Getting single article");
            ObjectId::parse_str(&article_id).map_err(|e| AppError::BadRequest(e.into()))
        })
        .inspect_err(|_| record_article_operation("get", "invalid"))?;

    let article = state
        .store
        .find_by_id(id)
        .await
        .inspect_err(|e| {
            tracing::error!(article_id = %id, error = %e, "Failed to fetch article");
            record_article_operation("get", "error");
        })?
        .ok_or_else(|| {
            record_article_operation("get", "not_found");
            AppError::NotFound(anyhow::anyhow!(NO_DOCUMENTS_MESSAGE))
        })?;

    record_article_operation("get", "success");

    Ok(Envelope::success(ResponseData::Articles(vec![
        ArticleResponse::from(article),
    ])))
}

/// `GET /articles`
pub async fn list_articles(
    State(state): State<AppState>,
) -> Result<Envelope<ResponseData>, AppError> {
    tracing::info!("Getting all articles");

    let articles = state.store.find_all().await.inspect_err(|e| {
        tracing::error!(error = %e, "Failed to list articles");
        record_article_operation("list", "error");
    })?;

    tracing::info!(count = articles.len(), "Listed articles");
    record_article_operation("list", "success");

    Ok(Envelope::success(ResponseData::Articles(
        articles.into_iter().map(ArticleResponse::from).collect(),
    )))
}

fn decode_create_request(body: &[u8]) -> Result<CreateArticleRequest, AppError> {
    serde_json::Deserializer::from_slice(body)
        .into_iter::<Option<CreateArticleRequest>>()
        .next()
        .ok_or_else(|| AppError::BadRequest(anyhow::anyhow!("EOF")))?
        .map(Option::unwrap_or_default)
        .map_err(|e| AppError::BadRequest(e.into()))
}

/// Fallback for paths no route matches.
pub async fn route_not_found() -> AppError {
    AppError::NotFound(anyhow::anyhow!(ROUTE_NOT_FOUND_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::MISSING_FIELDS_MESSAGE;

    #[test]
    fn decodes_only_the_first_value() {
        let request =
            decode_create_request(br#"{"title":"t","content":"c","author":"a"} trailing"#).unwrap();
        assert_eq!(request.title.as_deref(), Some("t"));
    }

    #[test]
    fn null_body_is_missing_fields() {
        let err = decode_create_request(b"null")
            .and_then(CreateArticleRequest::into_article)
            .unwrap_err();
        assert_eq!(err.message(), MISSING_FIELDS_MESSAGE);
    }

    #[test]
    fn empty_body_is_a_decode_error() {
        assert_eq!(decode_create_request(b"  ").unwrap_err().message(), "EOF");
    }
}
