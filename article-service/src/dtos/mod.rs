pub mod articles;

pub use articles::{
    ArticleResponse, CreateArticleRequest, CreatedArticle, ResponseData, MISSING_FIELDS_MESSAGE,
};
