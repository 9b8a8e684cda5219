use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// An article as stored in the `articles` collection.
///
/// `id` is `None` until the store assigns one; it is left out of the document
/// on insert so the generated `_id` is used.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub author: String,
}

impl Article {
    pub fn new(title: String, content: String, author: String) -> Self {
        Self {
            id: None,
            title,
            content,
            author,
        }
    }

    pub fn with_id(mut self, id: ObjectId) -> Self {
        self.id = Some(id);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{self, doc};

    #[test]
    fn new_article_omits_id_from_document() {
        let article = Article::new("Title".into(), "Body".into(), "Ada".into());
        let document = bson::to_document(&article).unwrap();

        assert!(!document.contains_key("_id"));
        assert_eq!(document.get_str("title").unwrap(), "Title");
        assert_eq!(document.get_str("content").unwrap(), "Body");
        assert_eq!(document.get_str("author").unwrap(), "Ada");
    }

    #[test]
    fn stored_document_decodes_with_id() {
        let id = ObjectId::new();
        let document = doc! {
            "_id": id,
            "title": "Title",
            "content": "Body",
            "author": "Ada",
        };

        let article: Article = bson::from_document(document).unwrap();
        assert_eq!(
            article,
            Article::new("Title".into(), "Body".into(), "Ada".into()).with_id(id)
        );
    }

    #[test]
    fn mistyped_field_fails_to_decode() {
        let document = doc! { "_id": ObjectId::new(), "title": 42, "content": "c", "author": "a" };
        assert!(bson::from_document::<Article>(document).is_err());
    }
}
