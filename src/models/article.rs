//! Article records exchanged with the blog API.

use serde::{Deserialize, Serialize};

use crate::core::error::ValidationError;

/// A published article as returned by the server.
///
/// Field names on the wire are kebab-case (`publish-datetime`,
/// `publisher-email`, ...). `title` and `body` hold markdown source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Article {
    pub id: String,
    /// Display-ready timestamp, e.g. `2021-03-01 12:00 (UTC)`.
    pub publish_datetime: String,
    pub publisher_email: String,
    pub publisher_name: String,
    pub title: String,
    pub body: String,
    pub likes: u64,
}

/// Form fields of the publish dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Author,
    Email,
    Title,
    Body,
}

impl DraftField {
    /// All fields in form order.
    pub const ALL: [DraftField; 4] = [Self::Author, Self::Email, Self::Title, Self::Body];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Author => "Author",
            Self::Email => "Email",
            Self::Title => "Title",
            Self::Body => "Body",
        }
    }

    /// DOM id of the corresponding form control.
    pub fn input_id(self) -> &'static str {
        match self {
            Self::Author => "pub-author",
            Self::Email => "pub-email",
            Self::Title => "pub-title",
            Self::Body => "pub-body",
        }
    }
}

/// Client-side article draft collected from the publish form.
///
/// Serializes to the shape `publish-article` expects under `article`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DraftArticle {
    #[serde(rename = "publisher-name")]
    pub author: String,
    #[serde(rename = "publisher-email")]
    pub email: String,
    pub title: String,
    pub body: String,
}

impl DraftArticle {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Author => &self.author,
            DraftField::Email => &self.email,
            DraftField::Title => &self.title,
            DraftField::Body => &self.body,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        match field {
            DraftField::Author => self.author = value,
            DraftField::Email => self.email = value,
            DraftField::Title => self.title = value,
            DraftField::Body => self.body = value,
        }
    }

    /// Reset every field to the empty string.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check that every field has non-zero length.
    ///
    /// Whitespace counts as content; the server decides what it accepts.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let empty: Vec<DraftField> = DraftField::ALL
            .into_iter()
            .filter(|f| self.get(*f).is_empty())
            .collect();

        if empty.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::EmptyFields(empty))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> DraftArticle {
        DraftArticle {
            author: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            title: "Hello".to_string(),
            body: "First post".to_string(),
        }
    }

    #[test]
    fn test_article_wire_format() {
        let json = r#"{
            "id": "a1b2",
            "publish-datetime": "2021-03-01 12:00 (UTC)",
            "publisher-email": "ada@example.com",
            "publisher-name": "Ada",
            "title": "Hello",
            "body": "*hi*",
            "likes": 3
        }"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.id, "a1b2");
        assert_eq!(article.publish_datetime, "2021-03-01 12:00 (UTC)");
        assert_eq!(article.publisher_name, "Ada");
        assert_eq!(article.likes, 3);
    }

    #[test]
    fn test_article_rejects_negative_likes() {
        let json = r#"{"id":"x","publish-datetime":"","publisher-email":"","publisher-name":"","title":"","body":"","likes":-1}"#;
        assert!(serde_json::from_str::<Article>(json).is_err());
    }

    #[test]
    fn test_draft_serializes_publisher_keys() {
        let value = serde_json::to_value(filled()).unwrap();
        assert_eq!(value["publisher-name"], "Ada");
        assert_eq!(value["publisher-email"], "ada@example.com");
        assert_eq!(value["title"], "Hello");
        assert_eq!(value["body"], "First post");
        assert!(value.get("author").is_none());
    }

    #[test]
    fn test_validate_filled() {
        assert_eq!(filled().validate(), Ok(()));
    }

    #[test]
    fn test_validate_each_empty_field() {
        for field in DraftField::ALL {
            let mut draft = filled();
            draft.set(field, String::new());
            assert_eq!(
                draft.validate(),
                Err(ValidationError::EmptyFields(vec![field])),
                "field {:?}",
                field
            );
        }
    }

    #[test]
    fn test_validate_whitespace_is_content() {
        let mut draft = filled();
        draft.title = " ".to_string();
        assert!(draft.validate().is_ok());
    }

    #[test]
    fn test_clear() {
        let mut draft = filled();
        draft.clear();
        assert_eq!(draft, DraftArticle::default());
        assert_eq!(
            draft.validate(),
            Err(ValidationError::EmptyFields(DraftField::ALL.to_vec()))
        );
    }
}
