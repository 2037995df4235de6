//! Article template rendering.
//!
//! Turns an [`Article`] into an [`ArticleCard`]: the typed fragment the feed
//! displays. Untrusted fields leave this module only as [`Markup`] (passed
//! through the sanitizer) or as a validated `mailto:` href; everything else
//! is plain text that the view layer escapes when it is inserted.

use crate::config::dom_ids::LIKE_BUTTON_PREFIX;
use crate::models::Article;
use crate::utils::{MailtoValidation, Markup, render_markdown, sanitize, validate_mailto};

/// One rendered article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCard {
    pub id: String,
    /// DOM id of the like control, derived from `id`.
    pub like_control_id: String,
    pub publish_datetime: String,
    /// Sanitized author name.
    pub author: Markup,
    /// `mailto:` href, absent when the address is unusable.
    pub mailto: Option<String>,
    /// Sanitized HTML of the markdown title.
    pub title: Markup,
    /// Sanitized HTML of the markdown body.
    pub body: Markup,
    pub likes: u64,
}

impl ArticleCard {
    /// Text of the like control.
    pub fn like_label(&self) -> String {
        like_label(self.likes)
    }
}

/// Label of a like control showing `likes`.
pub fn like_label(likes: u64) -> String {
    format!("Like it ({})", likes)
}

/// DOM id of the like control for an article.
pub fn like_control_id(article_id: &str) -> String {
    format!("{}{}", LIKE_BUTTON_PREFIX, article_id)
}

/// Render an article into a card.
///
/// Pure: performs no DOM access. Content that the sanitizer removes
/// entirely yields an empty [`Markup`], never an error.
pub fn render(article: &Article) -> ArticleCard {
    let mailto = match validate_mailto(&article.publisher_email) {
        MailtoValidation::Valid(href) => Some(sanitize(&href).into_string()),
        MailtoValidation::Invalid(_) => None,
    };

    ArticleCard {
        id: article.id.clone(),
        like_control_id: like_control_id(&article.id),
        publish_datetime: article.publish_datetime.clone(),
        author: sanitize(&article.publisher_name),
        mailto,
        title: render_markdown(&article.title),
        body: render_markdown(&article.body),
        likes: article.likes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article() -> Article {
        Article {
            id: "abc123".to_string(),
            publish_datetime: "2021-03-01 12:00 (UTC)".to_string(),
            publisher_email: "ada@example.com".to_string(),
            publisher_name: "Ada".to_string(),
            title: "Hello *world*".to_string(),
            body: "Some **bold** text".to_string(),
            likes: 2,
        }
    }

    #[test]
    fn test_render_basic() {
        let card = render(&article());
        assert_eq!(card.id, "abc123");
        assert_eq!(card.like_control_id, "like-btn-abc123");
        assert_eq!(card.publish_datetime, "2021-03-01 12:00 (UTC)");
        assert_eq!(card.author.as_str(), "Ada");
        assert_eq!(card.mailto.as_deref(), Some("mailto:ada@example.com"));
        assert!(card.title.as_str().contains("<em>world</em>"));
        assert!(card.body.as_str().contains("<strong>bold</strong>"));
        assert_eq!(card.like_label(), "Like it (2)");
    }

    #[test]
    fn test_render_strips_injection() {
        let mut a = article();
        a.title = "<script>alert('t')</script>\n\nTitle".to_string();
        a.body = "<img src=x onerror=alert(1)>\n\n[x](javascript:alert(2))".to_string();
        a.publisher_name = "<script>alert(3)</script>Mallory".to_string();
        a.publisher_email = "\"><script>alert(4)</script>@x.com".to_string();

        let card = render(&a);
        for markup in [&card.title, &card.body, &card.author] {
            assert!(!markup.as_str().contains("<script"), "{}", markup);
            assert!(!markup.as_str().contains("onerror"), "{}", markup);
            assert!(!markup.as_str().contains("javascript:"), "{}", markup);
        }
        assert_eq!(card.author.as_str(), "Mallory");
        assert_eq!(card.mailto, None);
    }

    #[test]
    fn test_render_output_is_stable_under_resanitizing() {
        let mut a = article();
        a.body = "<b onclick=\"x()\">hi</b> & <i>there</i>".to_string();
        let card = render(&a);
        assert_eq!(sanitize(card.body.as_str()), card.body);
        assert_eq!(sanitize(card.title.as_str()), card.title);
    }

    #[test]
    fn test_render_fully_stripped_fields() {
        let mut a = article();
        a.publisher_name = "<script>alert(1)</script>".to_string();
        a.title = String::new();
        let card = render(&a);
        assert!(card.author.is_empty());
        assert!(card.title.is_empty());
        assert_eq!(card.id, "abc123");
    }

    #[test]
    fn test_like_label() {
        assert_eq!(like_label(0), "Like it (0)");
        assert_eq!(like_label(7), "Like it (7)");
    }
}
