//! Blog API client.
//!
//! One base endpoint serves every operation; the `action` query parameter
//! selects which. Responses share an envelope:
//!
//! ```text
//! { "action": "...", "message": "...", "data": { ... } }   // success
//! { "action": "...", "error": "..." }                      // failure
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::BlogConfig;
use crate::core::error::ApiError;
use crate::models::{Article, DraftArticle};
use crate::utils::{Body, TextResponse, action_url, get_text, post_text};

/// Operation selector sent as `?action=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    GetLatestArticles,
    LikeArticle,
    PublishArticle,
}

impl Action {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GetLatestArticles => "get-latest-articles",
            Self::LikeArticle => "like-article",
            Self::PublishArticle => "publish-article",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Wire Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    message: Option<String>,
    data: Option<T>,
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LatestArticlesData {
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct LikeData {
    new_likes_count: u64,
}

#[derive(Debug, Deserialize)]
struct PublishData {
    article: Article,
}

#[derive(Debug, Serialize)]
struct LikeRequest<'a> {
    article_id: &'a str,
}

#[derive(Debug, Serialize)]
struct PublishRequest<'a> {
    article: &'a DraftArticle,
}

/// Result of a successful `publish-article` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Published {
    /// The stored article, with server-assigned id and date.
    pub article: Article,
    /// Server's confirmation message.
    pub message: Option<String>,
}

/// Decode a response envelope, returning its `data` and `message`.
///
/// Any non-2xx status is an error even when the body carries data.
fn decode<T: DeserializeOwned>(response: &TextResponse) -> Result<(T, Option<String>), ApiError> {
    if !response.is_success() {
        let message = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|b| b.error);
        return Err(ApiError::Http {
            status: response.status,
            message,
        });
    }

    let envelope: Envelope<T> =
        serde_json::from_str(&response.body).map_err(|e| ApiError::Json(e.to_string()))?;

    match envelope.data {
        Some(data) => Ok((data, envelope.message)),
        None => Err(ApiError::MissingData(envelope.error.or(envelope.message))),
    }
}

fn encode<T: Serialize>(body: &T) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::Json(e.to_string()))
}

// =============================================================================
// Client
// =============================================================================

/// Operations the widget performs against the blog backend.
#[allow(async_fn_in_trait)]
pub trait BlogApi {
    /// Latest articles, newest first as the server orders them.
    async fn latest_articles(&self) -> Result<Vec<Article>, ApiError>;

    /// Register a like and return the new total.
    async fn like_article(&self, article_id: &str) -> Result<u64, ApiError>;

    /// Submit a draft and return the stored article.
    async fn publish_article(&self, draft: &DraftArticle) -> Result<Published, ApiError>;
}

/// [`BlogApi`] over the browser Fetch API.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpBlogApi {
    endpoint: String,
    post_content_type: String,
}

impl HttpBlogApi {
    pub fn new(config: &BlogConfig) -> Self {
        Self {
            endpoint: config.endpoint.clone(),
            post_content_type: config.post_content_type.clone(),
        }
    }

    fn url(&self, action: Action) -> String {
        action_url(&self.endpoint, action.as_str())
    }

    async fn get(&self, action: Action) -> Result<TextResponse, ApiError> {
        Ok(get_text(&self.url(action)).await?)
    }

    async fn post(&self, action: Action, text: String) -> Result<TextResponse, ApiError> {
        let body = Body {
            content_type: &self.post_content_type,
            text,
        };
        Ok(post_text(&self.url(action), body).await?)
    }
}

impl BlogApi for HttpBlogApi {
    async fn latest_articles(&self) -> Result<Vec<Article>, ApiError> {
        let response = self.get(Action::GetLatestArticles).await?;
        let (data, _) = decode::<LatestArticlesData>(&response)?;
        Ok(data.articles)
    }

    async fn like_article(&self, article_id: &str) -> Result<u64, ApiError> {
        let body = encode(&LikeRequest { article_id })?;
        let response = self.post(Action::LikeArticle, body).await?;
        let (data, _) = decode::<LikeData>(&response)?;
        Ok(data.new_likes_count)
    }

    async fn publish_article(&self, draft: &DraftArticle) -> Result<Published, ApiError> {
        let body = encode(&PublishRequest { article: draft })?;
        let response = self.post(Action::PublishArticle, body).await?;
        let (data, message) = decode::<PublishData>(&response)?;
        Ok(Published {
            article: data.article,
            message,
        })
    }
}
