//! Scriptable [`BlogApi`] for tests.
//!
//! Records every call and answers from queued responses. Built with
//! interior mutability; the widget runs on a single thread.

use std::cell::RefCell;
use std::collections::VecDeque;

use crate::core::api::{BlogApi, Published};
use crate::core::error::ApiError;
use crate::models::{Article, DraftArticle};

/// A request the mock received.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    LatestArticles,
    Like(String),
    Publish(DraftArticle),
}

#[derive(Default)]
pub struct MockApi {
    latest: RefCell<VecDeque<Result<Vec<Article>, ApiError>>>,
    likes: RefCell<VecDeque<Result<u64, ApiError>>>,
    publishes: RefCell<VecDeque<Result<Published, ApiError>>>,
    calls: RefCell<Vec<Call>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latest(self, result: Result<Vec<Article>, ApiError>) -> Self {
        self.latest.borrow_mut().push_back(result);
        self
    }

    pub fn with_like(self, result: Result<u64, ApiError>) -> Self {
        self.likes.borrow_mut().push_back(result);
        self
    }

    pub fn with_publish(self, result: Result<Published, ApiError>) -> Self {
        self.publishes.borrow_mut().push_back(result);
        self
    }

    /// Every call received so far, in order.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }

    fn unscripted<T>() -> Result<T, ApiError> {
        Err(ApiError::MissingData(Some("no scripted response".to_string())))
    }
}

impl BlogApi for MockApi {
    async fn latest_articles(&self) -> Result<Vec<Article>, ApiError> {
        self.record(Call::LatestArticles);
        self.latest
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(Self::unscripted)
    }

    async fn like_article(&self, article_id: &str) -> Result<u64, ApiError> {
        self.record(Call::Like(article_id.to_string()));
        self.likes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(Self::unscripted)
    }

    async fn publish_article(&self, draft: &DraftArticle) -> Result<Published, ApiError> {
        self.record(Call::Publish(draft.clone()));
        self.publishes
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(Self::unscripted)
    }
}

/// Build an article with predictable fields.
pub fn sample_article(id: &str, likes: u64) -> Article {
    Article {
        id: id.to_string(),
        publish_datetime: "2021-03-01 12:00 (UTC)".to_string(),
        publisher_email: format!("{}@example.com", id),
        publisher_name: format!("Author {}", id),
        title: format!("Title {}", id),
        body: format!("Body of *{}*", id),
        likes,
    }
}
