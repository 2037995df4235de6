//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Article`], [`DraftArticle`], [`DraftField`] - Records exchanged with the blog API
//! - [`Feed`], [`FeedEntry`] - Ordered rendered articles on the page
//! - [`Notice`], [`NoticeKind`], [`Delivery`] - Messages for the visitor

mod article;
mod feed;
mod notice;

pub use article::{Article, DraftArticle, DraftField};
pub use feed::{Feed, FeedEntry};
pub use notice::{Delivery, Notice, NoticeKind};
