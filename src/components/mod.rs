//! UI components built with Leptos.
//!
//! - [`feed`] - Article feed and article cards with like controls
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`notice`] - Alert and toast delivery
//! - [`publish`] - Publish button and dialog

pub mod feed;
pub mod icons;
pub mod notice;
pub mod publish;

pub use feed::FeedView;
pub use notice::Notifications;
pub use publish::{PublishButton, PublishDialog};
