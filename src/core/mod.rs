//! Core business logic for the blog widget.
//!
//! This module provides:
//! - [`BlogApi`] and its Fetch-based implementation [`HttpBlogApi`]
//! - [`render`](render::render) turning articles into sanitized cards
//! - [`actions`]: feed loading, liking and publishing

pub mod actions;
pub mod api;
pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod render;

pub use api::{BlogApi, HttpBlogApi};
