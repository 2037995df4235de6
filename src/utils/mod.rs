//! Utility modules for web, DOM, and content operations.
//!
//! Provides:
//! - [`get_text`], [`post_text`] - Network fetching
//! - [`render_markdown`], [`sanitize`], [`Markup`] - Markdown rendering with XSS sanitization
//! - [`validate_mailto`], [`action_url`] - URL construction and validation
//! - [`console`] - Operator-visible logging

pub mod console;
pub mod dom;
mod fetch;
mod markdown;
mod url;

pub use fetch::{Body, TextResponse, get_text, post_text};
pub use markdown::{Markup, render_markdown, sanitize};
pub use url::{MailtoValidation, action_url, validate_mailto};
