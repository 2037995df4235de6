//! Markdown rendering and HTML sanitization.
//!
//! Provides safe markdown-to-HTML conversion with XSS protection. Every
//! string that is injected as raw HTML must go through [`sanitize`], which
//! is the only way to obtain a [`Markup`] value.

use comrak::Options;

/// HTML that has passed the sanitizer and may be injected with `inner_html`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    #[cfg(test)]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for Markup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Convert markdown content to (unsanitized) HTML.
///
/// Supports extended markdown syntax including:
/// - Strikethrough (`~~text~~`)
/// - Tables
/// - Autolinks
///
/// Raw HTML inside the markdown is omitted by the renderer.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::default();
    options.extension.strikethrough = true;
    options.extension.table = true;
    options.extension.autolink = true;

    comrak::markdown_to_html(markdown, &options)
}

/// Sanitize untrusted HTML using `ammonia`.
///
/// Removes scripts, event handler attributes and dangerous URL schemes.
/// Sanitizing already sanitized output leaves it unchanged.
pub fn sanitize(html: &str) -> Markup {
    Markup(ammonia::clean(html))
}

/// Render markdown to HTML and sanitize the result.
pub fn render_markdown(markdown: &str) -> Markup {
    sanitize(&markdown_to_html(markdown))
}
