//! User-initiated actions.
//!
//! Each action takes the [`BlogContext`] it mutates and the [`BlogApi`] it
//! talks to. Failures are isolated to the action that raised them: they are
//! logged, shown to the visitor, and returned to the caller; nothing is
//! retried or rolled back.

use leptos::prelude::*;

use crate::app::BlogContext;
use crate::config::GENERIC_ERROR_MESSAGE;
use crate::core::BlogApi;
use crate::core::api::Action;
use crate::core::error::{ActionError, ApiError};
use crate::core::render::render;
use crate::models::{Article, Notice};
use crate::utils::console;

/// Fallback confirmation when the server sends no message.
const PUBLISHED_MESSAGE: &str = "Article published";

fn report(ctx: &BlogContext, action: Action, error: &ApiError, notice: Notice) {
    console::error(&format!("{} failed: {}", action, error));
    ctx.notify(notice);
}

/// Load the latest articles and append them to the feed in server order.
///
/// Returns the number of articles added.
pub async fn load<A: BlogApi>(ctx: &BlogContext, api: &A) -> Result<usize, ActionError> {
    match api.latest_articles().await {
        Ok(articles) => {
            let count = articles.len();
            console::info(&format!("loaded {} articles", count));
            ctx.feed.update(|feed| feed.append_all(articles.iter().map(render)));
            Ok(count)
        }
        Err(e) => {
            report(
                ctx,
                Action::GetLatestArticles,
                &e,
                Notice::alert(GENERIC_ERROR_MESSAGE),
            );
            Err(e.into())
        }
    }
}

/// Like an article and show the count the server returns.
///
/// The displayed count is replaced, never incremented locally. Concurrent
/// likes each overwrite it when they complete, so the last response to
/// arrive wins.
pub async fn like<A: BlogApi>(
    ctx: &BlogContext,
    api: &A,
    article_id: &str,
) -> Result<u64, ActionError> {
    match api.like_article(article_id).await {
        Ok(count) => {
            let mut shown = false;
            ctx.feed.update(|feed| shown = feed.set_likes(article_id, count));
            if !shown {
                console::warn(&format!(
                    "liked article {} is no longer in the feed",
                    article_id
                ));
            }
            Ok(count)
        }
        Err(e) => {
            report(
                ctx,
                Action::LikeArticle,
                &e,
                Notice::alert(GENERIC_ERROR_MESSAGE),
            );
            Err(e.into())
        }
    }
}

/// Validate and submit the current draft.
///
/// An invalid draft raises an alert and sends nothing. On success the new
/// article is placed above all others and the dialog closes; on failure the
/// dialog stays open with the draft intact.
pub async fn publish<A: BlogApi>(ctx: &BlogContext, api: &A) -> Result<Article, ActionError> {
    let draft = ctx.draft.get_untracked();

    if let Err(e) = draft.validate() {
        ctx.notify(Notice::alert(e.to_string()));
        return Err(e.into());
    }

    ctx.submitting.set(true);
    let result = api.publish_article(&draft).await;
    ctx.submitting.set(false);

    match result {
        Ok(published) => {
            let card = render(&published.article);
            ctx.feed.update(|feed| feed.prepend(card));
            ctx.dialog_open.set(false);
            ctx.notify(Notice::success_toast(
                published
                    .message
                    .unwrap_or_else(|| PUBLISHED_MESSAGE.to_string()),
            ));
            Ok(published.article)
        }
        Err(e) => {
            report(
                ctx,
                Action::PublishArticle,
                &e,
                Notice::error_toast(GENERIC_ERROR_MESSAGE),
            );
            Err(e.into())
        }
    }
}

/// Open the publish dialog with every field cleared.
pub fn open_publish_dialog(ctx: &BlogContext) {
    ctx.draft.update(|d| d.clear());
    ctx.dialog_open.set(true);
}

/// Dismiss the publish dialog.
pub fn close_publish_dialog(ctx: &BlogContext) {
    ctx.dialog_open.set(false);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::api::Published;
    use crate::core::error::{FetchError, ValidationError};
    use crate::core::mock::{Call, MockApi, sample_article};
    use crate::models::{DraftArticle, DraftField, NoticeKind};

    fn filled_draft() -> DraftArticle {
        DraftArticle {
            author: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            title: "New".to_string(),
            body: "Fresh *post*".to_string(),
        }
    }

    async fn loaded(ids: &[&str]) -> BlogContext {
        let ctx = BlogContext::new();
        let articles = ids.iter().map(|id| sample_article(id, 1)).collect();
        let api = MockApi::new().with_latest(Ok(articles));
        load(&ctx, &api).await.unwrap();
        ctx
    }

    fn alert_messages(ctx: &BlogContext) -> Vec<String> {
        ctx.alerts
            .with_untracked(|q| q.iter().map(|n| n.message.clone()).collect())
    }

    fn only_toast(ctx: &BlogContext) -> Notice {
        ctx.toasts.with_untracked(|t| {
            assert_eq!(t.len(), 1, "toasts: {:?}", t);
            t[0].clone()
        })
    }

    fn feed_ids(ctx: &BlogContext) -> Vec<String> {
        ctx.feed
            .with_untracked(|f| f.ids().into_iter().map(String::from).collect())
    }

    #[tokio::test]
    async fn test_load_appends_in_server_order() {
        let ctx = loaded(&["a1", "a2", "a3"]).await;
        assert_eq!(feed_ids(&ctx), vec!["a1", "a2", "a3"]);
        assert!(alert_messages(&ctx).is_empty());
        assert!(ctx.toasts.with_untracked(Vec::is_empty));
    }

    #[tokio::test]
    async fn test_load_failure_alerts() {
        let ctx = BlogContext::new();
        let offline = FetchError::NetworkError("Failed to fetch".to_string());
        let api = MockApi::new().with_latest(Err(offline.clone().into()));

        let err = load(&ctx, &api).await.unwrap_err();
        assert_eq!(err, ActionError::Api(ApiError::Fetch(offline)));
        assert!(ctx.feed.with_untracked(|f| f.is_empty()));
        assert_eq!(alert_messages(&ctx), vec![GENERIC_ERROR_MESSAGE]);
    }

    #[tokio::test]
    async fn test_like_replaces_count() {
        let ctx = loaded(&["a1", "a2"]).await;
        let api = MockApi::new().with_like(Ok(7));

        assert_eq!(like(&ctx, &api, "a2").await.unwrap(), 7);
        assert_eq!(api.calls(), vec![Call::Like("a2".to_string())]);

        let label = ctx.feed.with_untracked(|f| {
            f.entries()
                .iter()
                .find(|e| e.card.id == "a2")
                .map(|e| e.card.like_label())
        });
        assert_eq!(label.as_deref(), Some("Like it (7)"));
        assert_eq!(ctx.feed.with_untracked(|f| f.likes("a1")), Some(1));
    }

    #[tokio::test]
    async fn test_like_last_response_wins() {
        let ctx = loaded(&["a1"]).await;
        let api = MockApi::new().with_like(Ok(9)).with_like(Ok(8));

        like(&ctx, &api, "a1").await.unwrap();
        like(&ctx, &api, "a1").await.unwrap();
        assert_eq!(ctx.feed.with_untracked(|f| f.likes("a1")), Some(8));
    }

    #[tokio::test]
    async fn test_like_failure_leaves_count() {
        let ctx = loaded(&["a1"]).await;
        let api = MockApi::new().with_like(Err(ApiError::Http {
            status: 400,
            message: Some("Article not found".to_string()),
        }));

        assert!(like(&ctx, &api, "a1").await.is_err());
        assert_eq!(ctx.feed.with_untracked(|f| f.likes("a1")), Some(1));
        assert_eq!(alert_messages(&ctx), vec![GENERIC_ERROR_MESSAGE]);
    }

    #[tokio::test]
    async fn test_like_failure_keeps_publish_toast() {
        let ctx = loaded(&["a1"]).await;
        open_publish_dialog(&ctx);
        ctx.draft.set(filled_draft());

        let api = MockApi::new()
            .with_publish(Ok(Published {
                article: sample_article("new", 0),
                message: Some("Article published".to_string()),
            }))
            .with_like(Err(FetchError::NetworkError("Failed to fetch".to_string()).into()));

        publish(&ctx, &api).await.unwrap();
        assert!(like(&ctx, &api, "a1").await.is_err());

        let toast = only_toast(&ctx);
        assert_eq!(toast.kind, NoticeKind::Success);
        assert_eq!(toast.message, "Article published");
        assert_eq!(alert_messages(&ctx), vec![GENERIC_ERROR_MESSAGE]);
    }

    #[tokio::test]
    async fn test_publish_with_empty_field_sends_nothing() {
        for field in DraftField::ALL {
            let ctx = BlogContext::new();
            open_publish_dialog(&ctx);
            let mut draft = filled_draft();
            draft.set(field, String::new());
            ctx.draft.set(draft);

            let api = MockApi::new();
            let err = publish(&ctx, &api).await.unwrap_err();

            assert_eq!(
                err,
                ActionError::Validation(ValidationError::EmptyFields(vec![field]))
            );
            assert!(api.calls().is_empty());
            assert!(ctx.dialog_open.get_untracked());

            let alerts = alert_messages(&ctx);
            assert_eq!(alerts.len(), 1);
            assert!(alerts[0].contains(field.label()));
        }
    }

    #[tokio::test]
    async fn test_publish_success_prepends_and_closes() {
        let ctx = loaded(&["a1", "a2"]).await;
        open_publish_dialog(&ctx);
        ctx.draft.set(filled_draft());

        let api = MockApi::new().with_publish(Ok(Published {
            article: sample_article("new", 0),
            message: Some("Article published".to_string()),
        }));

        let article = publish(&ctx, &api).await.unwrap();
        assert_eq!(article.id, "new");
        assert_eq!(api.calls(), vec![Call::Publish(filled_draft())]);
        assert_eq!(feed_ids(&ctx), vec!["new", "a1", "a2"]);
        assert!(!ctx.dialog_open.get_untracked());
        assert!(!ctx.submitting.get_untracked());

        let toast = only_toast(&ctx);
        assert_eq!(toast.kind, NoticeKind::Success);
        assert_eq!(toast.message, "Article published");
        assert!(alert_messages(&ctx).is_empty());
    }

    #[tokio::test]
    async fn test_publish_failure_keeps_dialog_and_feed() {
        let ctx = loaded(&["a1"]).await;
        open_publish_dialog(&ctx);
        ctx.draft.set(filled_draft());

        let api = MockApi::new().with_publish(Err(ApiError::Http {
            status: 400,
            message: Some("Another identical article is already published".to_string()),
        }));

        assert!(publish(&ctx, &api).await.is_err());
        assert_eq!(feed_ids(&ctx), vec!["a1"]);
        assert!(ctx.dialog_open.get_untracked());
        assert_eq!(ctx.draft.get_untracked(), filled_draft());
        assert!(!ctx.submitting.get_untracked());

        let toast = only_toast(&ctx);
        assert_eq!(toast.kind, NoticeKind::Error);
        assert_eq!(toast.message, GENERIC_ERROR_MESSAGE);
    }

    #[test]
    fn test_open_dialog_clears_fields() {
        let ctx = BlogContext::new();
        ctx.draft.set(filled_draft());
        open_publish_dialog(&ctx);
        assert!(ctx.dialog_open.get_untracked());
        assert_eq!(ctx.draft.get_untracked(), DraftArticle::default());

        close_publish_dialog(&ctx);
        assert!(!ctx.dialog_open.get_untracked());
    }
}
