//! Root application module.
//!
//! Contains the main App component, the BlogContext definition,
//! and application-level setup logic following Leptos conventions.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::{FeedView, Notifications, PublishButton, PublishDialog};
use crate::config::{APP_NAME, BlogConfig};
use crate::core::{HttpBlogApi, actions};
use crate::models::{Delivery, DraftArticle, Feed, Notice};

// ============================================================================
// BlogContext
// ============================================================================

/// Application-wide reactive context.
///
/// Created once when the page loads and provided at the root of the
/// component tree; every action receives it explicitly.
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos signals, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct BlogContext {
    /// Rendered articles, top to bottom.
    pub feed: RwSignal<Feed>,
    /// Whether the publish dialog is shown.
    pub dialog_open: RwSignal<bool>,
    /// Current contents of the publish form.
    pub draft: RwSignal<DraftArticle>,
    /// A publish request is in flight.
    pub submitting: RwSignal<bool>,
    /// Alerts waiting to be shown, oldest first.
    pub alerts: RwSignal<Vec<Notice>>,
    /// Toasts on screen, oldest first. Each one is dismissed on its own.
    pub toasts: RwSignal<Vec<Notice>>,
}

impl BlogContext {
    /// Creates a new context with an empty feed and a closed dialog.
    pub fn new() -> Self {
        Self {
            feed: RwSignal::new(Feed::new()),
            dialog_open: RwSignal::new(false),
            draft: RwSignal::new(DraftArticle::default()),
            submitting: RwSignal::new(false),
            alerts: RwSignal::new(Vec::new()),
            toasts: RwSignal::new(Vec::new()),
        }
    }

    /// Queue a notice for the visitor.
    ///
    /// Alerts and toasts are kept apart; neither replaces the other.
    pub fn notify(&self, notice: Notice) {
        match notice.delivery {
            Delivery::Alert => self.alerts.update(|q| q.push(notice)),
            Delivery::Toast => self.toasts.update(|t| t.push(notice)),
        }
    }

    /// Remove the toast with `id`, if it is still shown.
    pub fn dismiss(&self, id: usize) {
        self.toasts.update(|t| t.retain(|n| n.id != id));
    }

    /// Take every pending alert, leaving the queue empty.
    pub fn take_alerts(&self) -> Vec<Notice> {
        self.alerts.try_update(std::mem::take).unwrap_or_default()
    }
}

impl Default for BlogContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// This component:
/// - Loads configuration and creates the API client
/// - Creates and provides the BlogContext
/// - Starts the initial feed load
#[component]
pub fn App() -> impl IntoView {
    let config = BlogConfig::load();
    let api = HttpBlogApi::new(&config);
    let ctx = BlogContext::new();

    provide_context(config);
    provide_context(api.clone());
    provide_context(ctx);

    spawn_local(async move {
        let _ = actions::load(&ctx, &api).await;
    });

    view! {
        <main>
            <header style="
                display: flex;
                align-items: center;
                justify-content: space-between;
                max-width: 720px;
                margin: 0 auto;
                padding: 1.5rem 1rem;
            ">
                <h1>{APP_NAME}</h1>
                <PublishButton />
            </header>
            <FeedView />
            <PublishDialog />
            <Notifications />
        </main>
    }
}
