//! Article feed components.
//!
//! Renders the feed held in [`BlogContext`] as a list of article cards,
//! each with its own like control.

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::BlogContext;
use crate::components::icons as ic;
use crate::config::dom_ids::FEED_CONTAINER;
use crate::core::render::ArticleCard;
use crate::core::{HttpBlogApi, actions};
use crate::models::FeedEntry;

stylance::import_crate_style!(css, "src/components/feed/feed.module.css");

/// Feed container.
///
/// Rows are keyed by entry and like count, so a like re-renders only the
/// card whose count changed.
#[component]
pub fn FeedView() -> impl IntoView {
    let ctx = use_context::<BlogContext>().expect("BlogContext must be provided at root");

    view! {
        <div id=FEED_CONTAINER class=css::feed>
            <For
                each=move || ctx.feed.with(|f| f.entries().to_vec())
                key=|entry: &FeedEntry| (entry.key, entry.card.likes)
                children=|entry: FeedEntry| view! { <ArticleCardView card=entry.card /> }
            />
        </div>
    }
}

/// One article card.
///
/// Title, body and author arrive as sanitized [`Markup`](crate::utils::Markup)
/// and are the only values injected as HTML.
#[component]
pub fn ArticleCardView(card: ArticleCard) -> impl IntoView {
    let ctx = use_context::<BlogContext>().expect("BlogContext must be provided at root");
    let api = use_context::<HttpBlogApi>().expect("HttpBlogApi must be provided at root");

    let label = card.like_label();
    let article_id = card.id;

    let on_like = move |_: ev::MouseEvent| {
        let api = api.clone();
        let article_id = article_id.clone();
        spawn_local(async move {
            let _ = actions::like(&ctx, &api, &article_id).await;
        });
    };

    let author = card.author.into_string();
    let byline = match card.mailto {
        Some(href) => view! { <a href=href inner_html=author /> }.into_any(),
        None => view! { <span inner_html=author /> }.into_any(),
    };

    view! {
        <article class=css::post>
            <h2 class=css::title inner_html=card.title.into_string() />
            <p class=css::meta>
                {card.publish_datetime}
                " by "
                <b>{byline}</b>
            </p>
            <div class=css::body inner_html=card.body.into_string() />
            <p>
                <button id=card.like_control_id class=css::likeButton on:click=on_like>
                    <Icon icon=ic::HEART />
                    <span>{label}</span>
                </button>
            </p>
        </article>
    }
}
