//! Publish dialog components.
//!
//! [`PublishButton`] opens the dialog (clearing the form), [`PublishDialog`]
//! binds the four draft fields to [`BlogContext::draft`] and submits them
//! through [`actions::publish`].

use leptos::{ev, prelude::*};
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::app::BlogContext;
use crate::components::icons as ic;
use crate::config::dom_ids::PUBLISH_DIALOG;
use crate::core::{HttpBlogApi, actions};
use crate::models::DraftField;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/publish/publish.module.css");

/// Button that opens the publish dialog.
#[component]
pub fn PublishButton() -> impl IntoView {
    let ctx = use_context::<BlogContext>().expect("BlogContext must be provided at root");

    view! {
        <button
            class=css::openButton
            on:click=move |_| actions::open_publish_dialog(&ctx)
        >
            <Icon icon=ic::EDIT />
            <span>"Publish an article"</span>
        </button>
    }
}

/// Modal dialog with the publish form.
///
/// Stays open after a failed submission so the visitor can retry.
#[component]
pub fn PublishDialog() -> impl IntoView {
    let ctx = use_context::<BlogContext>().expect("BlogContext must be provided at root");
    let api = StoredValue::new(
        use_context::<HttpBlogApi>().expect("HttpBlogApi must be provided at root"),
    );

    // Focus the first field once the dialog is in the DOM
    Effect::new(move || {
        if ctx.dialog_open.get() {
            request_animation_frame(|| {
                dom::focus_by_id(DraftField::Author.input_id());
            });
        }
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let api = api.get_value();
        spawn_local(async move {
            let _ = actions::publish(&ctx, &api).await;
        });
    };

    let handle_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            actions::close_publish_dialog(&ctx);
        }
    };

    let submit_label = move || {
        if ctx.submitting.get() {
            "Publishing..."
        } else {
            "Publish"
        }
    };

    view! {
        <Show when=move || ctx.dialog_open.get()>
            <div class=css::backdrop on:click=move |_| actions::close_publish_dialog(&ctx) />
            <div
                id=PUBLISH_DIALOG
                class=css::dialog
                role="dialog"
                aria-modal="true"
                aria-labelledby="publish-dialog-title"
                on:keydown=handle_keydown
            >
                <header class=css::header>
                    <h3 id="publish-dialog-title">"Publish an article"</h3>
                    <button
                        class=css::closeButton
                        on:click=move |_| actions::close_publish_dialog(&ctx)
                        title="Close (Esc)"
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>

                <form class=css::form on:submit=on_submit novalidate=true>
                    <DraftInput field=DraftField::Author kind="text" />
                    <DraftInput field=DraftField::Email kind="email" />
                    <DraftInput field=DraftField::Title kind="text" />
                    <DraftTextArea field=DraftField::Body />

                    <button
                        type="submit"
                        class=css::submitButton
                        disabled=move || ctx.submitting.get()
                    >
                        {submit_label}
                    </button>
                </form>
            </div>
        </Show>
    }
}

/// Single-line form field bound to one draft field.
#[component]
fn DraftInput(field: DraftField, kind: &'static str) -> impl IntoView {
    let ctx = use_context::<BlogContext>().expect("BlogContext must be provided at root");

    view! {
        <label class=css::field>
            <span class=css::label>{field.label()}</span>
            <input
                id=field.input_id()
                type=kind
                class=css::input
                prop:value=move || ctx.draft.with(|d| d.get(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.draft.update(|d| d.set(field, value));
                }
            />
        </label>
    }
}

/// Multi-line form field bound to one draft field.
#[component]
fn DraftTextArea(field: DraftField) -> impl IntoView {
    let ctx = use_context::<BlogContext>().expect("BlogContext must be provided at root");

    view! {
        <label class=css::field>
            <span class=css::label>{field.label()}" (markdown)"</span>
            <textarea
                id=field.input_id()
                class=css::textarea
                rows="10"
                prop:value=move || ctx.draft.with(|d| d.get(field).to_string())
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    ctx.draft.update(|d| d.set(field, value));
                }
            />
        </label>
    }
}
