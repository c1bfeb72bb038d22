//! Create-post dialog with optimistic feed insertion.

use dioxus::prelude::*;
use store::FeedRequest;

use crate::components::{Button, ButtonVariant, Dialog, Textarea};
use crate::feed::use_feed_store;
use crate::use_auth;

/// Trigger button plus the dialog it opens. Submitting unshifts a placeholder
/// into the home feed and closes the dialog before the server answers; on
/// failure the placeholder is rolled back and the dialog reopens with the
/// draft and the error message.
#[component]
pub fn CreatePostForm() -> Element {
    let auth = use_auth();
    let store = use_feed_store();
    let mut open = use_signal(|| false);
    let mut draft = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    if auth().user.is_none() {
        return rsx! {};
    }

    let handle_submit = move |_| {
        let store = store.clone();
        spawn(async move {
            let Some(user) = auth().user else {
                return;
            };

            let content = draft().trim().to_string();
            if let Err(violations) = api::validation::validate_post_content(&content) {
                error.set(Some(api::validation::join_messages(&violations)));
                return;
            }

            error.set(None);
            submitting.set(true);

            let placeholder =
                store.insert_placeholder(&FeedRequest::AllPosts, content.clone(), user.as_author());
            open.set(false);

            match api::create_post(content).await {
                Ok(response) if response.success => {
                    if let Some(post) = response.post {
                        store.confirm_placeholder(&FeedRequest::AllPosts, &placeholder.id, post);
                    }
                    // The author's profile feed now lags by one post.
                    store.invalidate(&FeedRequest::UserPosts {
                        user_id: user.id.clone(),
                    });
                    draft.set(String::new());
                }
                Ok(response) => {
                    store.remove_placeholder(&FeedRequest::AllPosts, &placeholder.id);
                    error.set(Some(response.message));
                    open.set(true);
                }
                Err(err) => {
                    store.remove_placeholder(&FeedRequest::AllPosts, &placeholder.id);
                    tracing::error!(error = %err, "create_post call failed");
                    error.set(Some("Failed to create post.".to_string()));
                    open.set(true);
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            class: "create-post",
            Button {
                variant: ButtonVariant::Primary,
                onclick: move |_| {
                    error.set(None);
                    open.set(true);
                },
                "Create New Post"
            }
            if open() {
                Dialog {
                    on_close: move |_| open.set(false),
                    div {
                        class: "dialog-body",
                        h2 { class: "dialog-title", "Create New Post" }
                        if let Some(message) = error() {
                            div { class: "form-error", "{message}" }
                        }
                        Textarea {
                            id: "new-post-content",
                            placeholder: "Share your thoughts...",
                            rows: 4,
                            value: draft(),
                            oninput: move |evt: FormEvent| draft.set(evt.value()),
                        }
                        div {
                            class: "dialog-actions",
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| open.set(false),
                                "Cancel"
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                disabled: submitting(),
                                onclick: handle_submit,
                                if submitting() { "Posting..." } else { "Post" }
                            }
                        }
                    }
                }
            }
        }
    }
}
