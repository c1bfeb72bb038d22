//! Edit-profile form for the settings page.

use api::validation::{self, FieldError};
use api::UserInfo;
use dioxus::prelude::*;
use store::FeedRequest;

use crate::auth::AuthState;
use crate::components::{Button, ButtonVariant, Input, Label, Textarea};
use crate::feed::use_feed_store;
use crate::use_auth;

/// Name and bio editor. Runs the shared validation rules before calling the
/// server, so per-field problems render without a round trip. On success the
/// auth context and both feed keys are refreshed and `on_saved` fires with
/// the updated user.
#[component]
pub fn EditProfileForm(user: UserInfo, on_saved: EventHandler<UserInfo>) -> Element {
    let mut auth_state = use_auth();
    let store = use_feed_store();
    let mut name = use_signal(|| user.name.clone());
    let mut bio = use_signal(|| user.bio.clone().unwrap_or_default());
    let mut field_errors = use_signal(Vec::<FieldError>::new);
    let mut server_error = use_signal(|| Option::<String>::None);
    let mut saving = use_signal(|| false);

    let user_id = user.id.clone();
    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let store = store.clone();
        let user_id = user_id.clone();
        spawn(async move {
            server_error.set(None);

            if let Err(violations) = validation::validate_profile(&name(), &bio()) {
                field_errors.set(violations);
                return;
            }
            field_errors.set(Vec::new());
            saving.set(true);

            match api::update_profile(name(), bio()).await {
                Ok(response) if response.success => {
                    if let Some(updated) = response.user {
                        auth_state.set(AuthState {
                            user: Some(updated.clone()),
                            loading: false,
                        });
                        // Cached posts embed the author name.
                        store.invalidate(&FeedRequest::AllPosts);
                        store.invalidate(&FeedRequest::UserPosts { user_id });
                        on_saved.call(updated);
                    }
                }
                Ok(response) => server_error.set(Some(response.message)),
                Err(err) => {
                    tracing::error!(error = %err, "update_profile call failed");
                    server_error.set(Some("Failed to update profile.".to_string()));
                }
            }
            saving.set(false);
        });
    };

    let errors = field_errors();
    let name_errors: Vec<String> = errors
        .iter()
        .filter(|e| e.field == "name")
        .map(|e| e.message.clone())
        .collect();
    let bio_errors: Vec<String> = errors
        .iter()
        .filter(|e| e.field == "bio")
        .map(|e| e.message.clone())
        .collect();

    rsx! {
        form {
            class: "edit-profile-form",
            onsubmit: handle_save,

            if let Some(message) = server_error() {
                div { class: "form-error", "{message}" }
            }

            div {
                class: "form-field",
                Label { html_for: "profile-name", "Name" }
                Input {
                    id: "profile-name",
                    value: name(),
                    oninput: move |evt: FormEvent| name.set(evt.value()),
                }
                for message in name_errors {
                    p { class: "field-error", "{message}" }
                }
            }

            div {
                class: "form-field",
                Label { html_for: "profile-bio", "Bio" }
                Textarea {
                    id: "profile-bio",
                    placeholder: "Tell people a little about yourself",
                    rows: 5,
                    value: bio(),
                    oninput: move |evt: FormEvent| bio.set(evt.value()),
                }
                for message in bio_errors {
                    p { class: "field-error", "{message}" }
                }
            }

            Button {
                variant: ButtonVariant::Primary,
                r#type: "submit",
                disabled: saving(),
                if saving() { "Saving..." } else { "Save Changes" }
            }
        }
    }
}
