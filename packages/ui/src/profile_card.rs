use api::UserInfo;
use dioxus::prelude::*;

use crate::components::{Avatar, AvatarSize, Button, ButtonVariant};
use crate::time;

/// Profile header: avatar, name, handle, bio, join date. The edit button is
/// shown only on the signed-in user's own profile.
#[component]
pub fn ProfileCard(
    user: UserInfo,
    is_owner: bool,
    on_edit_profile: EventHandler<()>,
) -> Element {
    let handle = user.handle().to_string();
    let joined = time::format_date(&user.created_at);
    let bio = user.bio.clone().unwrap_or_default();

    rsx! {
        section {
            class: "profile-card",
            div {
                class: "profile-card-header",
                Avatar { name: user.name.clone(), size: AvatarSize::Large }
                div {
                    class: "profile-card-identity",
                    h1 { class: "profile-card-name", "{user.name}" }
                    span { class: "profile-card-handle", "@{handle}" }
                }
                if is_owner {
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| on_edit_profile.call(()),
                        "Edit Profile"
                    }
                }
            }
            div {
                class: "profile-card-about",
                h2 { "About Me" }
                if bio.is_empty() {
                    p { class: "profile-card-bio profile-card-bio-empty", "No bio provided yet." }
                } else {
                    p { class: "profile-card-bio", "{bio}" }
                }
            }
            div { class: "profile-card-joined", "Joined: {joined}" }
        }
    }
}
