use api::UserInfo;
use dioxus::prelude::*;
use ui::{use_auth, EditProfileForm};

use crate::views::SiteNav;
use crate::Route;

/// Profile settings. Renders the edit form once the session user is known;
/// saving navigates to the refreshed profile.
#[component]
pub fn Settings() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    if !auth().loading && auth().user.is_none() {
        nav.replace(Route::Login {});
    }

    rsx! {
        SiteNav {}
        main {
            class: "page page-narrow",
            h1 { class: "page-title", "Profile Settings" }
            if let Some(user) = auth().user {
                EditProfileForm {
                    user: user.clone(),
                    on_saved: move |updated: UserInfo| {
                        nav.push(Route::Profile {
                            user_id: updated.id,
                        });
                    },
                }
            } else {
                div { class: "feed-status", "Loading..." }
            }
        }
    }
}
