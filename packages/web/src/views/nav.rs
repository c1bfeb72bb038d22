use dioxus::prelude::*;
use ui::{use_auth, LogoutButton, Navbar};

use crate::Route;

/// Top navigation shared by the signed-in pages.
#[component]
pub fn SiteNav() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    rsx! {
        Navbar {
            Link {
                class: "navbar-brand",
                to: Route::Home {},
                "Ripple"
            }
            div {
                class: "navbar-links",
                if let Some(user) = auth().user {
                    Link {
                        class: "navbar-link",
                        to: Route::Profile { user_id: user.id.clone() },
                        "Profile"
                    }
                    Link {
                        class: "navbar-link",
                        to: Route::Settings {},
                        "Settings"
                    }
                    LogoutButton {
                        class: "navbar-link",
                        on_logged_out: move |_| {
                            nav.replace(Route::Login {});
                        },
                    }
                }
            }
        }
    }
}
