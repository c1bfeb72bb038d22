use dioxus::prelude::*;
use store::FeedRequest;
use ui::{use_auth, PostFeed, ProfileCard};

use crate::views::SiteNav;
use crate::Route;

/// A user's profile: the header card plus their posts, newest first. The
/// `user_id` segment is reactive, so navigating between profiles reloads
/// both server futures in place.
#[component]
pub fn Profile(user_id: ReadOnlySignal<String>) -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let profile = use_server_future(move || api::get_user_by_id(user_id()))?;
    let posts = use_server_future(move || api::get_user_posts(user_id()))?;

    let seed = match posts() {
        Some(Ok(response)) if response.success => Some(response.posts),
        _ => None,
    };

    let on_view_profile = move |id: String| {
        nav.push(Route::Profile { user_id: id });
    };

    match profile() {
        Some(Ok(Some(user))) => {
            let is_owner = auth().user.map(|me| me.id == user.id).unwrap_or(false);
            let heading = if is_owner {
                "Your Posts".to_string()
            } else {
                format!("{}'s Posts", user.name)
            };
            rsx! {
                SiteNav {}
                main {
                    class: "page",
                    ProfileCard {
                        user: user.clone(),
                        is_owner,
                        on_edit_profile: move |_| {
                            nav.push(Route::Settings {});
                        },
                    }
                    section {
                        class: "profile-posts",
                        h2 { class: "profile-posts-heading", "{heading}" }
                        PostFeed {
                            request: FeedRequest::UserPosts { user_id: user_id() },
                            seed,
                            on_view_profile,
                        }
                    }
                }
            }
        }
        Some(Ok(None)) => rsx! {
            SiteNav {}
            main {
                class: "page",
                div {
                    class: "not-found",
                    h1 { "User not found" }
                    p { "This profile does not exist." }
                    Link { to: Route::Home {}, "Back to home" }
                }
            }
        },
        Some(Err(_)) => rsx! {
            SiteNav {}
            main {
                class: "page",
                div { class: "feed-status", "Failed to load profile." }
            }
        },
        None => rsx! {
            SiteNav {}
            main {
                class: "page",
                div { class: "feed-status", "Loading..." }
            }
        },
    }
}
