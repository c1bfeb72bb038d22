use dioxus::prelude::*;
use store::FeedRequest;
use ui::{use_auth, CreatePostForm, PostFeed};

use crate::views::SiteNav;
use crate::Route;

/// The home feed. Server-rendered with the result of `get_posts`, which then
/// seeds the client cache so hydration paints without another fetch.
#[component]
pub fn Home() -> Element {
    let auth = use_auth();
    let nav = use_navigator();

    let feed = use_server_future(api::get_posts)?;

    // Feed pages need a session
    if !auth().loading && auth().user.is_none() {
        nav.replace(Route::Login {});
    }

    let seed = match feed() {
        Some(Ok(response)) if response.success => Some(response.posts),
        _ => None,
    };

    let on_view_profile = move |user_id: String| {
        nav.push(Route::Profile { user_id });
    };

    rsx! {
        SiteNav {}
        main {
            class: "page",
            CreatePostForm {}
            PostFeed {
                request: FeedRequest::AllPosts,
                seed,
                on_view_profile,
            }
        }
    }
}
