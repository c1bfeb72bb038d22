use dioxus::prelude::*;
use store::{FeedRequest, PostInfo};

use crate::feed::use_feed;
use crate::PostCard;

/// A newest-first list of posts for one feed key. `seed` carries
/// server-rendered posts into the cache so the first paint is instant.
#[component]
pub fn PostFeed(
    request: ReadOnlySignal<FeedRequest>,
    seed: Option<Vec<PostInfo>>,
    on_view_profile: EventHandler<String>,
) -> Element {
    let posts = use_feed(request, seed);

    match posts() {
        None => rsx! {
            div { class: "feed-status", "Loading posts..." }
        },
        Some(posts) if posts.is_empty() => rsx! {
            div { class: "feed-empty", "No posts yet. Be the first to share something!" }
        },
        Some(posts) => rsx! {
            div {
                class: "post-feed",
                for post in posts {
                    PostCard {
                        key: "{post.id}",
                        post,
                        on_view_profile,
                    }
                }
            }
        },
    }
}
