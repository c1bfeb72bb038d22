use dioxus::prelude::*;
use store::PostInfo;

use crate::components::Avatar;
use crate::time;

/// One post in a feed. The author name links to the author's profile via
/// `on_view_profile`; navigation itself is owned by the routing layer.
#[component]
pub fn PostCard(post: PostInfo, on_view_profile: EventHandler<String>) -> Element {
    let card_class = if post.placeholder {
        // Not yet confirmed by the server; rendered dimmed.
        "post-card post-card-pending"
    } else {
        "post-card"
    };
    let timestamp = if post.placeholder {
        "Just now".to_string()
    } else {
        time::format_timestamp(&post.created_at)
    };
    let author_id = post.author.id.clone();

    rsx! {
        article {
            class: "{card_class}",
            header {
                class: "post-card-header",
                Avatar { name: post.author.name.clone() }
                div {
                    class: "post-card-meta",
                    button {
                        class: "post-card-author",
                        onclick: move |_| on_view_profile.call(author_id.clone()),
                        "{post.author.name}"
                    }
                    span { class: "post-card-time", "{timestamp}" }
                }
            }
            p { class: "post-card-content", "{post.content}" }
        }
    }
}
