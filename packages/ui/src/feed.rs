//! Feed store context and the subscription hook views render from.

use api::ServerFetcher;
use dioxus::prelude::*;
use store::{FeedEvent, FeedRequest, FeedStore, PostInfo};

/// The store used by the app: feeds loaded through the server functions.
pub type AppFeedStore = FeedStore<ServerFetcher>;

/// Provider component owning the shared [`FeedStore`].
/// Wrap the router with it so every view reads the same cache.
#[component]
pub fn FeedProvider(children: Element) -> Element {
    use_context_provider(|| AppFeedStore::new(ServerFetcher));
    rsx! {
        {children}
    }
}

/// Get the shared feed store.
pub fn use_feed_store() -> AppFeedStore {
    use_context::<AppFeedStore>()
}

/// Subscribes to one feed and mirrors its cached list into a signal: `None`
/// until the first load lands, then a snapshot that follows every store
/// change. `seed` installs server-rendered posts before the first load so the
/// initial paint needs no client fetch. Stale events trigger a reload.
pub fn use_feed(
    request: ReadOnlySignal<FeedRequest>,
    seed: Option<Vec<PostInfo>>,
) -> Signal<Option<Vec<PostInfo>>> {
    let store = use_feed_store();
    let mut posts = use_signal(|| None::<Vec<PostInfo>>);

    // The seed has to land before the watcher below runs its first load.
    {
        let store = store.clone();
        use_hook(move || {
            if let Some(seeded) = seed {
                store.seed(&request.peek(), seeded);
            }
        });
    }

    // Restarts whenever `request` changes; the store prunes the abandoned
    // subscription on its next notify.
    let _watcher = use_resource(move || {
        let store = store.clone();
        async move {
            let request = request();
            let mut subscription = store.subscribe(&request);
            posts.set(store.snapshot(&request));
            match store.ensure_loaded(&request).await {
                Ok(()) => posts.set(store.snapshot(&request)),
                Err(err) => tracing::warn!(error = %err, "feed load failed"),
            }
            while let Some(event) = subscription.next_event().await {
                match event {
                    FeedEvent::Updated => posts.set(store.snapshot(&request)),
                    FeedEvent::Stale => {
                        if let Err(err) = store.ensure_loaded(&request).await {
                            tracing::warn!(error = %err, "feed reload failed");
                        }
                    }
                }
            }
        }
    });

    posts
}
