//! # FeedStore — keyed client-side cache with optimistic inserts
//!
//! This module is the core of Ripple's client data layer. [`FeedStore`] keeps
//! one entry per [`FeedRequest`] and owns everything that happens to a feed
//! between server round trips: lazy population, seeding from server-rendered
//! data, invalidation after mutations, and the placeholder lifecycle behind
//! optimistic post creation. All loading goes through the injected
//! [`FeedFetcher`], so the same store runs against live server functions in
//! the app and against a stub in tests.
//!
//! ## Entry states
//!
//! | State | Meaning |
//! |-------|---------|
//! | `Loading` | A fetch for this entry is in flight; further loads are deduplicated. |
//! | `Fresh` | The cached list is current; reads are served without I/O. |
//! | `Stale` | The entry was invalidated (or a fetch failed); the next load refetches. |
//!
//! ## Read path
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`subscribe`](FeedStore::subscribe) | Returns a [`FeedSubscription`] delivering a [`FeedEvent`] whenever the entry changes or goes stale. |
//! | [`snapshot`](FeedStore::snapshot) | Clones the current cached list, if the entry exists. |
//! | [`seed`](FeedStore::seed) | Installs server-rendered posts as a `Fresh` entry so first paint needs no client fetch. Never clobbers an existing entry. |
//! | [`ensure_loaded`](FeedStore::ensure_loaded) | Fetches when the entry is absent or `Stale`; no-op when `Fresh` or already `Loading`. |
//!
//! ## Write path
//!
//! | Method | Description |
//! |--------|-------------|
//! | [`invalidate`](FeedStore::invalidate) | Marks an entry `Stale` and notifies subscribers. This is how mutations signal that a feed must be re-read. |
//! | [`insert_placeholder`](FeedStore::insert_placeholder) | Unshifts a local-only placeholder post while a create is in flight. |
//! | [`confirm_placeholder`](FeedStore::confirm_placeholder) | Swaps a placeholder for the server-confirmed post, in place, without duplicating an entry a concurrent refetch already delivered. |
//! | [`remove_placeholder`](FeedStore::remove_placeholder) | Rolls a failed create back, leaving the list exactly as before the submission. |
//!
//! Placeholders are matched only by their own local id, so overlapping
//! submissions never touch each other's entries. A refetch replaces the cached
//! list but re-prepends any live placeholders, so an in-flight create is not
//! dropped by a concurrent revalidation.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use futures::channel::mpsc;
use futures::StreamExt;

use crate::feed::{FeedFetcher, FeedRequest, FetchError};
use crate::models::{AuthorInfo, PostInfo};

/// What a subscriber should do about a change to its feed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeedEvent {
    /// The cached value changed; read a fresh snapshot.
    Updated,
    /// The entry went stale; trigger a reload.
    Stale,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EntryState {
    Loading,
    Fresh,
    Stale,
}

struct FeedEntry {
    posts: Vec<PostInfo>,
    state: EntryState,
}

impl FeedEntry {
    fn empty(state: EntryState) -> Self {
        Self {
            posts: Vec::new(),
            state,
        }
    }
}

struct Inner {
    entries: HashMap<FeedRequest, FeedEntry>,
    subscribers: HashMap<FeedRequest, Vec<mpsc::UnboundedSender<FeedEvent>>>,
    next_local_id: u64,
}

/// Event stream for one feed, handed out by [`FeedStore::subscribe`].
pub struct FeedSubscription {
    events: mpsc::UnboundedReceiver<FeedEvent>,
}

impl FeedSubscription {
    /// Waits for the next event. `None` once the store is gone.
    pub async fn next_event(&mut self) -> Option<FeedEvent> {
        self.events.next().await
    }
}

/// Keyed feed cache. Cheap to clone; clones share the same entries.
pub struct FeedStore<F> {
    fetcher: F,
    inner: Arc<Mutex<Inner>>,
}

impl<F: Clone> Clone for FeedStore<F> {
    fn clone(&self) -> Self {
        Self {
            fetcher: self.fetcher.clone(),
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: FeedFetcher> FeedStore<F> {
    pub fn new(fetcher: F) -> Self {
        Self {
            fetcher,
            inner: Arc::new(Mutex::new(Inner {
                entries: HashMap::new(),
                subscribers: HashMap::new(),
                next_local_id: 0,
            })),
        }
    }

    /// Registers a subscriber for `request` and returns its event stream.
    pub fn subscribe(&self, request: &FeedRequest) -> FeedSubscription {
        let (tx, rx) = mpsc::unbounded();
        self.inner
            .lock()
            .unwrap()
            .subscribers
            .entry(request.clone())
            .or_default()
            .push(tx);
        FeedSubscription { events: rx }
    }

    /// Clones the cached list for `request`, if an entry exists.
    pub fn snapshot(&self, request: &FeedRequest) -> Option<Vec<PostInfo>> {
        self.inner
            .lock()
            .unwrap()
            .entries
            .get(request)
            .map(|entry| entry.posts.clone())
    }

    /// Installs server-rendered posts as a `Fresh` entry. Ignored if the
    /// entry already exists, so navigating back never clobbers live data.
    pub fn seed(&self, request: &FeedRequest, posts: Vec<PostInfo>) {
        {
            let mut inner = self.inner.lock().unwrap();
            if inner.entries.contains_key(request) {
                return;
            }
            inner.entries.insert(
                request.clone(),
                FeedEntry {
                    posts,
                    state: EntryState::Fresh,
                },
            );
        }
        self.notify(request, FeedEvent::Updated);
    }

    /// Loads the entry if it is absent or stale. Fresh entries and entries
    /// with a fetch already in flight are left alone.
    pub async fn ensure_loaded(&self, request: &FeedRequest) -> Result<(), FetchError> {
        {
            let mut inner = self.inner.lock().unwrap();
            match inner.entries.get_mut(request) {
                Some(entry) if entry.state == EntryState::Stale => {
                    entry.state = EntryState::Loading;
                }
                Some(_) => return Ok(()),
                None => {
                    inner
                        .entries
                        .insert(request.clone(), FeedEntry::empty(EntryState::Loading));
                }
            }
        }
        self.reload(request).await
    }

    async fn reload(&self, request: &FeedRequest) -> Result<(), FetchError> {
        match self.fetcher.fetch(request).await {
            Ok(posts) => {
                {
                    let mut inner = self.inner.lock().unwrap();
                    let entry = inner
                        .entries
                        .entry(request.clone())
                        .or_insert_with(|| FeedEntry::empty(EntryState::Loading));
                    // Keep live placeholders above the fetched list.
                    let mut merged: Vec<PostInfo> = entry
                        .posts
                        .iter()
                        .filter(|post| post.placeholder)
                        .cloned()
                        .collect();
                    merged.extend(posts);
                    entry.posts = merged;
                    entry.state = EntryState::Fresh;
                }
                self.notify(request, FeedEvent::Updated);
                Ok(())
            }
            Err(err) => {
                // Keep whatever was cached; stale means the next load retries.
                let mut inner = self.inner.lock().unwrap();
                if let Some(entry) = inner.entries.get_mut(request) {
                    entry.state = EntryState::Stale;
                }
                Err(err)
            }
        }
    }

    /// Marks an existing entry stale and tells subscribers to reload it.
    pub fn invalidate(&self, request: &FeedRequest) {
        let marked = {
            let mut inner = self.inner.lock().unwrap();
            match inner.entries.get_mut(request) {
                Some(entry) => {
                    entry.state = EntryState::Stale;
                    true
                }
                None => false,
            }
        };
        if marked {
            self.notify(request, FeedEvent::Stale);
        }
    }

    /// Unshifts a local-only placeholder into the feed and returns it. The
    /// returned post carries the `local-<n>` id used to confirm or roll back.
    pub fn insert_placeholder(
        &self,
        request: &FeedRequest,
        content: impl Into<String>,
        author: AuthorInfo,
    ) -> PostInfo {
        let placeholder = {
            let mut inner = self.inner.lock().unwrap();
            inner.next_local_id += 1;
            let placeholder = PostInfo {
                id: format!("local-{}", inner.next_local_id),
                content: content.into(),
                author,
                created_at: String::new(),
                placeholder: true,
            };
            // A placeholder in a never-loaded feed leaves it stale so the
            // first real read still fetches.
            let entry = inner
                .entries
                .entry(request.clone())
                .or_insert_with(|| FeedEntry::empty(EntryState::Stale));
            entry.posts.insert(0, placeholder.clone());
            placeholder
        };
        self.notify(request, FeedEvent::Updated);
        placeholder
    }

    /// Replaces the placeholder with `local_id` by the server-confirmed post,
    /// keeping its position. If a concurrent refetch already delivered the
    /// confirmed id, the placeholder is just removed.
    pub fn confirm_placeholder(&self, request: &FeedRequest, local_id: &str, confirmed: PostInfo) {
        {
            let mut inner = self.inner.lock().unwrap();
            let Some(entry) = inner.entries.get_mut(request) else {
                return;
            };
            let slot = entry
                .posts
                .iter()
                .position(|post| post.placeholder && post.id == local_id);
            if let Some(index) = slot {
                entry.posts.remove(index);
            }
            let already_present = entry.posts.iter().any(|post| post.id == confirmed.id);
            if !already_present {
                let index = slot.unwrap_or(0).min(entry.posts.len());
                entry.posts.insert(index, confirmed);
            }
        }
        self.notify(request, FeedEvent::Updated);
    }

    /// Rolls a failed create back. The list ends up exactly as it was before
    /// the placeholder went in.
    pub fn remove_placeholder(&self, request: &FeedRequest, local_id: &str) {
        let removed = {
            let mut inner = self.inner.lock().unwrap();
            let Some(entry) = inner.entries.get_mut(request) else {
                return;
            };
            let before = entry.posts.len();
            entry
                .posts
                .retain(|post| !(post.placeholder && post.id == local_id));
            entry.posts.len() != before
        };
        if removed {
            self.notify(request, FeedEvent::Updated);
        }
    }

    fn notify(&self, request: &FeedRequest, event: FeedEvent) {
        let mut inner = self.inner.lock().unwrap();
        if let Some(subscribers) = inner.subscribers.get_mut(request) {
            subscribers.retain(|tx| tx.unbounded_send(event).is_ok());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Default)]
    struct StubFetcher {
        posts: Arc<Mutex<Vec<PostInfo>>>,
        calls: Arc<Mutex<u32>>,
        fail: Arc<Mutex<bool>>,
    }

    impl StubFetcher {
        fn serving(posts: Vec<PostInfo>) -> Self {
            let stub = Self::default();
            *stub.posts.lock().unwrap() = posts;
            stub
        }

        fn set_posts(&self, posts: Vec<PostInfo>) {
            *self.posts.lock().unwrap() = posts;
        }

        fn set_fail(&self, fail: bool) {
            *self.fail.lock().unwrap() = fail;
        }

        fn calls(&self) -> u32 {
            *self.calls.lock().unwrap()
        }
    }

    impl FeedFetcher for StubFetcher {
        async fn fetch(&self, _request: &FeedRequest) -> Result<Vec<PostInfo>, FetchError> {
            *self.calls.lock().unwrap() += 1;
            if *self.fail.lock().unwrap() {
                return Err(FetchError::new("Failed to fetch posts."));
            }
            Ok(self.posts.lock().unwrap().clone())
        }
    }

    fn author(id: &str, name: &str) -> AuthorInfo {
        AuthorInfo {
            id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn post(id: &str, content: &str) -> PostInfo {
        PostInfo {
            id: id.to_string(),
            content: content.to_string(),
            author: author("u1", "Alice"),
            created_at: "2026-08-24T10:00:00+00:00".to_string(),
            placeholder: false,
        }
    }

    #[tokio::test]
    async fn test_lazy_populate_on_first_load() {
        let fetcher = StubFetcher::serving(vec![post("p2", "second"), post("p1", "first")]);
        let store = FeedStore::new(fetcher.clone());
        let mut sub = store.subscribe(&FeedRequest::AllPosts);

        assert!(store.snapshot(&FeedRequest::AllPosts).is_none());

        store.ensure_loaded(&FeedRequest::AllPosts).await.unwrap();

        assert_eq!(fetcher.calls(), 1);
        assert_eq!(sub.next_event().await, Some(FeedEvent::Updated));
        let posts = store.snapshot(&FeedRequest::AllPosts).unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "p2");
        assert_eq!(posts[1].id, "p1");
    }

    #[tokio::test]
    async fn test_fresh_entry_is_not_refetched() {
        let fetcher = StubFetcher::serving(vec![post("p1", "first")]);
        let store = FeedStore::new(fetcher.clone());

        store.ensure_loaded(&FeedRequest::AllPosts).await.unwrap();
        store.ensure_loaded(&FeedRequest::AllPosts).await.unwrap();

        assert_eq!(fetcher.calls(), 1);
    }

    #[tokio::test]
    async fn test_seed_skips_initial_fetch_and_never_clobbers() {
        let fetcher = StubFetcher::serving(vec![post("remote", "from server")]);
        let store = FeedStore::new(fetcher.clone());

        store.seed(&FeedRequest::AllPosts, vec![post("seeded", "rendered")]);
        store.ensure_loaded(&FeedRequest::AllPosts).await.unwrap();

        assert_eq!(fetcher.calls(), 0);

        // A second seed must not replace live data.
        store.seed(&FeedRequest::AllPosts, vec![post("other", "late")]);
        let posts = store.snapshot(&FeedRequest::AllPosts).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "seeded");
    }

    #[tokio::test]
    async fn test_invalidate_marks_stale_and_next_load_refetches() {
        let fetcher = StubFetcher::serving(vec![post("p1", "first")]);
        let store = FeedStore::new(fetcher.clone());
        let mut sub = store.subscribe(&FeedRequest::AllPosts);

        store.ensure_loaded(&FeedRequest::AllPosts).await.unwrap();
        assert_eq!(sub.next_event().await, Some(FeedEvent::Updated));

        fetcher.set_posts(vec![post("p2", "second"), post("p1", "first")]);
        store.invalidate(&FeedRequest::AllPosts);
        assert_eq!(sub.next_event().await, Some(FeedEvent::Stale));

        store.ensure_loaded(&FeedRequest::AllPosts).await.unwrap();
        assert_eq!(fetcher.calls(), 2);
        let posts = store.snapshot(&FeedRequest::AllPosts).unwrap();
        assert_eq!(posts[0].id, "p2");
    }

    #[tokio::test]
    async fn test_invalidate_unknown_entry_is_a_no_op() {
        let fetcher = StubFetcher::default();
        let store = FeedStore::new(fetcher.clone());

        store.invalidate(&FeedRequest::UserPosts {
            user_id: "u9".to_string(),
        });

        assert!(store
            .snapshot(&FeedRequest::UserPosts {
                user_id: "u9".to_string(),
            })
            .is_none());
    }

    #[tokio::test]
    async fn test_failed_fetch_keeps_cached_value_and_allows_retry() {
        let fetcher = StubFetcher::serving(vec![post("p1", "first")]);
        let store = FeedStore::new(fetcher.clone());

        store.ensure_loaded(&FeedRequest::AllPosts).await.unwrap();

        fetcher.set_fail(true);
        store.invalidate(&FeedRequest::AllPosts);
        let err = store.ensure_loaded(&FeedRequest::AllPosts).await.unwrap_err();
        assert_eq!(err.message, "Failed to fetch posts.");

        // Old value still readable.
        let posts = store.snapshot(&FeedRequest::AllPosts).unwrap();
        assert_eq!(posts[0].id, "p1");

        // Entry stayed stale, so a retry fetches again.
        fetcher.set_fail(false);
        fetcher.set_posts(vec![post("p2", "second")]);
        store.ensure_loaded(&FeedRequest::AllPosts).await.unwrap();
        assert_eq!(store.snapshot(&FeedRequest::AllPosts).unwrap()[0].id, "p2");
    }

    #[tokio::test]
    async fn test_placeholder_is_unshifted_and_confirm_keeps_position() {
        let fetcher = StubFetcher::default();
        let store = FeedStore::new(fetcher);

        store.seed(&FeedRequest::AllPosts, vec![post("p1", "existing")]);
        let placeholder =
            store.insert_placeholder(&FeedRequest::AllPosts, "hello", author("u1", "Alice"));
        assert!(placeholder.placeholder);
        assert!(placeholder.id.starts_with("local-"));

        let posts = store.snapshot(&FeedRequest::AllPosts).unwrap();
        assert_eq!(posts.len(), 2);
        assert!(posts[0].placeholder);
        assert_eq!(posts[0].content, "hello");

        store.confirm_placeholder(&FeedRequest::AllPosts, &placeholder.id, post("p2", "hello"));

        let posts = store.snapshot(&FeedRequest::AllPosts).unwrap();
        assert_eq!(posts.len(), 2);
        assert!(posts.iter().all(|p| !p.placeholder));
        assert_eq!(posts[0].id, "p2");
        assert_eq!(posts[1].id, "p1");
        assert_eq!(posts.iter().filter(|p| p.id == "p2").count(), 1);
    }

    #[tokio::test]
    async fn test_rollback_restores_pre_submission_value() {
        let fetcher = StubFetcher::default();
        let store = FeedStore::new(fetcher);

        store.seed(
            &FeedRequest::AllPosts,
            vec![post("p2", "second"), post("p1", "first")],
        );
        let before = store.snapshot(&FeedRequest::AllPosts).unwrap();

        let placeholder =
            store.insert_placeholder(&FeedRequest::AllPosts, "doomed", author("u1", "Alice"));
        store.remove_placeholder(&FeedRequest::AllPosts, &placeholder.id);

        assert_eq!(store.snapshot(&FeedRequest::AllPosts).unwrap(), before);
    }

    #[tokio::test]
    async fn test_overlapping_placeholders_confirm_independently() {
        let fetcher = StubFetcher::default();
        let store = FeedStore::new(fetcher);

        store.seed(&FeedRequest::AllPosts, vec![post("p1", "existing")]);
        let first =
            store.insert_placeholder(&FeedRequest::AllPosts, "first draft", author("u1", "Alice"));
        let second =
            store.insert_placeholder(&FeedRequest::AllPosts, "second draft", author("u1", "Alice"));
        assert_ne!(first.id, second.id);

        // Confirm the older submission first; the newer placeholder stays put.
        store.confirm_placeholder(&FeedRequest::AllPosts, &first.id, post("s1", "first draft"));
        let posts = store.snapshot(&FeedRequest::AllPosts).unwrap();
        assert_eq!(posts[0].id, second.id);
        assert_eq!(posts[1].id, "s1");
        assert_eq!(posts[2].id, "p1");

        store.confirm_placeholder(&FeedRequest::AllPosts, &second.id, post("s2", "second draft"));
        let posts = store.snapshot(&FeedRequest::AllPosts).unwrap();
        assert_eq!(posts[0].id, "s2");
        assert_eq!(posts[1].id, "s1");
        assert!(posts.iter().all(|p| !p.placeholder));
    }

    #[tokio::test]
    async fn test_confirm_deduplicates_when_refetch_won_the_race() {
        let fetcher = StubFetcher::default();
        let store = FeedStore::new(fetcher.clone());

        store.seed(&FeedRequest::AllPosts, vec![post("p1", "existing")]);
        let placeholder =
            store.insert_placeholder(&FeedRequest::AllPosts, "hello", author("u1", "Alice"));

        // A revalidation lands while the create is in flight and already
        // includes the server-side row.
        fetcher.set_posts(vec![post("s1", "hello"), post("p1", "existing")]);
        store.invalidate(&FeedRequest::AllPosts);
        store.ensure_loaded(&FeedRequest::AllPosts).await.unwrap();

        let posts = store.snapshot(&FeedRequest::AllPosts).unwrap();
        assert!(posts[0].placeholder, "live placeholder survives the refetch");
        assert_eq!(posts[1].id, "s1");

        store.confirm_placeholder(&FeedRequest::AllPosts, &placeholder.id, post("s1", "hello"));
        let posts = store.snapshot(&FeedRequest::AllPosts).unwrap();
        assert_eq!(posts.iter().filter(|p| p.id == "s1").count(), 1);
        assert!(posts.iter().all(|p| !p.placeholder));
    }

    #[tokio::test]
    async fn test_feeds_are_cached_per_request() {
        let fetcher = StubFetcher::serving(vec![post("p1", "first")]);
        let store = FeedStore::new(fetcher.clone());
        let alice = FeedRequest::UserPosts {
            user_id: "u1".to_string(),
        };

        store.ensure_loaded(&FeedRequest::AllPosts).await.unwrap();
        store.ensure_loaded(&alice).await.unwrap();

        assert_eq!(fetcher.calls(), 2);
        store.invalidate(&alice);

        // Only the invalidated entry refetches.
        store.ensure_loaded(&FeedRequest::AllPosts).await.unwrap();
        store.ensure_loaded(&alice).await.unwrap();
        assert_eq!(fetcher.calls(), 3);
    }
}
