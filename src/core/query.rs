//! Keyed query cache for the UI.
//!
//! A query reads the revision of its key, so bumping that revision with
//! [`QueryCache::invalidate`] re-runs every query registered under the key.
//! Mutations invalidate their key when they succeed.

use std::collections::HashMap;
use std::future::Future;

use dioxus::prelude::*;

use crate::error::Result;

pub type QueryKey = &'static str;

#[derive(Clone, Copy)]
pub struct QueryCache {
    revisions: Signal<HashMap<QueryKey, u64>>,
}

impl QueryCache {
    pub fn revision(&self, key: QueryKey) -> u64 {
        self.revisions.read().get(key).copied().unwrap_or(0)
    }

    pub fn invalidate(&mut self, key: QueryKey) {
        *self.revisions.write().entry(key).or_insert(0) += 1;
        tracing::debug!(key, "query invalidated");
    }
}

/// Installs the cache; call once from the root component.
pub fn use_query_cache_provider() -> QueryCache {
    use_context_provider(|| QueryCache {
        revisions: Signal::new(HashMap::new()),
    })
}

pub fn use_query_cache() -> QueryCache {
    use_context::<QueryCache>()
}

pub fn use_query<T, F, Fut>(key: QueryKey, fetch: F) -> Resource<Result<T>>
where
    T: 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = Result<T>> + 'static,
{
    let cache = use_query_cache();
    use_resource(move || {
        let _revision = cache.revision(key);
        fetch()
    })
}

/// Handle returned by [`use_mutation`].
pub struct Mutation<I: 'static> {
    pending: Signal<bool>,
    error: Signal<Option<String>>,
    callback: Callback<I>,
}

impl<I: 'static> Clone for Mutation<I> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<I: 'static> Copy for Mutation<I> {}

impl<I: 'static> Mutation<I> {
    pub fn mutate(&self, input: I) {
        self.callback.call(input);
    }

    pub fn is_pending(&self) -> bool {
        *self.pending.read()
    }

    pub fn error(&self) -> Option<String> {
        self.error.read().clone()
    }
}

/// Runs `run` in a spawned task per call. Success invalidates `key`; failure is
/// logged and kept in [`Mutation::error`]. `action` reads like "creating todo".
pub fn use_mutation<I, F, Fut>(key: QueryKey, action: &'static str, run: F) -> Mutation<I>
where
    I: 'static,
    F: Fn(I) -> Fut + 'static,
    Fut: Future<Output = Result<()>> + 'static,
{
    let cache = use_query_cache();
    let pending = use_signal(|| false);
    let error = use_signal(|| None::<String>);

    let callback = use_callback(move |input: I| {
        let fut = run(input);
        let mut cache = cache;
        let mut pending = pending;
        let mut error = error;
        pending.set(true);
        spawn(async move {
            match fut.await {
                Ok(()) => {
                    error.set(None);
                    cache.invalidate(key);
                }
                Err(err) => {
                    tracing::error!("Error {action}: {err}");
                    error.set(Some(err.to_string()));
                }
            }
            pending.set(false);
        });
    });

    Mutation {
        pending,
        error,
        callback,
    }
}
