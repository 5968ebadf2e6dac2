//! Leptos context glue for the shared [`QueryClient`].

use leptos::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{QueryClient, QueryError, QueryKey};

/// What pages get from context: the shared client plus a reactive
/// invalidation counter that resources can subscribe to.
#[derive(Clone)]
pub struct QueryHandle {
    client: QueryClient,
    generation: RwSignal<u64>,
}

impl QueryHandle {
    pub fn client(&self) -> &QueryClient {
        &self.client
    }

    /// Invalidate `prefix` and wake every query resource.
    pub fn invalidate(&self, prefix: &QueryKey) -> usize {
        let marked = self.client.invalidate_queries(prefix);
        self.generation.set(self.client.generation());
        marked
    }

    /// Read the invalidation counter, subscribing the current reactive scope.
    pub fn track(&self) -> u64 {
        self.generation.get()
    }
}

/// Puts the process-wide client into context for everything below it.
#[component]
pub fn QueryClientProvider(children: Children) -> impl IntoView {
    let client = QueryClient::shared();
    let generation = RwSignal::new(client.generation());
    provide_context(QueryHandle { client, generation });

    children()
}

pub fn use_query_client() -> QueryHandle {
    expect_context::<QueryHandle>()
}

/// Browser-side query: served from the shared cache when fresh, refetched
/// whenever something invalidates the cache.
pub fn use_query<T>(key: QueryKey, url: String) -> LocalResource<Result<T, QueryError>>
where
    T: Serialize + DeserializeOwned + Clone + 'static,
{
    let handle = use_query_client();
    LocalResource::new(move || {
        handle.track();
        let client = handle.client().clone();
        let key = key.clone();
        let url = url.clone();
        async move { client.fetch_json(key, &url).await }
    })
}
