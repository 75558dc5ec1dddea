//! Where a search modal gets its rows from.

use std::future::Future;
use std::marker::PhantomData;
use std::sync::Arc;

use sst_client::{ApiError, SearchEndpoint, SstClient};
use sst_core::{Envelope, SearchItem, SearchRequest, Searchable};

/// A searchable collection plus the mapping applied to a selected row.
pub trait SearchSource: Send + Sync + 'static {
    /// Row type returned by the backend.
    type Item: Searchable + Clone + Send + Sync + 'static;
    /// What the caller receives when a row is picked.
    type Selected;

    /// Title shown above the results.
    fn title(&self) -> &str;

    /// Fetch one page of rows.
    fn fetch(
        &self,
        request: SearchRequest,
    ) -> impl Future<Output = Result<Envelope<Self::Item>, ApiError>> + Send;

    /// Map a picked row to the value handed to the selection callback.
    fn select(&self, item: &Self::Item) -> Self::Selected;
}

/// A [`SearchSource`] backed by a lookup endpoint of the SST backend.
///
/// Selecting a row yields its [`SearchItem`].
pub struct ClientSource<T> {
    client: Arc<SstClient>,
    _item: PhantomData<fn() -> T>,
}

impl<T> ClientSource<T> {
    #[must_use]
    pub const fn new(client: Arc<SstClient>) -> Self {
        Self {
            client,
            _item: PhantomData,
        }
    }
}

impl<T> SearchSource for ClientSource<T>
where
    T: SearchEndpoint + Clone,
{
    type Item = T;
    type Selected = SearchItem;

    fn title(&self) -> &str {
        T::LABEL
    }

    fn fetch(
        &self,
        request: SearchRequest,
    ) -> impl Future<Output = Result<Envelope<T>, ApiError>> + Send {
        let client = Arc::clone(&self.client);
        async move { client.search::<T>(&request).await }
    }

    fn select(&self, item: &T) -> SearchItem {
        item.to_search_item()
    }
}
