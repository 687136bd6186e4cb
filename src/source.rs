//! Remote retrieval of listing collections
//!
//! The remote-backed listing store reads its collection exactly once
//! from a configured endpoint. [`ListingSource`] is the seam the store
//! fetches through; [`HttpSource`] is the production implementation — a
//! single unauthenticated GET returning a JSON array of records. There
//! are no pagination parameters, no request body, and no retry policy.

use std::marker::PhantomData;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::Result;

/// One-shot provider of a full listing collection
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingSource<T: Send + Sync + 'static>: Send + Sync {
    /// Retrieve the complete collection
    ///
    /// The endpoint always returns the full set; no filtering is
    /// delegated server-side.
    async fn fetch(&self) -> Result<Vec<T>>;
}

/// HTTP listing source reading a JSON array from a base URL
pub struct HttpSource<T> {
    client: reqwest::Client,
    url: String,
    _record: PhantomData<fn() -> T>,
}

impl<T> HttpSource<T> {
    /// Create a source reading from the given endpoint URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<T> ListingSource<T> for HttpSource<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    async fn fetch(&self) -> Result<Vec<T>> {
        debug!(url = %self.url, "fetching listings");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?;

        let records: Vec<T> = response.json().await?;
        debug!(count = records.len(), "fetched listings");
        Ok(records)
    }
}
