//! Listing stores
//!
//! A store holds the authoritative collection of listing records for one
//! section of the page. The collection is populated exactly once — either
//! compiled into the binary ([`ListingStore`]) or fetched once from a
//! remote endpoint ([`RemoteStore`]) — and is never mutated afterward.
//! Only the visible subset, computed by [`crate::filter`], changes in
//! response to user input.

use std::collections::HashSet;

use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::error::LOAD_FAILED_MESSAGE;
use crate::source::ListingSource;
use crate::types::Listing;

/// Ids must be unique within a store; violations are diagnosed but the
/// records are kept as-is.
fn warn_on_duplicate_ids<T: Listing>(records: &[T]) {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id()) {
            warn!(id = %record.id(), "duplicate listing id in store");
        }
    }
}

/// Store backed by a collection compiled into the binary
///
/// Used for the internships section, whose records ship with the site.
#[derive(Debug, Clone)]
pub struct ListingStore<T> {
    records: Vec<T>,
}

impl<T: Listing> ListingStore<T> {
    /// Build a store from an embedded collection
    pub fn from_records(records: Vec<T>) -> Self {
        warn_on_duplicate_ids(&records);
        Self { records }
    }

    /// Read-only snapshot of the full collection
    pub fn all(&self) -> &[T] {
        &self.records
    }

    /// Number of records in the store
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Memoized outcome of the one-shot load
enum LoadOutcome<T> {
    Loaded(Vec<T>),
    Failed,
}

/// Store backed by a one-shot remote load
///
/// The first call to [`all`](RemoteStore::all) or
/// [`error`](RemoteStore::error) drives the fetch; every later call
/// reuses the memoized outcome for the store's lifetime, success or
/// failure alike. No retry is attempted. On failure the collection stays
/// empty and [`error`](RemoteStore::error) exposes a static user-facing
/// message; the underlying cause is emitted once as a diagnostic trace
/// and never propagates past this boundary.
///
/// The fetch is the single writer; reads are purely derived, so no
/// locking beyond the `OnceCell` is needed, and the memoized outcome is
/// owned by the store — a caller that stops awaiting cannot leave a
/// stale write behind.
pub struct RemoteStore<T, S> {
    source: S,
    outcome: OnceCell<LoadOutcome<T>>,
}

impl<T, S> RemoteStore<T, S>
where
    T: Listing + Send + Sync + 'static,
    S: ListingSource<T>,
{
    /// Create a store that will load from the given source on first use
    pub fn new(source: S) -> Self {
        Self {
            source,
            outcome: OnceCell::new(),
        }
    }

    /// Read-only snapshot of the collection, loading it on first use
    ///
    /// Empty both before a load has been driven to completion and after
    /// a failed load.
    pub async fn all(&self) -> &[T] {
        match self.load().await {
            LoadOutcome::Loaded(records) => records,
            LoadOutcome::Failed => &[],
        }
    }

    /// User-facing load error, if the one-shot load failed
    pub async fn error(&self) -> Option<&'static str> {
        match self.load().await {
            LoadOutcome::Loaded(_) => None,
            LoadOutcome::Failed => Some(LOAD_FAILED_MESSAGE),
        }
    }

    async fn load(&self) -> &LoadOutcome<T> {
        self.outcome
            .get_or_init(|| async {
                match self.source.fetch().await {
                    Ok(records) => {
                        debug!(count = records.len(), "listing load complete");
                        warn_on_duplicate_ids(&records);
                        LoadOutcome::Loaded(records)
                    }
                    Err(err) => {
                        warn!(error = %err, "listing load failed");
                        LoadOutcome::Failed
                    }
                }
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BoardError;
    use crate::filter::{filter, ListingQuery};
    use crate::source::MockListingSource;
    use crate::types::{Internship, ListingId};

    fn internship(id: i64, role: &str) -> Internship {
        Internship {
            id: ListingId::Number(id),
            role: role.to_string(),
            company: "TechVision AI".to_string(),
            location: "Remote".to_string(),
            stipend: "₹20,000/month".to_string(),
            kind: "Full-time".to_string(),
            requirements: vec![],
            posted: "2 days ago".to_string(),
        }
    }

    #[test]
    fn test_embedded_store_snapshot() {
        let store = ListingStore::from_records(vec![
            internship(1, "Frontend Developer Intern"),
            internship(2, "ML Intern"),
        ]);
        assert_eq!(store.len(), 2);
        assert!(!store.is_empty());
        assert_eq!(store.all()[0].role, "Frontend Developer Intern");
    }

    #[tokio::test]
    async fn test_remote_store_fetches_exactly_once() {
        let mut source = MockListingSource::<Internship>::new();
        source
            .expect_fetch()
            .times(1)
            .returning(|| Ok(vec![internship(1, "Frontend Developer Intern")]));

        let store = RemoteStore::new(source);
        assert_eq!(store.all().await.len(), 1);
        // Re-reading must reuse the memoized collection, not re-fetch.
        assert_eq!(store.all().await.len(), 1);
        assert!(store.error().await.is_none());
    }

    #[tokio::test]
    async fn test_remote_store_failure_stays_empty_with_message() {
        let mut source = MockListingSource::<Internship>::new();
        source
            .expect_fetch()
            .times(1)
            .returning(|| Err(BoardError::Other("connection refused".to_string())));

        let store = RemoteStore::new(source);
        assert!(store.all().await.is_empty());

        let message = store.error().await;
        assert_eq!(message, Some(LOAD_FAILED_MESSAGE));
        assert!(!message.unwrap().is_empty());

        // Failure is memoized too: no retry on later reads.
        assert!(store.all().await.is_empty());
    }

    #[tokio::test]
    async fn test_filtering_a_failed_remote_store_yields_empty() {
        let mut source = MockListingSource::<Internship>::new();
        source
            .expect_fetch()
            .returning(|| Err(BoardError::Other("boom".to_string())));

        let store = RemoteStore::new(source);
        let records = store.all().await;
        let visible = filter(records, &ListingQuery::new("intern", "All"));
        assert!(visible.is_empty());
    }
}
