//! Opportunity board - filterable listings for an incubation center
//!
//! Implements the filterable-listing pattern behind the internships and
//! research-projects sections of an innovation center site:
//! - Typed listing records for the two concrete shapes on the page
//! - Listing stores populated exactly once, embedded or remote-backed
//! - A pure filter predicate over (search text, selected category)
//!
//! # Architecture
//!
//! The system is organized into a few small layers:
//! - **Types**: listing records and the generalized [`Listing`] view
//! - **Stores**: the authoritative collections, one per page section
//! - **Filter**: the pure visible-subset computation
//! - **Source**: the one-shot remote retrieval seam
//!
//! # Example
//!
//! ```
//! use opportunity_board::{filter, seed, ListingQuery, ListingStore};
//!
//! let store = ListingStore::from_records(seed::internships());
//! let visible = filter(store.all(), &ListingQuery::new("intern", "All"));
//! assert_eq!(visible.len(), 3);
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod seed;
pub mod source;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use config::Settings;
pub use error::{BoardError, Result, LOAD_FAILED_MESSAGE};
pub use filter::{filter, CategoryFilter, ListingQuery};
pub use source::{HttpSource, ListingSource};
pub use store::{ListingStore, RemoteStore};
pub use types::{Internship, Listing, ListingId, ResearchProject};
