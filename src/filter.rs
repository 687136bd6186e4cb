//! Filter predicate over listing collections
//!
//! Computes the visible subset of a listing store from the user-entered
//! search text and the selected category. The predicate is a pure, total
//! function: callers re-invoke it whenever an input changes and render
//! the returned subsequence. There is no incremental update, no
//! debouncing, and no relevance ranking — the output preserves the
//! original record order.

use serde::{Deserialize, Serialize};

use crate::types::Listing;

/// Sentinel category value that matches every record
const ALL_CATEGORIES: &str = "All";

/// Category selection for the filter
///
/// The filter UI offers a closed set of categories plus an "All"
/// wildcard. Matching against a concrete category is exact and
/// case-sensitive; a selection not present in the data simply yields an
/// empty visible subset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// Wildcard: admits every record
    All,

    /// Admits records whose category equals this value exactly
    Only(String),
}

impl CategoryFilter {
    /// Parse a selection string, treating the literal `"All"` as the wildcard
    pub fn parse(selection: &str) -> Self {
        if selection == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(selection.to_string())
        }
    }

    /// Whether this selection admits a record with the given category
    pub fn admits(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

impl Default for CategoryFilter {
    fn default() -> Self {
        CategoryFilter::All
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "{}", ALL_CATEGORIES),
            CategoryFilter::Only(selected) => write!(f, "{}", selected),
        }
    }
}

/// Filter inputs: search text plus category selection
///
/// A record is visible iff both conditions hold — this is a conjunction,
/// never a disjunction. The default query (empty search, `All`) admits
/// the entire collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListingQuery {
    /// User-entered search text; matched case-insensitively as a
    /// substring of the title or the provider name, nothing else
    pub search: String,

    /// Selected category
    pub category: CategoryFilter,
}

impl ListingQuery {
    /// Build a query from raw UI state
    pub fn new(search: impl Into<String>, selection: &str) -> Self {
        Self {
            search: search.into(),
            category: CategoryFilter::parse(selection),
        }
    }

    /// Whether a single record is visible under this query
    pub fn matches(&self, record: &impl Listing) -> bool {
        let needle = self.search.to_lowercase();
        let text_match = record.title().to_lowercase().contains(&needle)
            || record.provider().to_lowercase().contains(&needle);

        self.category.admits(record.category()) && text_match
    }
}

/// Compute the visible subset of a collection under a query
///
/// Returns references into `records` in their original relative order.
/// An empty collection yields an empty result; so does a category
/// selection absent from the data. Calling this twice with identical
/// inputs yields identical output.
pub fn filter<'a, T: Listing>(records: &'a [T], query: &ListingQuery) -> Vec<&'a T> {
    records.iter().filter(|record| query.matches(*record)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Internship, ListingId};

    fn internship(id: i64, role: &str, company: &str, kind: &str) -> Internship {
        Internship {
            id: ListingId::Number(id),
            role: role.to_string(),
            company: company.to_string(),
            location: "Remote".to_string(),
            stipend: "₹20,000/month".to_string(),
            kind: kind.to_string(),
            requirements: vec![],
            posted: "2 days ago".to_string(),
        }
    }

    fn sample() -> Vec<Internship> {
        vec![
            internship(1, "Frontend Developer Intern", "TechVision AI", "Full-time"),
            internship(2, "ML Intern", "DataSense", "Part-time"),
        ]
    }

    #[test]
    fn test_search_matches_title_across_all_categories() {
        let records = sample();
        let visible = filter(&records, &ListingQuery::new("intern", "All"));
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].role, "Frontend Developer Intern");
        assert_eq!(visible[1].role, "ML Intern");
    }

    #[test]
    fn test_search_narrows_to_single_record() {
        let records = sample();
        let visible = filter(&records, &ListingQuery::new("frontend", "All"));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].role, "Frontend Developer Intern");
    }

    #[test]
    fn test_empty_search_with_category_selection() {
        let records = sample();
        let visible = filter(&records, &ListingQuery::new("", "Part-time"));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].role, "ML Intern");
    }

    #[test]
    fn test_search_matches_provider_name() {
        let records = sample();
        let visible = filter(&records, &ListingQuery::new("datasense", "All"));
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].company, "DataSense");
    }

    #[test]
    fn test_category_and_search_are_a_conjunction() {
        let records = sample();
        // "frontend" matches record 1, but record 1 is Full-time.
        let visible = filter(&records, &ListingQuery::new("frontend", "Part-time"));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_category_match_is_case_sensitive() {
        let records = sample();
        let visible = filter(&records, &ListingQuery::new("", "part-time"));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_default_query_returns_collection_unchanged() {
        let records = sample();
        let visible = filter(&records, &ListingQuery::default());
        assert_eq!(visible.len(), records.len());
        for (kept, original) in visible.iter().zip(records.iter()) {
            assert_eq!(*kept, original);
        }
    }

    #[test]
    fn test_unknown_category_yields_empty_subset() {
        let records = sample();
        let visible = filter(&records, &ListingQuery::new("", "Sabbatical"));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_empty_collection_yields_empty_subset() {
        let records: Vec<Internship> = vec![];
        let visible = filter(&records, &ListingQuery::new("intern", "All"));
        assert!(visible.is_empty());
    }

    #[test]
    fn test_filter_is_idempotent_by_value_and_order() {
        let records = sample();
        let query = ListingQuery::new("intern", "All");
        let first: Vec<_> = filter(&records, &query);
        let second: Vec<_> = filter(&records, &query);
        assert_eq!(first, second);
    }

    #[test]
    fn test_all_sentinel_parses_to_wildcard() {
        assert_eq!(CategoryFilter::parse("All"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Full-time"),
            CategoryFilter::Only("Full-time".to_string())
        );
        // The sentinel itself is case-sensitive.
        assert_eq!(
            CategoryFilter::parse("all"),
            CategoryFilter::Only("all".to_string())
        );
    }

    #[test]
    fn test_category_filter_display_round_trip() {
        assert_eq!(CategoryFilter::All.to_string(), "All");
        assert_eq!(CategoryFilter::parse("Physics").to_string(), "Physics");
    }
}
