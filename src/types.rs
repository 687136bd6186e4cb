//! Core data types for the opportunity board
//!
//! This module defines the listing records the board displays: internship
//! postings and research-project postings. Both are concrete shapes of the
//! same generalized record — an identifier, a display title, the offering
//! entity, a filter category, and a handful of free-text descriptive
//! fields — captured by the [`Listing`] trait.

use serde::{Deserialize, Serialize};

/// Unique identifier for listings
///
/// The wire format uses plain integers today, but identifiers are treated
/// as opaque: a string id decodes just as well. Ids are immutable once
/// created and unique within a single store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ListingId {
    /// Numeric identifier (the observed wire format)
    Number(i64),

    /// Opaque string identifier
    Text(String),
}

impl std::fmt::Display for ListingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListingId::Number(n) => write!(f, "{}", n),
            ListingId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for ListingId {
    fn from(n: i64) -> Self {
        ListingId::Number(n)
    }
}

impl From<&str> for ListingId {
    fn from(s: &str) -> Self {
        ListingId::Text(s.to_string())
    }
}

/// Generalized view of a single opportunity entry
///
/// The filter predicate and the stores operate on this view rather than on
/// the concrete record shapes. `title` and `provider` are the two fields
/// the text search inspects; `category` is matched against the closed
/// category set the filter UI offers.
pub trait Listing {
    /// Unique identifier within a store
    fn id(&self) -> &ListingId;

    /// Display name of the opportunity (role or project name)
    fn title(&self) -> &str;

    /// Name of the offering entity (company or professor)
    fn provider(&self) -> &str;

    /// Category string used for exact-match filtering
    fn category(&self) -> &str;
}

/// An internship posting offered through a partner company
///
/// These records are compiled into the binary (see [`crate::seed`]) and
/// never change after startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Internship {
    /// Unique listing identifier
    pub id: ListingId,

    /// Role title, e.g. "Frontend Developer Intern"
    pub role: String,

    /// Offering company name
    pub company: String,

    /// Free-text location, e.g. "Remote" or "Hybrid"
    pub location: String,

    /// Free-text stipend description
    pub stipend: String,

    /// Engagement type; the filter category ("Full-time", "Part-time")
    #[serde(rename = "type")]
    pub kind: String,

    /// Ordered, possibly-empty list of requirement strings
    #[serde(default)]
    pub requirements: Vec<String>,

    /// Free-text posting age, e.g. "2 days ago"
    pub posted: String,
}

impl Listing for Internship {
    fn id(&self) -> &ListingId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.role
    }

    fn provider(&self) -> &str {
        &self.company
    }

    fn category(&self) -> &str {
        &self.kind
    }
}

/// A research-project posting offered by a professor
///
/// These records are fetched once from the remote endpoint as a JSON array
/// with exactly these field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchProject {
    /// Unique listing identifier
    pub id: ListingId,

    /// Project title
    pub title: String,

    /// Supervising professor's name
    pub professor_name: String,

    /// Professor's department; the filter category
    pub professor_department: String,

    /// URL of the professor's photo
    pub professor_image: String,

    /// Free-text project description
    pub description: String,

    /// Ordered, possibly-empty list of requirement strings
    #[serde(default)]
    pub requirements: Vec<String>,

    /// Research area, e.g. "Healthcare AI"
    pub area: String,

    /// Free-text duration, e.g. "6 months"
    pub duration: String,

    /// Number of open positions
    pub positions: u32,
}

impl Listing for ResearchProject {
    fn id(&self) -> &ListingId {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn provider(&self) -> &str {
        &self.professor_name
    }

    fn category(&self) -> &str {
        &self.professor_department
    }
}
