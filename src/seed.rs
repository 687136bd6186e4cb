//! Built-in internship listings
//!
//! The internships section ships its collection with the binary; it is
//! never fetched and never mutated.

use crate::types::{Internship, ListingId};

/// The bundled internship collection
pub fn internships() -> Vec<Internship> {
    vec![
        Internship {
            id: ListingId::Number(1),
            role: "Frontend Developer Intern".to_string(),
            company: "TechVision AI".to_string(),
            location: "Remote".to_string(),
            stipend: "₹20,000/month".to_string(),
            kind: "Full-time".to_string(),
            requirements: vec![
                "Proficiency in React.js".to_string(),
                "Understanding of modern CSS".to_string(),
                "Basic knowledge of UI/UX principles".to_string(),
            ],
            posted: "2 days ago".to_string(),
        },
        Internship {
            id: ListingId::Number(2),
            role: "Machine Learning Intern".to_string(),
            company: "DataSense Analytics".to_string(),
            location: "Hybrid".to_string(),
            stipend: "₹25,000/month".to_string(),
            kind: "Part-time".to_string(),
            requirements: vec![
                "Strong Python skills".to_string(),
                "Knowledge of ML frameworks".to_string(),
                "Statistics background".to_string(),
            ],
            posted: "1 week ago".to_string(),
        },
        Internship {
            id: ListingId::Number(3),
            role: "Product Management Intern".to_string(),
            company: "InnovateTech".to_string(),
            location: "On-site".to_string(),
            stipend: "₹30,000/month".to_string(),
            kind: "Full-time".to_string(),
            requirements: vec![
                "Strong analytical skills".to_string(),
                "Excellent communication".to_string(),
                "Basic technical knowledge".to_string(),
            ],
            posted: "3 days ago".to_string(),
        },
    ]
}
