//! Internship Match - rule-based internship recommendation service
//!
//! This library scores a catalog of internship postings against a candidate's
//! skills, sector interests and location, and returns a short ranked list
//! with the reasons each posting matched.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{Matcher, MatchResult, SkillMatchStrategy, SubstringSkillMatch};
pub use crate::models::{CandidateProfile, EducationLevel, InternshipPosting, MatchingRules, ScoredMatch, ScoringWeights};
