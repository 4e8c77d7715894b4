use serde::{Deserialize, Serialize};
use validator::Validate;

/// Highest education level a candidate has completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EducationLevel {
    #[serde(rename = "10th Pass")]
    TenthPass,
    #[serde(rename = "12th Pass")]
    TwelfthPass,
    #[serde(rename = "Diploma")]
    Diploma,
    #[serde(rename = "Graduate")]
    Graduate,
    #[serde(rename = "Post Graduate")]
    PostGraduate,
    #[serde(rename = "PhD")]
    PhD,
}

/// Candidate profile submitted through the onboarding form
///
/// Lives only for the duration of one matching request. The age range is the
/// scheme's eligibility rule and is checked at the request boundary; the
/// engine itself never looks at it.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CandidateProfile {
    #[validate(range(min = 21, max = 24))]
    pub age: u8,
    #[serde(rename = "educationLevel", alias = "education")]
    pub education_level: EducationLevel,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub sectors: Vec<String>,
    #[serde(rename = "locationPreference", alias = "location", default)]
    pub location_preference: String,
}

/// One internship opportunity in the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternshipPosting {
    pub id: String,
    pub title: String,
    pub company: String,
    pub sector: String,
    pub skills: Vec<String>,
    pub location: String,
    pub duration: String,
    pub stipend: String,
    pub description: String,
    pub requirements: Vec<String>,
}

/// Scored match result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMatch {
    #[serde(flatten)]
    pub posting: InternshipPosting,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    #[serde(rename = "matchedSkills")]
    pub matched_skills: Vec<String>,
    #[serde(rename = "matchedSector")]
    pub matched_sector: String,
}

/// Scoring weights, in points out of 100
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skills: f64,
    pub sector: f64,
    pub location: f64,
    pub base: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 40.0,
            sector: 30.0,
            location: 20.0,
            base: 10.0,
        }
    }
}

/// Inclusion, clamp and truncation rules applied after scoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingRules {
    /// Scores at or below this are dropped
    pub min_score: u8,
    /// Scores are clamped to this ceiling
    pub max_score: u8,
    pub max_results: usize,
    pub skill_gap_limit: usize,
}

impl Default for MatchingRules {
    fn default() -> Self {
        Self {
            min_score: 30,
            max_score: 95,
            max_results: 5,
            skill_gap_limit: 6,
        }
    }
}
