use crate::core::skill_match::SkillMatchStrategy;
use crate::models::{CandidateProfile, InternshipPosting, MatchingRules};

/// City part of a "City, Region" location preference
///
/// Everything before the first comma, as written. A preference without a
/// comma is taken whole.
#[inline]
pub fn city_token(location_preference: &str) -> &str {
    location_preference
        .split(',')
        .next()
        .unwrap_or_default()
}

/// Check if a posting's location contains the candidate's city
///
/// An empty city is contained in every location.
#[inline]
pub fn matches_location(posting: &InternshipPosting, profile: &CandidateProfile) -> bool {
    posting.location.contains(city_token(&profile.location_preference))
}

/// Check if the posting's sector is one the candidate asked for (exact label)
#[inline]
pub fn matches_sector(posting: &InternshipPosting, profile: &CandidateProfile) -> bool {
    profile.sectors.iter().any(|sector| sector == &posting.sector)
}

/// Posting skills covered by the candidate, in posting order
#[inline]
pub fn matched_skills<S: SkillMatchStrategy + ?Sized>(
    posting: &InternshipPosting,
    profile: &CandidateProfile,
    strategy: &S,
) -> Vec<String> {
    posting
        .skills
        .iter()
        .filter(|required| strategy.any_matches(&profile.skills, required))
        .cloned()
        .collect()
}

/// Check if a score clears the inclusion threshold (strictly greater)
#[inline]
pub fn passes_threshold(score: u8, rules: &MatchingRules) -> bool {
    score > rules.min_score
}
