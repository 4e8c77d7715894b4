use crate::core::filters::{matched_skills, matches_location, matches_sector};
use crate::core::skill_match::SkillMatchStrategy;
use crate::models::{CandidateProfile, InternshipPosting, MatchingRules, ScoringWeights};

/// Points contributed by each scoring component, before rounding
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub skills: f64,
    pub sector: f64,
    pub location: f64,
    pub base: f64,
}

impl ScoreBreakdown {
    pub fn raw_total(&self) -> f64 {
        self.skills + self.sector + self.location + self.base
    }

    /// Rounded to the nearest point and clamped to the rules' ceiling
    pub fn score(&self, rules: &MatchingRules) -> u8 {
        let rounded = self.raw_total().round();
        rounded.clamp(0.0, rules.max_score as f64) as u8
    }
}

/// Score each component of a posting against a candidate profile
///
/// Scoring formula:
/// score = (
///     matched_skills / required_skills * 40 +   # 0 when nothing is required
///     sector_in_interests * 30 +
///     posting_location_contains_city * 20 +
///     10                                        # baseline for every posting
/// )
pub fn score_components<S: SkillMatchStrategy + ?Sized>(
    posting: &InternshipPosting,
    profile: &CandidateProfile,
    weights: &ScoringWeights,
    strategy: &S,
) -> (ScoreBreakdown, Vec<String>) {
    let matched = matched_skills(posting, profile, strategy);

    let skills = if posting.skills.is_empty() {
        0.0
    } else {
        (matched.len() as f64 / posting.skills.len() as f64) * weights.skills
    };

    let sector = if matches_sector(posting, profile) { weights.sector } else { 0.0 };
    let location = if matches_location(posting, profile) { weights.location } else { 0.0 };

    let breakdown = ScoreBreakdown {
        skills,
        sector,
        location,
        base: weights.base,
    };

    (breakdown, matched)
}

/// Calculate the final match score for a posting, with the skills that matched
pub fn calculate_match_score<S: SkillMatchStrategy + ?Sized>(
    posting: &InternshipPosting,
    profile: &CandidateProfile,
    weights: &ScoringWeights,
    rules: &MatchingRules,
    strategy: &S,
) -> (u8, Vec<String>) {
    let (breakdown, matched) = score_components(posting, profile, weights, strategy);
    (breakdown.score(rules), matched)
}
