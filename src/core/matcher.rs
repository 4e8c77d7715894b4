use std::collections::HashSet;

use crate::core::{
    filters::passes_threshold,
    scoring::calculate_match_score,
    skill_match::{SkillMatchStrategy, SubstringSkillMatch},
};
use crate::models::{CandidateProfile, InternshipPosting, MatchingRules, ScoredMatch, ScoringWeights};

/// Result of the matching process
#[derive(Debug)]
pub struct MatchResult {
    pub matches: Vec<ScoredMatch>,
    /// Postings scored
    pub total_candidates: usize,
    /// Postings above the threshold, before truncation
    pub qualified: usize,
}

/// Main matching orchestrator
///
/// # Pipeline Stages
/// 1. Score every posting (skills, sector, location, baseline)
/// 2. Drop postings at or below the inclusion threshold
/// 3. Stable sort by score, highest first
/// 4. Truncate to the configured number of results
#[derive(Debug, Clone)]
pub struct Matcher<S = SubstringSkillMatch> {
    weights: ScoringWeights,
    rules: MatchingRules,
    strategy: S,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, rules: MatchingRules) -> Self {
        Self {
            weights,
            rules,
            strategy: SubstringSkillMatch,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(ScoringWeights::default(), MatchingRules::default())
    }
}

impl<S: SkillMatchStrategy> Matcher<S> {
    /// Build a matcher with a different skill comparison rule
    pub fn with_strategy(weights: ScoringWeights, rules: MatchingRules, strategy: S) -> Self {
        Self {
            weights,
            rules,
            strategy,
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn rules(&self) -> &MatchingRules {
        &self.rules
    }

    /// Score, filter, rank and truncate the catalog for one candidate
    ///
    /// Equal scores keep their catalog order.
    pub fn find_matches(&self, profile: &CandidateProfile, catalog: &[InternshipPosting]) -> MatchResult {
        let mut scored: Vec<ScoredMatch> = catalog
            .iter()
            .filter_map(|posting| {
                let (score, matched_skills) = calculate_match_score(
                    posting,
                    profile,
                    &self.weights,
                    &self.rules,
                    &self.strategy,
                );

                if passes_threshold(score, &self.rules) {
                    Some(ScoredMatch {
                        posting: posting.clone(),
                        match_score: score,
                        matched_skills,
                        matched_sector: posting.sector.clone(),
                    })
                } else {
                    None
                }
            })
            .collect();

        let qualified = scored.len();

        // sort_by is stable, so ties stay in catalog order
        scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));
        scored.truncate(self.rules.max_results);

        tracing::debug!(
            "Scored {} postings, {} above threshold, returning {}",
            catalog.len(),
            qualified,
            scored.len()
        );

        MatchResult {
            matches: scored,
            total_candidates: catalog.len(),
            qualified,
        }
    }

    /// Ranked recommendations only
    pub fn score_and_rank(&self, profile: &CandidateProfile, catalog: &[InternshipPosting]) -> Vec<ScoredMatch> {
        self.find_matches(profile, catalog).matches
    }

    /// Catalog skills the candidate does not have, in first-seen order
    pub fn skill_gaps(&self, profile: &CandidateProfile, catalog: &[InternshipPosting], limit: usize) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut gaps = Vec::new();

        for skill in catalog.iter().flat_map(|posting| posting.skills.iter()) {
            if gaps.len() >= limit {
                break;
            }
            if !seen.insert(skill.as_str()) {
                continue;
            }
            if !self.strategy.any_matches(&profile.skills, skill) {
                gaps.push(skill.clone());
            }
        }

        gaps
    }

    /// Skill gaps using the configured default limit
    pub fn default_skill_gaps(&self, profile: &CandidateProfile, catalog: &[InternshipPosting]) -> Vec<String> {
        self.skill_gaps(profile, catalog, self.rules.skill_gap_limit)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}
