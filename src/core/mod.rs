// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod skill_match;
pub mod stats;

pub use filters::{city_token, matched_skills, matches_location, matches_sector, passes_threshold};
pub use matcher::{Matcher, MatchResult};
pub use scoring::{calculate_match_score, score_components, ScoreBreakdown};
pub use skill_match::{SkillMatchStrategy, SubstringSkillMatch};
pub use stats::{catalog_stats, parse_stipend, CatalogStats};
