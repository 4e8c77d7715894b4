// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{CandidateProfile, EducationLevel, InternshipPosting, MatchingRules, ScoredMatch, ScoringWeights};
pub use requests::{RecommendRequest, SkillGapRequest};
pub use responses::{ErrorResponse, HealthResponse, RecommendResponse, SavedResponse, SavedStatusResponse, ServiceInfo, SessionResponse, SkillGapResponse};
