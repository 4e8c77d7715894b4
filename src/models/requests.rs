use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::domain::CandidateProfile;

/// Request for ranked recommendations
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecommendRequest {
    #[validate(nested)]
    pub profile: CandidateProfile,
}

/// Request for the skills a candidate is missing
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SkillGapRequest {
    #[validate(nested)]
    pub profile: CandidateProfile,
    #[validate(range(min = 1, max = 50))]
    #[serde(default)]
    pub limit: Option<usize>,
}
