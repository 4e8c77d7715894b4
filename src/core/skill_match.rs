/// Decides whether a candidate's skill label covers a posting's required skill
///
/// Implementations must be pure: the same pair of labels always yields the
/// same answer.
pub trait SkillMatchStrategy: Send + Sync {
    fn matches(&self, candidate_skill: &str, required_skill: &str) -> bool;

    /// True if any of the candidate's skills covers `required_skill`
    fn any_matches(&self, candidate_skills: &[String], required_skill: &str) -> bool {
        candidate_skills
            .iter()
            .any(|skill| self.matches(skill, required_skill))
    }
}

/// Case-insensitive substring containment in either direction
///
/// Tolerates free-text variation ("React" vs "React.js") at the cost of
/// false positives on short labels ("R" matches "React"). An empty label is
/// contained in every other label, so it matches everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstringSkillMatch;

impl SkillMatchStrategy for SubstringSkillMatch {
    #[inline]
    fn matches(&self, candidate_skill: &str, required_skill: &str) -> bool {
        let candidate = candidate_skill.to_lowercase();
        let required = required_skill.to_lowercase();

        candidate.contains(&required) || required.contains(&candidate)
    }
}
