use crate::core::{filters::is_eligible, similarity::similarity};
use crate::models::{Candidate, Member, RecommendationsResponse};

/// Builds the recommendation batch served to the swipe card
///
/// # Pipeline Stages
/// 1. Eligibility (not self, complementary generation)
/// 2. Interest similarity scoring
/// 3. Minimum score cut-off
///
/// Candidates keep directory order; the card shows them one at a time.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
    min_score: u8,
}

impl Recommender {
    pub fn new(min_score: u8) -> Self {
        Self { min_score }
    }

    /// Recommend members of `directory` to `viewer`
    pub fn recommend(&self, viewer: &Member, directory: &[Member]) -> RecommendationsResponse {
        let users: Vec<Candidate> = directory
            .iter()
            // Stage 1: eligibility
            .filter(|member| is_eligible(viewer, member))
            // Stage 2 & 3: score and cut off
            .filter_map(|member| {
                let score = similarity(&viewer.interests, &member.interests);
                (score >= self.min_score).then(|| Candidate::from_member(member, score))
            })
            .collect();

        tracing::debug!(
            "Recommending {} of {} members to {}",
            users.len(),
            directory.len(),
            viewer.id
        );

        RecommendationsResponse {
            users,
            current_user_interests: viewer.interests.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemberDirectory;

    #[test]
    fn test_senior_viewer_gets_youth_in_directory_order() {
        let directory = MemberDirectory::seeded();
        let viewer = directory.get("u1").unwrap();

        let result = Recommender::default().recommend(viewer, directory.members());
        let ids: Vec<&str> = result.users.iter().map(|c| c.id.as_str()).collect();

        assert_eq!(ids, vec!["u2", "u3", "u4"]);
        assert_eq!(result.current_user_interests, viewer.interests);
    }

    #[test]
    fn test_scores_are_interest_similarity() {
        let directory = MemberDirectory::seeded();
        let viewer = directory.get("u1").unwrap();

        let result = Recommender::default().recommend(viewer, directory.members());
        let scores: Vec<f64> = result.users.iter().map(|c| c.score).collect();

        // Alex and Sarah share Cooking + History, Ryan shares nothing
        assert_eq!(scores, vec![50.0, 0.0, 50.0]);
    }

    #[test]
    fn test_min_score_drops_weak_candidates() {
        let directory = MemberDirectory::seeded();
        let viewer = directory.get("u1").unwrap();

        let result = Recommender::new(10).recommend(viewer, directory.members());

        assert!(result.users.iter().all(|c| c.score >= 10.0));
        assert!(!result.users.iter().any(|c| c.id == "u3"));
    }
}
