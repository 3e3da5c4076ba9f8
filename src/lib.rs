//! GeneraLink Match - intergenerational matching service and swipe client
//!
//! The server recommends members of the other generation ranked by shared
//! interests and records matches. The swipe module drives the card that
//! shows those recommendations one at a time.

pub mod config;
pub mod core;
pub mod logging;
pub mod models;
pub mod routes;
pub mod services;
pub mod swipe;

// Re-export commonly used types
pub use self::core::{avatar_for, compute_view, similarity, CardView, Recommender, View};
pub use models::{Candidate, Gender, Member, RecommendationsResponse, Role};
pub use swipe::{Browser, CardSurface, SwipeSession};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let session = SwipeSession::new();
        assert!(matches!(session.view(), View::Exhausted { .. }));
        assert_eq!(avatar_for(&Role::Senior, &Gender::Male), "👨‍🦳");
    }
}
