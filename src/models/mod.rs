// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Candidate, FlashLevel, FlashMessage, Gender, MatchRecord, MatchSummary, Member, Role};
pub use requests::TargetPath;
pub use responses::{ErrorResponse, FlashResponse, HealthResponse, MatchesResponse, RecommendationsResponse};
