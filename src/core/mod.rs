// Core algorithm exports
pub mod avatar;
pub mod filters;
pub mod recommender;
pub mod similarity;
pub mod view;

pub use avatar::avatar_for;
pub use filters::{is_complementary, is_eligible};
pub use recommender::Recommender;
pub use similarity::similarity;
pub use view::{card_view, compute_view, shared_interests, CardView, Tag, TagStyle, View};
