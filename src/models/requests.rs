use serde::{Deserialize, Serialize};
use validator::Validate;

/// Path segment naming the member a match action targets
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TargetPath {
    #[validate(length(min = 1, max = 64))]
    pub target_id: String,
}
