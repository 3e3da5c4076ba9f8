use crate::models::{Gender, Role};

pub const YOUTH_FEMALE: &str = "\u{1F471}\u{200D}\u{2640}\u{FE0F}";
pub const YOUTH_MALE: &str = "\u{1F471}";
pub const SENIOR_FEMALE: &str = "\u{1F9D1}\u{200D}\u{1F9B3}";
pub const SENIOR_MALE: &str = "\u{1F468}\u{200D}\u{1F9B3}";
pub const DEFAULT_AVATAR: &str = "\u{1F642}";

/// Pick the avatar glyph for a (role, gender) pair
///
/// Any pair outside the four known combinations gets [`DEFAULT_AVATAR`].
pub fn avatar_for(role: &Role, gender: &Gender) -> &'static str {
    match (role, gender) {
        (Role::Youth, Gender::Female) => YOUTH_FEMALE,
        (Role::Youth, Gender::Male) => YOUTH_MALE,
        (Role::Senior, Gender::Female) => SENIOR_FEMALE,
        (Role::Senior, Gender::Male) => SENIOR_MALE,
        (Role::Other(_), _) | (_, Gender::Other(_)) => DEFAULT_AVATAR,
    }
}
