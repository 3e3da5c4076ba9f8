use crate::models::{Member, Role};

/// Check whether a member may be recommended to the viewer
///
/// Seniors are paired with youth and youth with seniors. A viewer with any
/// other role sees everyone except themselves.
#[inline]
pub fn is_eligible(viewer: &Member, member: &Member) -> bool {
    if member.id == viewer.id {
        return false;
    }

    is_complementary(&viewer.role, &member.role)
}

/// Check whether two roles form an intergenerational pair
#[inline]
pub fn is_complementary(viewer_role: &Role, member_role: &Role) -> bool {
    match viewer_role {
        Role::Senior => *member_role == Role::Youth,
        Role::Youth => *member_role == Role::Senior,
        Role::Other(_) => true,
    }
}
