use crate::models::{Gender, Member, Role};
use thiserror::Error;

/// Errors raised by directory lookups
#[derive(Debug, Error)]
pub enum DirectoryError {
    #[error("Unknown member: {0}")]
    UnknownMember(String),
}

/// In-memory registry of members that can be recommended
#[derive(Debug, Clone, Default)]
pub struct MemberDirectory {
    members: Vec<Member>,
}

impl MemberDirectory {
    pub fn new(members: Vec<Member>) -> Self {
        Self { members }
    }

    /// Directory pre-populated with the demo community
    pub fn seeded() -> Self {
        Self::new(vec![
            seed(
                "u1",
                "Margaret Chen",
                68,
                Role::Senior,
                Gender::Female,
                "Retired teacher who loves sharing traditional recipes and Singapore history.",
                &["Cooking", "History", "Gardening"],
            ),
            seed(
                "u2",
                "Alex Tan",
                21,
                Role::Youth,
                Gender::Male,
                "University student interested in technology and learning from seniors.",
                &["History", "Technology", "Cooking"],
            ),
            seed(
                "u3",
                "Ryan Lim",
                23,
                Role::Youth,
                Gender::Male,
                "Enjoys gaming and building apps in his free time.",
                &["Gaming", "Technology"],
            ),
            seed(
                "u4",
                "Sarah Lim",
                25,
                Role::Youth,
                Gender::Female,
                "Art lover who enjoys cooking and cultural activities.",
                &["Cooking", "Art", "History"],
            ),
            seed(
                "u5",
                "David Ong",
                70,
                Role::Senior,
                Gender::Male,
                "Former engineer who enjoys walking and gardening.",
                &["Gardening", "Walking", "History"],
            ),
        ])
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn get(&self, id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.id == id)
    }

    /// Look up a member, failing when the id is not registered
    pub fn require(&self, id: &str) -> Result<&Member, DirectoryError> {
        self.get(id)
            .ok_or_else(|| DirectoryError::UnknownMember(id.to_string()))
    }
}

fn seed(
    id: &str,
    name: &str,
    age: u8,
    role: Role,
    gender: Gender,
    about: &str,
    interests: &[&str],
) -> Member {
    Member {
        id: id.to_string(),
        name: name.to_string(),
        age,
        role,
        gender,
        about: about.to_string(),
        interests: interests.iter().map(|i| i.to_string()).collect(),
    }
}
