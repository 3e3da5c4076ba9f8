use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Generation a member belongs to
///
/// Unknown labels are kept verbatim so they survive a round trip and fall
/// through to the default avatar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Youth,
    Senior,
    Other(String),
}

impl Default for Role {
    fn default() -> Self {
        Role::Other(String::new())
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Youth" => Role::Youth,
            "Senior" => Role::Senior,
            _ => Role::Other(value),
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Role::from(value.to_string())
    }
}

impl From<Role> for String {
    fn from(value: Role) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Youth => f.write_str("Youth"),
            Role::Senior => f.write_str("Senior"),
            Role::Other(label) => f.write_str(label),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Gender {
    Female,
    Male,
    Other(String),
}

impl Default for Gender {
    fn default() -> Self {
        Gender::Other(String::new())
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        match value.as_str() {
            "Female" => Gender::Female,
            "Male" => Gender::Male,
            _ => Gender::Other(value),
        }
    }
}

impl From<&str> for Gender {
    fn from(value: &str) -> Self {
        Gender::from(value.to_string())
    }
}

impl From<Gender> for String {
    fn from(value: Gender) -> Self {
        value.to_string()
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Female => f.write_str("Female"),
            Gender::Male => f.write_str("Male"),
            Gender::Other(label) => f.write_str(label),
        }
    }
}

/// A registered member as held by the server-side directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub role: Role,
    pub gender: Gender,
    pub about: String,
    pub interests: Vec<String>,
}

/// A recommended member as shown on the swipe card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(deserialize_with = "id_from_text_or_number")]
    pub id: String,
    pub name: String,
    pub age: u32,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub gender: Gender,
    #[serde(serialize_with = "score_as_number")]
    pub score: f64,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub about: String,
}

impl Candidate {
    /// Build a candidate from a directory member and its similarity score
    pub fn from_member(member: &Member, score: u8) -> Self {
        Self {
            id: member.id.clone(),
            name: member.name.clone(),
            age: member.age as u32,
            role: member.role.clone(),
            gender: member.gender.clone(),
            score: score as f64,
            interests: member.interests.clone(),
            about: member.about.clone(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

fn id_from_text_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

fn score_as_number<S>(score: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if score.fract() == 0.0 && score.abs() < i64::MAX as f64 {
        serializer.serialize_i64(*score as i64)
    } else {
        serializer.serialize_f64(*score)
    }
}

/// A stored match between the viewer and a target member
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub user_id: String,
    pub target_id: String,
    pub matched_at: chrono::DateTime<chrono::Utc>,
}

/// Member details listed on the matches page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub id: String,
    pub name: String,
    pub age: u8,
    pub role: Role,
    pub gender: Gender,
}

impl From<&Member> for MatchSummary {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id.clone(),
            name: member.name.clone(),
            age: member.age,
            role: member.role.clone(),
            gender: member.gender.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Warning,
}

/// One-shot notice shown after a redirect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashMessage {
    pub level: FlashLevel,
    pub message: String,
}

impl FlashMessage {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Warning,
            message: message.into(),
        }
    }
}
