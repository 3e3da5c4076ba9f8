use crate::core::avatar::avatar_for;
use crate::models::Candidate;

pub const EXHAUSTED_MESSAGE: &str = "No more users to show \u{1F331}";
pub const NO_SHARED_INTERESTS: &str = "You do not share any common interests yet.";

/// How an interest tag is drawn on the card
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagStyle {
    /// Interest the viewer also has; drawn highlighted
    Shared,
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub label: String,
    pub style: TagStyle,
}

/// Everything the card displays for one candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub heading: String,
    pub role: String,
    pub badge: String,
    pub avatar: &'static str,
    pub shared_count: usize,
    pub shared_text: String,
    pub tags: Vec<Tag>,
    pub about: String,
}

/// What the swipe card should show
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Exhausted { message: &'static str },
    Card(CardView),
}

/// Compute the view for the candidate under `cursor`
///
/// Pure: the result depends only on the arguments.
pub fn compute_view(candidates: &[Candidate], viewer_interests: &[String], cursor: usize) -> View {
    match candidates.get(cursor) {
        Some(candidate) => View::Card(card_view(candidate, viewer_interests)),
        None => View::Exhausted {
            message: EXHAUSTED_MESSAGE,
        },
    }
}

/// Build the card for a single candidate
pub fn card_view(candidate: &Candidate, viewer_interests: &[String]) -> CardView {
    let shared = shared_interests(&candidate.interests, viewer_interests);

    let mut tags: Vec<Tag> = shared
        .iter()
        .map(|label| Tag {
            label: label.to_string(),
            style: TagStyle::Shared,
        })
        .collect();

    for interest in &candidate.interests {
        if !shared.contains(&interest.as_str()) {
            tags.push(Tag {
                label: interest.clone(),
                style: TagStyle::Plain,
            });
        }
    }

    CardView {
        heading: format!("{}, {}", candidate.name, candidate.age),
        role: candidate.role.to_string(),
        badge: format!("{}% Match", format_score(candidate.score)),
        avatar: avatar_for(&candidate.role, &candidate.gender),
        shared_count: shared.len(),
        shared_text: shared_text(shared.len()),
        tags,
        about: candidate.about.clone(),
    }
}

/// Candidate interests the viewer also has, in candidate order
pub fn shared_interests<'a>(candidate_interests: &'a [String], viewer_interests: &[String]) -> Vec<&'a str> {
    candidate_interests
        .iter()
        .filter(|interest| viewer_interests.contains(*interest))
        .map(String::as_str)
        .collect()
}

fn shared_text(count: usize) -> String {
    if count == 0 {
        NO_SHARED_INTERESTS.to_string()
    } else {
        format!("You both share {} common interest(s):", count)
    }
}

fn format_score(score: f64) -> String {
    if score.fract() == 0.0 {
        format!("{:.0}", score)
    } else {
        score.to_string()
    }
}
