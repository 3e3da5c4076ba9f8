// Unit tests for GeneraLink Match

use generalink_match::core::{
    avatar_for, compute_view, shared_interests, similarity, CardView, Recommender, TagStyle, View,
};
use generalink_match::models::{Candidate, Gender, Member, Role};
use generalink_match::services::MemberDirectory;
use generalink_match::swipe::{CardSurface, Navigation, NavigationLog, RemoveControl, SwipeSession};
use generalink_match::RecommendationsResponse;

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn create_candidate(id: &str, interests: &[&str]) -> Candidate {
    Candidate {
        id: id.to_string(),
        name: format!("User {}", id),
        age: 30,
        role: Role::Senior,
        gender: Gender::Female,
        score: 25.0,
        interests: tags(interests),
        about: format!("About {}", id),
    }
}

#[derive(Default)]
struct CountingSurface {
    cards: Vec<CardView>,
    exhausted: usize,
}

impl CardSurface for CountingSurface {
    fn has_card_container(&self) -> bool {
        true
    }

    fn show_exhausted(&mut self, _message: &str) {
        self.exhausted += 1;
    }

    fn show_card(&mut self, card: &CardView) {
        self.cards.push(card.clone());
    }
}

#[test]
fn test_avatar_table() {
    assert_eq!(avatar_for(&Role::Youth, &Gender::Female), "👱‍♀️");
    assert_eq!(avatar_for(&Role::Senior, &Gender::Male), "👨‍🦳");
    assert_eq!(avatar_for(&Role::from("Child"), &Gender::Male), "🙂");
}

#[test]
fn test_fewer_than_n_passes_shows_candidate_at_cursor() {
    let candidates: Vec<Candidate> = (0..5)
        .map(|i| create_candidate(&i.to_string(), &["Cooking"]))
        .collect();

    for passes in 0..5 {
        match compute_view(&candidates, &tags(&["Cooking"]), passes) {
            View::Card(card) => assert_eq!(card.heading, format!("User {}, 30", passes)),
            View::Exhausted { .. } => panic!("exhausted after only {} passes", passes),
        }
    }

    assert!(matches!(
        compute_view(&candidates, &tags(&["Cooking"]), 5),
        View::Exhausted { .. }
    ));
}

#[test]
fn test_shared_count_matches_intersection_size() {
    let cases: &[(&[&str], &[&str], usize)] = &[
        (&["a", "b", "c"], &["b", "c", "d"], 2),
        (&["a"], &[], 0),
        (&[], &["a"], 0),
        (&["x", "y"], &["y", "x"], 2),
    ];

    for (candidate, viewer, expected) in cases {
        let candidate = create_candidate("c", candidate);
        let viewer = tags(viewer);

        assert_eq!(shared_interests(&candidate.interests, &viewer).len(), *expected);
        match compute_view(std::slice::from_ref(&candidate), &viewer, 0) {
            View::Card(card) => assert_eq!(card.shared_count, *expected),
            other => panic!("expected card, got {:?}", other),
        }
    }
}

#[test]
fn test_tags_partitioned_without_duplicates() {
    let candidate = create_candidate("c", &["Art", "Cooking", "Music", "History"]);
    let viewer = tags(&["History", "Art", "Walking"]);

    let card = match compute_view(std::slice::from_ref(&candidate), &viewer, 0) {
        View::Card(card) => card,
        other => panic!("expected card, got {:?}", other),
    };

    let shared: Vec<&str> = card
        .tags
        .iter()
        .filter(|t| t.style == TagStyle::Shared)
        .map(|t| t.label.as_str())
        .collect();
    let plain: Vec<&str> = card
        .tags
        .iter()
        .filter(|t| t.style == TagStyle::Plain)
        .map(|t| t.label.as_str())
        .collect();

    assert_eq!(shared, vec!["Art", "History"]);
    assert_eq!(plain, vec!["Cooking", "Music"]);
    assert_eq!(card.tags.len(), candidate.interests.len());
    // Shared tags come first
    assert!(card.tags[..2].iter().all(|t| t.style == TagStyle::Shared));
}

#[test]
fn test_session_n_passes_reaches_exhausted() {
    let mut session = SwipeSession::new();
    session.replace_batch(RecommendationsResponse {
        users: vec![create_candidate("1", &[]), create_candidate("2", &[])],
        current_user_interests: vec![],
    });
    let mut surface = CountingSurface::default();

    session.render(&mut surface);
    session.pass(&mut surface);
    session.pass(&mut surface);

    assert_eq!(surface.cards.len(), 2);
    assert_eq!(surface.exhausted, 1);

    let mut browser = NavigationLog::new(true);
    assert!(!session.match_current(&mut browser));
    assert!(browser.navigations().is_empty());
}

#[test]
fn test_remove_confirmed_navigates_exactly_to_url() {
    let session = SwipeSession::new();
    let mut browser = NavigationLog::new(true);

    session.remove_match(&RemoveControl::for_target("u4"), &mut browser);

    assert_eq!(
        browser.navigations(),
        &[Navigation::Visit { url: "/match/remove/u4".to_string() }]
    );
}

#[test]
fn test_similarity_jaccard() {
    assert_eq!(similarity(&tags(&["Cooking", "History"]), &tags(&["History"])), 50);
    assert_eq!(similarity(&tags(&["Gaming"]), &tags(&["History"])), 0);
}

#[test]
fn test_youth_viewer_sees_seniors() {
    let directory = MemberDirectory::seeded();
    let viewer: &Member = directory.get("u2").unwrap();

    let result = Recommender::default().recommend(viewer, directory.members());
    let ids: Vec<&str> = result.users.iter().map(|c| c.id.as_str()).collect();

    assert_eq!(ids, vec!["u1", "u5"]);
    // Alex and David share only History out of five distinct tags
    assert_eq!(result.users[1].score, 20.0);
}
