use crate::core::{compute_view, View};
use crate::models::{Candidate, RecommendationsResponse};
use crate::services::RecommendationsClient;
use crate::swipe::browser::{Browser, FormMethod, RemoveControl};
use crate::swipe::surface::CardSurface;

pub const MISSING_REMOVE_URL: &str = "Remove URL not found on button.";
pub const CONFIRM_REMOVE: &str = "Are you sure you want to remove this match?";

/// State behind one swipe card page
///
/// Holds the current recommendation batch and a cursor into it. The cursor
/// only moves forward; once it reaches the end of the batch the card shows
/// the exhausted message.
#[derive(Debug, Clone, Default)]
pub struct SwipeSession {
    candidates: Vec<Candidate>,
    viewer_interests: Vec<String>,
    cursor: usize,
}

impl SwipeSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn viewer_interests(&self) -> &[String] {
        &self.viewer_interests
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Candidate under the cursor, if the batch is not exhausted
    pub fn current(&self) -> Option<&Candidate> {
        self.candidates.get(self.cursor)
    }

    /// Swap in a freshly fetched batch and rewind the cursor
    pub fn replace_batch(&mut self, batch: RecommendationsResponse) {
        self.candidates = batch.users;
        self.viewer_interests = batch.current_user_interests;
        self.cursor = 0;
    }

    /// Fetch a batch from the server and show its first candidate
    ///
    /// A failed fetch is logged and leaves both the session and the surface
    /// as they were.
    pub async fn load_recommendations<S: CardSurface>(
        &mut self,
        client: &RecommendationsClient,
        surface: &mut S,
    ) {
        match client.fetch_recommendations().await {
            Ok(batch) => {
                tracing::info!("Loaded {} recommendations", batch.users.len());
                self.replace_batch(batch);
                self.render(surface);
            }
            Err(e) => {
                tracing::error!("Error fetching recommendations: {}", e);
            }
        }
    }

    /// What the card should currently show
    pub fn view(&self) -> View {
        compute_view(&self.candidates, &self.viewer_interests, self.cursor)
    }

    pub fn render<S: CardSurface>(&self, surface: &mut S) {
        match self.view() {
            View::Exhausted { message } => surface.show_exhausted(message),
            View::Card(card) => surface.show_card(&card),
        }
    }

    /// Skip the current candidate
    pub fn pass<S: CardSurface>(&mut self, surface: &mut S) {
        self.cursor = self.cursor.saturating_add(1);
        self.render(surface);
    }

    /// Submit a match for the current candidate
    ///
    /// Does nothing once the batch is exhausted. Returns whether a request
    /// was submitted.
    pub fn match_current<B: Browser>(&self, browser: &mut B) -> bool {
        let Some(candidate) = self.current() else {
            tracing::debug!("Match ignored, no candidate under cursor {}", self.cursor);
            return false;
        };

        let action = format!("/match/{}", urlencoding::encode(&candidate.id));
        tracing::info!("Matching with {} ({})", candidate.name, candidate.id);
        browser.submit_form(FormMethod::Post, &action);
        true
    }

    /// Remove an existing match after the user confirms
    ///
    /// Returns whether the browser was sent to the removal URL.
    pub fn remove_match<B: Browser>(&self, control: &RemoveControl, browser: &mut B) -> bool {
        let remove_url = match control.remove_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => {
                browser.alert(MISSING_REMOVE_URL);
                return false;
            }
        };

        if !browser.confirm(CONFIRM_REMOVE) {
            return false;
        }

        browser.navigate(remove_url);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::CardView;
    use crate::models::{Gender, Role};
    use crate::swipe::browser::{Navigation, NavigationLog};

    #[derive(Default)]
    struct RecordingSurface {
        shown: Vec<String>,
    }

    impl CardSurface for RecordingSurface {
        fn has_card_container(&self) -> bool {
            true
        }

        fn show_exhausted(&mut self, message: &str) {
            self.shown.push(message.to_string());
        }

        fn show_card(&mut self, card: &CardView) {
            self.shown.push(card.heading.clone());
        }
    }

    fn candidate(id: &str, name: &str) -> Candidate {
        Candidate {
            id: id.to_string(),
            name: name.to_string(),
            age: 30,
            role: Role::Youth,
            gender: Gender::Female,
            score: 40.0,
            interests: vec!["Cooking".to_string()],
            about: String::new(),
        }
    }

    fn session_with(names: &[(&str, &str)]) -> SwipeSession {
        let mut session = SwipeSession::new();
        session.replace_batch(RecommendationsResponse {
            users: names.iter().map(|(id, name)| candidate(id, name)).collect(),
            current_user_interests: vec!["Cooking".to_string()],
        });
        session
    }

    #[test]
    fn test_pass_walks_batch_then_exhausts() {
        let mut session = session_with(&[("u2", "Alex"), ("u3", "Ryan"), ("u4", "Sarah")]);
        let mut surface = RecordingSurface::default();

        session.render(&mut surface);
        for _ in 0..3 {
            session.pass(&mut surface);
        }

        assert_eq!(
            surface.shown,
            vec!["Alex, 30", "Ryan, 30", "Sarah, 30", "No more users to show 🌱"]
        );
        assert_eq!(session.cursor(), 3);
    }

    #[test]
    fn test_pass_past_end_stays_exhausted() {
        let mut session = session_with(&[("u2", "Alex")]);
        let mut surface = RecordingSurface::default();

        for _ in 0..4 {
            session.pass(&mut surface);
        }

        assert!(surface.shown.iter().all(|s| s == "No more users to show 🌱"));
        assert!(session.current().is_none());
    }

    #[test]
    fn test_replace_batch_rewinds_cursor() {
        let mut session = session_with(&[("u2", "Alex")]);
        let mut surface = RecordingSurface::default();
        session.pass(&mut surface);

        session.replace_batch(RecommendationsResponse {
            users: vec![candidate("u4", "Sarah")],
            current_user_interests: vec![],
        });

        assert_eq!(session.cursor(), 0);
        assert_eq!(session.current().map(|c| c.name.as_str()), Some("Sarah"));
        assert!(session.viewer_interests().is_empty());
    }

    #[test]
    fn test_match_submits_post_for_current() {
        let mut session = session_with(&[("u2", "Alex"), ("u 3", "Ryan")]);
        let mut surface = RecordingSurface::default();
        let mut browser = NavigationLog::new(true);

        assert!(session.match_current(&mut browser));
        session.pass(&mut surface);
        assert!(session.match_current(&mut browser));

        assert_eq!(
            browser.navigations(),
            &[
                Navigation::SubmitForm { method: FormMethod::Post, action: "/match/u2".to_string() },
                Navigation::SubmitForm { method: FormMethod::Post, action: "/match/u%203".to_string() },
            ]
        );
    }

    #[test]
    fn test_match_on_empty_or_exhausted_is_noop() {
        let mut browser = NavigationLog::new(true);
        assert!(!SwipeSession::new().match_current(&mut browser));

        let mut session = session_with(&[("u2", "Alex")]);
        session.pass(&mut RecordingSurface::default());
        assert!(!session.match_current(&mut browser));

        assert!(browser.navigations().is_empty());
    }

    #[test]
    fn test_remove_without_url_alerts() {
        let session = SwipeSession::new();
        let mut browser = NavigationLog::new(true);

        assert!(!session.remove_match(&RemoveControl::default(), &mut browser));
        assert!(!session.remove_match(&RemoveControl::new(Some(String::new())), &mut browser));

        assert_eq!(browser.alerts(), &[MISSING_REMOVE_URL, MISSING_REMOVE_URL]);
        assert!(browser.prompts().is_empty());
        assert!(browser.navigations().is_empty());
    }

    #[test]
    fn test_remove_declined_does_nothing() {
        let session = SwipeSession::new();
        let mut browser = NavigationLog::new(false);

        assert!(!session.remove_match(&RemoveControl::for_target("u2"), &mut browser));

        assert_eq!(browser.prompts(), &[CONFIRM_REMOVE]);
        assert!(browser.alerts().is_empty());
        assert!(browser.navigations().is_empty());
    }

    #[test]
    fn test_remove_confirmed_navigates_to_url() {
        let session = SwipeSession::new();
        let mut browser = NavigationLog::new(true);
        let control = RemoveControl::new(Some("/match/remove/u2?next=%2Fmatches".to_string()));

        assert!(session.remove_match(&control, &mut browser));

        assert_eq!(
            browser.navigations(),
            &[Navigation::Visit { url: "/match/remove/u2?next=%2Fmatches".to_string() }]
        );
    }
}
