// Swipe card front end
pub mod browser;
pub mod session;
pub mod surface;

pub use browser::{Browser, FormMethod, Navigation, NavigationLog, RemoveControl};
pub use session::SwipeSession;
pub use surface::{CardSurface, TextSurface};

use crate::services::RecommendationsClient;

/// Page-ready hook: load the first batch when the page has a card
pub async fn on_page_ready<S: CardSurface>(
    session: &mut SwipeSession,
    client: &RecommendationsClient,
    surface: &mut S,
) {
    if !surface.has_card_container() {
        tracing::debug!("No swipe card on page, skipping recommendations fetch");
        return;
    }

    session.load_recommendations(client, surface).await;
}
