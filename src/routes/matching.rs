use actix_web::{http::header, web, HttpResponse, Responder};
use validator::Validate;
use crate::core::Recommender;
use crate::models::{
    ErrorResponse, FlashMessage, FlashResponse, HealthResponse, MatchSummary, MatchesResponse,
    TargetPath,
};
use crate::services::{FlashQueue, MatchStore, MemberDirectory};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<MemberDirectory>,
    pub store: Arc<MatchStore>,
    pub flash: Arc<FlashQueue>,
    pub recommender: Recommender,
    pub viewer_id: String,
}

impl AppState {
    pub fn new(
        directory: MemberDirectory,
        store: MatchStore,
        recommender: Recommender,
        viewer_id: impl Into<String>,
    ) -> Self {
        Self {
            directory: Arc::new(directory),
            store: Arc::new(store),
            flash: Arc::new(FlashQueue::new()),
            recommender,
            viewer_id: viewer_id.into(),
        }
    }
}

/// Configure all matching routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/api/health", web::get().to(health_check))
        .route("/api/recommendations", web::get().to(get_recommendations))
        .route("/api/flash", web::get().to(take_flash))
        .route("/matches", web::get().to(view_matches))
        .route("/match/remove/{target_id}", web::get().to(remove_match))
        .route("/match/{target_id}", web::post().to(create_match));
}

fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

fn invalid_target(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

fn store_failure(context: &str, e: impl std::fmt::Display) -> HttpResponse {
    tracing::error!("{}: {}", context, e);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: context.to_string(),
        message: e.to_string(),
        status_code: 500,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let healthy = state.store.health_check().await.unwrap_or(false);

    let status = if healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommendation batch for the swipe card
///
/// GET /api/recommendations
///
/// Response body:
/// ```json
/// {
///   "users": [{ "id": "u2", "name": "Alex Tan", "age": 21, "role": "Youth",
///               "gender": "Male", "score": 50, "interests": [], "about": "" }],
///   "current_user_interests": ["Cooking"]
/// }
/// ```
async fn get_recommendations(state: web::Data<AppState>) -> impl Responder {
    let viewer = match state.directory.require(&state.viewer_id) {
        Ok(viewer) => viewer,
        Err(e) => {
            tracing::error!("Cannot build recommendations: {}", e);
            return HttpResponse::NotFound().json(ErrorResponse {
                error: "Viewer not found".to_string(),
                message: e.to_string(),
                status_code: 404,
            });
        }
    };

    let response = state.recommender.recommend(viewer, state.directory.members());

    tracing::info!(
        "Returning {} recommendations for {}",
        response.users.len(),
        viewer.id
    );

    HttpResponse::Ok().json(response)
}

/// Record a match with the target
///
/// POST /match/{target_id}
///
/// Redirects back to the swipe page either way; a repeat match only adds a
/// warning.
async fn create_match(
    state: web::Data<AppState>,
    path: web::Path<TargetPath>,
) -> impl Responder {
    if let Err(errors) = path.validate() {
        return invalid_target(errors);
    }

    let target_id = &path.target_id;

    match state.store.create(&state.viewer_id, target_id).await {
        Ok(true) => {
            tracing::info!("Match created: {} -> {}", state.viewer_id, target_id);
            state.flash.push(FlashMessage::success("Match successful!")).await;
        }
        Ok(false) => {
            tracing::info!("Duplicate match ignored: {} -> {}", state.viewer_id, target_id);
            state
                .flash
                .push(FlashMessage::warning("You have already matched with this user."))
                .await;
        }
        Err(e) => return store_failure("Failed to create match", e),
    }

    see_other("/matching")
}

/// List the viewer's matches
///
/// GET /matches
async fn view_matches(state: web::Data<AppState>) -> impl Responder {
    let records = match state.store.list(&state.viewer_id).await {
        Ok(records) => records,
        Err(e) => return store_failure("Failed to list matches", e),
    };

    let matches: Vec<MatchSummary> = records
        .iter()
        .filter_map(|record| match state.directory.get(&record.target_id) {
            Some(member) => Some(MatchSummary::from(member)),
            None => {
                tracing::warn!("Skipping match with unknown member {}", record.target_id);
                None
            }
        })
        .collect();

    HttpResponse::Ok().json(MatchesResponse { matches })
}

/// Remove a match with the target
///
/// GET /match/remove/{target_id}
async fn remove_match(
    state: web::Data<AppState>,
    path: web::Path<TargetPath>,
) -> impl Responder {
    if let Err(errors) = path.validate() {
        return invalid_target(errors);
    }

    let target_id = &path.target_id;

    match state.store.remove(&state.viewer_id, target_id).await {
        Ok(removed) => {
            tracing::info!(
                "Removing match: {} -> {} (existed: {})",
                state.viewer_id,
                target_id,
                removed
            );
        }
        Err(e) => return store_failure("Failed to remove match", e),
    }

    state
        .flash
        .push(FlashMessage::warning("Match removed successfully."))
        .await;

    see_other("/matches")
}

/// Drain pending flash messages
///
/// GET /api/flash
async fn take_flash(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(FlashResponse {
        messages: state.flash.drain().await,
    })
}
