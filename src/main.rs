use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use generalink_match::config::{Settings, StoreBackend};
use generalink_match::core::Recommender;
use generalink_match::routes::{self, AppState};
use generalink_match::services::{MatchStore, MemberDirectory, PostgresClient};
use tracing::{error, info};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    generalink_match::logging::init(&settings.logging);

    info!("Starting GeneraLink matching service...");

    let store = match settings.store.backend {
        StoreBackend::Memory => {
            info!("Using in-memory match store");
            MatchStore::in_memory()
        }
        StoreBackend::Postgres => {
            let url = settings.store.database_url.as_deref().ok_or_else(|| {
                error!("store.backend is postgres but no database_url is set");
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "missing store.database_url")
            })?;

            let postgres = PostgresClient::from_settings(
                url,
                settings.store.max_connections,
                settings.store.min_connections,
                settings.store.acquire_timeout_secs,
                settings.store.idle_timeout_secs,
            )
            .await
            .map_err(|e| {
                error!("Failed to connect to PostgreSQL: {}", e);
                std::io::Error::new(std::io::ErrorKind::Other, e.to_string())
            })?;

            info!(
                "PostgreSQL match store initialized (max: {} connections)",
                settings.store.max_connections.unwrap_or(10)
            );
            MatchStore::Postgres(postgres)
        }
    };

    let directory = MemberDirectory::seeded();
    if directory.get(&settings.matching.viewer_id).is_none() {
        error!(
            "Configured viewer {} is not in the member directory",
            settings.matching.viewer_id
        );
    }

    let recommender = Recommender::new(settings.matching.min_score);

    let app_state = AppState::new(
        directory,
        store,
        recommender,
        settings.matching.viewer_id.clone(),
    );

    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{} as viewer {}", host, port, app_state.viewer_id);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
