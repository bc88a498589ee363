use roam_api::{
    app,
    state::{AppState, AuthConfig},
};
use roam_booking::{BookingManager, BookingRepository};
use roam_catalog::TourRepository;
use roam_rating::{RatingAggregator, ReviewRepository};
use roam_store::{DbClient, PgBookingRepository, PgReviewRepository, PgTourRepository};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roam_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = roam_store::app_config::Config::load().expect("Failed to load config");
    tracing::info!("Starting Roam API on port {}", config.server.port);

    let db = DbClient::new(&config.database.url, config.database.max_connections)
        .await
        .expect("Failed to connect to Postgres");
    db.migrate().await.expect("Failed to run migrations");

    let tours: Arc<dyn TourRepository> = Arc::new(PgTourRepository::new(db.pool.clone()));
    let bookings: Arc<dyn BookingRepository> = Arc::new(PgBookingRepository::new(db.pool.clone()));
    let reviews: Arc<dyn ReviewRepository> = Arc::new(PgReviewRepository::new(db.pool.clone()));

    let app_state = AppState {
        bookings: Arc::new(BookingManager::new(tours.clone(), bookings)),
        ratings: Arc::new(RatingAggregator::new(tours.clone(), reviews)),
        tours,
        auth: AuthConfig {
            secret: config.auth.jwt_secret.clone(),
            expiration: config.auth.jwt_expiration_seconds,
        },
    };

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
