//! # Datebook API
//!
//! The API crate provides the web server for the datebook booking calendar.
//! It exposes RESTful endpoints for managing bookings and checking slot
//! availability.
//!
//! ## Architecture
//!
//! This crate follows a layered architecture:
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Map domain errors to HTTP responses
//! - **Config**: Handle environment and application configuration
//!
//! The API uses Axum as the web framework and SQLx for database
//! interactions; conflict enforcement itself lives in the booking
//! repository, not here.

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::sync::Arc;

use axum::Router;
use datebook_notifier::sink::NotificationSink;
use datebook_notifier::store::ReminderStore;
use eyre::Result;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

/// Shared application state that is accessible to all request handlers.
pub struct ApiState {
    /// PostgreSQL connection pool for booking rows
    pub db_pool: PgPool,
    /// Local durable store holding pending reminders
    pub reminders: ReminderStore,
    /// Delivery surface used when scheduling reminders
    pub sink: Arc<dyn NotificationSink>,
}

/// Starts the API server with the provided configuration and stores.
///
/// Initializes logging, configures routes and middleware, and serves HTTP
/// until the process is stopped.
pub async fn start_server(
    config: config::ApiConfig,
    db_pool: PgPool,
    reminders: ReminderStore,
    sink: Arc<dyn NotificationSink>,
) -> Result<()> {
    // Initialize tracing for logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Create shared state with dependencies
    let state = Arc::new(ApiState {
        db_pool,
        reminders,
        sink,
    });

    // Build the application router with all routes
    let app = Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Booking CRUD endpoints
        .merge(routes::bookings::routes())
        // Availability check endpoint
        .merge(routes::availability::routes())
        // Attach shared state to all routes
        .with_state(state);

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let cors = tower_http::cors::CorsLayer::new()
            .allow_methods([
                axum::http::Method::GET,
                axum::http::Method::POST,
                axum::http::Method::PUT,
                axum::http::Method::DELETE,
                axum::http::Method::OPTIONS,
            ])
            .allow_headers([
                axum::http::header::CONTENT_TYPE,
                axum::http::header::ACCEPT,
            ])
            .allow_origin(
                origins
                    .iter()
                    .filter_map(|origin| origin.parse().ok())
                    .collect::<Vec<_>>(),
            )
            .allow_credentials(true);

        app.layer(cors)
    } else {
        app
    };

    // Add request timeout middleware
    let app = app.layer(tower_http::timeout::TimeoutLayer::new(
        std::time::Duration::from_secs(config.request_timeout),
    ));

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
