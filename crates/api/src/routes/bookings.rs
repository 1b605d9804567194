use axum::{
    Router,
    routing::{delete, get, post, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route("/api/bookings", get(handlers::bookings::list_bookings))
        .route("/api/bookings", post(handlers::bookings::create_booking))
        .route("/api/bookings/:id", get(handlers::bookings::get_booking))
        .route("/api/bookings/:id", put(handlers::bookings::update_booking))
        .route(
            "/api/bookings/:id",
            delete(handlers::bookings::delete_booking),
        )
}
