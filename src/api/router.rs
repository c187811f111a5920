use axum::{
    body::Body,
    extract::Request,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::api::handlers::{auth, booking, health, offering};
use crate::state::AppState;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Auth
        .route("/api/v1/auth/register", post(auth::register))
        .route("/api/v1/auth/login", post(auth::login))

        // Offering catalog (reads public, writes admin-only)
        .route("/api/v1/offerings", get(offering::list_offerings).post(offering::create_offering))
        .route(
            "/api/v1/offerings/{id}",
            get(offering::get_offering)
                .put(offering::update_offering)
                .delete(offering::delete_offering),
        )

        // Bookings
        .route("/api/v1/bookings", post(booking::create_booking))
        .route("/api/v1/bookings/me", get(booking::list_my_bookings))
        .route(
            "/api/v1/bookings/{booking_id}",
            get(booking::get_booking).delete(booking::cancel_booking),
        )

        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        user_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                }),
        )
        .with_state(state)
}
