use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::Request;
use axum::http::Response;
use axum::middleware;
use axum::routing::get;
use axum::routing::post;
use axum::routing::put;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::Span;

use super::handlers::books;
use super::handlers::health::health;
use super::handlers::sellers;
use super::handlers::token::issue_token;
use super::middleware::authenticate as auth_middleware;
use crate::domain::authentication::ports::AuthServicePort;
use crate::domain::book::ports::BookServicePort;
use crate::domain::seller::ports::SellerServicePort;

/// Shared handler state. Services sit behind their ports so any adapter
/// set can back the same router.
#[derive(Clone)]
pub struct AppState {
    pub seller_service: Arc<dyn SellerServicePort>,
    pub book_service: Arc<dyn BookServicePort>,
    pub auth_service: Arc<dyn AuthServicePort>,
}

pub fn create_router(
    seller_service: Arc<dyn SellerServicePort>,
    book_service: Arc<dyn BookServicePort>,
    auth_service: Arc<dyn AuthServicePort>,
) -> Router {
    let state = AppState {
        seller_service,
        book_service,
        auth_service,
    };

    let public_routes = Router::new()
        .route("/token", post(issue_token))
        .route(
            "/seller",
            post(sellers::create_seller).get(sellers::list_sellers),
        )
        .route("/seller/:id", get(sellers::get_seller))
        .route("/books", get(books::list_books))
        .route("/books/:id", get(books::get_book));

    // Same paths as above, different methods; axum merges the method routers.
    let protected_routes = Router::new()
        .route(
            "/seller/:id",
            put(sellers::update_seller).delete(sellers::delete_seller),
        )
        .route("/books", post(books::create_book))
        .route(
            "/books/:id",
            put(books::update_book).delete(books::delete_book),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    let api_routes = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .route("/health", get(health));

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| {
            tracing::info_span!(
                "http_request",
                method = %request.method(),
                uri = %request.uri(),
                version = ?request.version(),
            )
        })
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!(
                method = %request.method(),
                uri = %request.uri(),
                "Request started"
            );
        })
        .on_response(
            |response: &Response<Body>, latency: Duration, _span: &Span| {
                tracing::info!(
                    status = response.status().as_u16(),
                    latency_ms = latency.as_millis(),
                    "Request completed"
                );
            },
        );

    Router::new()
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(trace_layer)
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
