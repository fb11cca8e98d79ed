pub mod admin;
pub mod forms;
pub mod pages;

use axum::middleware;
use axum::routing::{get, put};
use axum::{Json, Router};
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::metrics;
use crate::state::ServerState;

#[utoipa::path(get, path = "/health", tag = "pages", responses((status = 200, description = "OK")))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Build the full application router: static frontend, public page data,
/// forms, and the key-guarded admin managers.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let static_dir = ServeDir::new("frontend").fallback(ServeFile::new("frontend/index.html"));

    // Public routes (health + metrics); static assets hang off the fallback
    let public = Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics::render));

    // Page data and form endpoints
    let api = Router::new()
        .route("/api/landing", get(pages::landing))
        .route("/api/services", get(pages::services))
        .route("/api/blog", get(pages::blog))
        .route("/api/faqs", get(pages::faqs))
        .route("/api/gallery", get(pages::gallery))
        .route("/api/contact", axum::routing::post(forms::contact))
        .route("/api/subscribe", axum::routing::post(forms::subscribe))
        .with_state(state.clone());

    // Admin managers share one CRUD shape per managed entity
    let admin_routes = Router::new()
        .route("/admin/inquiries", get(admin::list_inquiries))
        .route("/admin/inquiries/:id/status", put(admin::update_inquiry_status))
        .with_state(state.clone())
        .nest("/admin/services", admin::crud_router(state.services.clone()))
        .nest("/admin/blog", admin::crud_router(state.blog.clone()))
        .nest("/admin/faqs", admin::crud_router(state.faqs.clone()))
        .route_layer(middleware::from_fn_with_state(state.clone(), admin::require_admin_key));

    let docs = SwaggerUi::new("/docs").url("/api-docs/openapi.json", crate::openapi::ApiDoc::openapi());

    // Compose; anything that is not an API route falls through to the
    // static frontend with an index.html fallback for client-side routing
    public
        .merge(api)
        .merge(admin_routes)
        .merge(docs)
        .fallback_service(static_dir)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径等，日志级别为 INFO
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                )
        )
}
