use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use gateway::RecordSource;
use models::blog::BlogPost;
use models::faq::Faq;
use models::gallery::{GalleryItem, CATEGORIES};
use models::service::Service;
use models::testimonial::Testimonial;
use service::lifecycle::Listing;
use service::stats::SiteStats;
use service::{testimonials, ServiceError};

use crate::errors::JsonApiError;
use crate::metrics;
use crate::state::ServerState;

fn observe<T>(page: &'static str, result: &Result<Listing<T>, ServiceError>) {
    let outcome = match result {
        Ok(listing) if listing.is_empty() => "empty",
        Ok(_) => "ok",
        Err(_) => "error",
    };
    metrics::PAGE_FETCHES.with_label_values(&[page, outcome]).inc();
}

#[utoipa::path(get, path = "/api/services", tag = "pages", responses(
    (status = 200, description = "Service cards"),
    (status = 502, description = "Store unavailable; retry is a fresh request")
))]
pub async fn services(
    State(state): State<ServerState>,
) -> Result<Json<Listing<Service>>, JsonApiError> {
    let result = state.services.page().await;
    observe("services", &result);
    // unknown icon tags collapse to the default drawable before they reach a page
    let listing = result?.map(|mut svc| {
        svc.icon = Some(svc.icon_tag().as_str().to_string());
        svc
    });
    Ok(Json(listing))
}

#[utoipa::path(get, path = "/api/blog", tag = "pages", responses(
    (status = 200, description = "Blog posts, newest first"),
    (status = 502, description = "Store unavailable")
))]
pub async fn blog(State(state): State<ServerState>) -> Result<Json<Listing<BlogPost>>, JsonApiError> {
    let result = state.blog.page().await;
    observe("blog", &result);
    Ok(Json(result?))
}

#[utoipa::path(get, path = "/api/faqs", tag = "pages", responses(
    (status = 200, description = "FAQ entries"),
    (status = 502, description = "Store unavailable")
))]
pub async fn faqs(State(state): State<ServerState>) -> Result<Json<Listing<Faq>>, JsonApiError> {
    let result = state.faqs.page().await;
    observe("faqs", &result);
    Ok(Json(result?))
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
pub struct GalleryQuery {
    /// Category chip; `All` or absent disables filtering.
    pub category: Option<String>,
}

#[derive(Serialize)]
pub struct GalleryView {
    pub categories: [&'static str; 5],
    pub active_category: String,
    #[serde(flatten)]
    pub listing: Listing<GalleryItem>,
}

#[utoipa::path(get, path = "/api/gallery", tag = "pages", params(GalleryQuery), responses(
    (status = 200, description = "Gallery items for the active category"),
    (status = 502, description = "Store unavailable")
))]
pub async fn gallery(
    State(state): State<ServerState>,
    Query(query): Query<GalleryQuery>,
) -> Result<Json<GalleryView>, JsonApiError> {
    let active_category = query.category.unwrap_or_else(|| "All".to_string());
    let result = state
        .gallery
        .list_all()
        .await
        .map(|rows| {
            Listing::classify(rows.into_iter().filter(|item| item.in_category(&active_category)).collect())
        })
        .map_err(ServiceError::from);
    observe("gallery", &result);
    Ok(Json(GalleryView { categories: CATEGORIES, active_category, listing: result? }))
}

#[derive(Serialize)]
pub struct LandingView {
    pub testimonials: &'static [Testimonial],
    pub stats: SiteStats,
}

/// The landing page never fails outright: a count-fetch problem blanks the
/// stats block and the rest of the page still renders.
#[utoipa::path(get, path = "/api/landing", tag = "pages", responses(
    (status = 200, description = "Testimonials and entity counts")
))]
pub async fn landing(State(state): State<ServerState>) -> Json<LandingView> {
    let stats = state.stats.counts().await;
    let outcome = if stats.services.is_none() { "degraded" } else { "ok" };
    metrics::PAGE_FETCHES.with_label_values(&["landing", outcome]).inc();
    Json(LandingView { testimonials: testimonials::all(), stats })
}
