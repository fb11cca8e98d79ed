use std::sync::Arc;

use axum::extract::{Path, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use models::inquiry::{Inquiry, InquiryStatus};
use models::Validate;
use service::content::ContentService;

use crate::errors::JsonApiError;
use crate::state::ServerState;

/// Middleware: admin calls must present the configured `X-Admin-Key`.
/// Without a configured key the whole admin surface reports itself
/// unavailable instead of silently opening up.
pub async fn require_admin_key(
    State(state): State<ServerState>,
    req: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    let expected = match state.admin_key.as_deref() {
        Some(key) => key,
        None => return Err(StatusCode::SERVICE_UNAVAILABLE),
    };
    let presented = req.headers().get("X-Admin-Key").and_then(|v| v.to_str().ok());
    match presented {
        Some(key) if key == expected => Ok(next.run(req).await),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

/// One CRUD router per managed entity. The blog/services/FAQ managers all
/// share this shape, so it is built once and instantiated per record type.
pub fn crud_router<R, I>(svc: Arc<ContentService<R, I>>) -> Router
where
    R: Serialize + Send + Sync + 'static,
    I: DeserializeOwned + Validate + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(list_records::<R, I>).post(create_record::<R, I>))
        .route("/:id", put(update_record::<R, I>).delete(delete_record::<R, I>))
        .with_state(svc)
}

async fn list_records<R, I>(
    State(svc): State<Arc<ContentService<R, I>>>,
) -> Result<Json<Vec<R>>, JsonApiError>
where
    R: Serialize + Send + Sync + 'static,
    I: Validate + Send + Sync + 'static,
{
    Ok(Json(svc.records().await?))
}

async fn create_record<R, I>(
    State(svc): State<Arc<ContentService<R, I>>>,
    Json(input): Json<I>,
) -> Result<Json<R>, JsonApiError>
where
    R: Serialize + Send + Sync + 'static,
    I: DeserializeOwned + Validate + Send + Sync + 'static,
{
    let record = svc.create(input).await?;
    info!(entity = svc.entity(), "admin create");
    Ok(Json(record))
}

async fn update_record<R, I>(
    State(svc): State<Arc<ContentService<R, I>>>,
    Path(id): Path<Uuid>,
    Json(input): Json<I>,
) -> Result<Json<R>, JsonApiError>
where
    R: Serialize + Send + Sync + 'static,
    I: DeserializeOwned + Validate + Send + Sync + 'static,
{
    let record = svc.update(id, input).await?;
    info!(entity = svc.entity(), %id, "admin update");
    Ok(Json(record))
}

async fn delete_record<R, I>(
    State(svc): State<Arc<ContentService<R, I>>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, JsonApiError>
where
    R: Serialize + Send + Sync + 'static,
    I: Validate + Send + Sync + 'static,
{
    if svc.delete(id).await? {
        info!(entity = svc.entity(), %id, "admin delete");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::new(StatusCode::NOT_FOUND, "Not Found", None))
    }
}

#[utoipa::path(get, path = "/admin/inquiries", tag = "admin", responses(
    (status = 200, description = "Inquiries, newest first"),
    (status = 401, description = "Missing or wrong admin key")
))]
pub async fn list_inquiries(
    State(state): State<ServerState>,
) -> Result<Json<Vec<Inquiry>>, JsonApiError> {
    Ok(Json(state.inquiries.records().await?))
}

#[utoipa::path(put, path = "/admin/inquiries/{id}/status", tag = "admin",
    params(("id" = Uuid, Path, description = "Inquiry ID")),
    request_body = crate::openapi::InquiryStatusDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_inquiry_status(
    State(state): State<ServerState>,
    Path(id): Path<Uuid>,
    Json(input): Json<InquiryStatus>,
) -> Result<Json<Inquiry>, JsonApiError> {
    let updated = state.inquiries.update(id, input).await?;
    info!(inquiry = %id, status = %updated.status, "inquiry status updated");
    Ok(Json(updated))
}
