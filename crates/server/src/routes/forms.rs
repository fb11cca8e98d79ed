use axum::extract::State;
use axum::Json;
use serde_json::json;
use tracing::info;

use service::contact::ContactForm;
use service::subscribe::SubscribeForm;
use service::ServiceError;

use crate::errors::JsonApiError;
use crate::metrics;
use crate::state::ServerState;

fn submit_outcome(err: &ServiceError) -> &'static str {
    match err {
        ServiceError::Validation(_) => "rejected",
        _ => "failed",
    }
}

#[utoipa::path(post, path = "/api/contact", tag = "forms",
    request_body = crate::openapi::ContactFormDoc,
    responses(
        (status = 200, description = "Email sent and inquiry recorded"),
        (status = 400, description = "Missing required field; nothing dispatched"),
        (status = 502, description = "Email or store failure; input kept client-side for retry"),
        (status = 503, description = "Email service is not configured")
    )
)]
pub async fn contact(
    State(state): State<ServerState>,
    Json(form): Json<ContactForm>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    match state.contact.submit(form).await {
        Ok(saved) => {
            metrics::FORM_SUBMITS.with_label_values(&["contact", "ok"]).inc();
            info!(inquiry = %saved.id, "contact form delivered");
            Ok(Json(json!({"ok": true})))
        }
        Err(e) => {
            metrics::FORM_SUBMITS.with_label_values(&["contact", submit_outcome(&e)]).inc();
            Err(e.into())
        }
    }
}

#[utoipa::path(post, path = "/api/subscribe", tag = "forms",
    request_body = crate::openapi::SubscribeFormDoc,
    responses(
        (status = 200, description = "Subscription email sent"),
        (status = 400, description = "Invalid email; nothing dispatched"),
        (status = 502, description = "Provider failure"),
        (status = 503, description = "Email service is not configured")
    )
)]
pub async fn subscribe(
    State(state): State<ServerState>,
    Json(form): Json<SubscribeForm>,
) -> Result<Json<serde_json::Value>, JsonApiError> {
    match state.subscribe.subscribe(form).await {
        Ok(()) => {
            metrics::FORM_SUBMITS.with_label_values(&["subscribe", "ok"]).inc();
            Ok(Json(json!({"ok": true})))
        }
        Err(e) => {
            metrics::FORM_SUBMITS.with_label_values(&["subscribe", submit_outcome(&e)]).inc();
            Err(e.into())
        }
    }
}
