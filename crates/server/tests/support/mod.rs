//! Shared harness for the server integration tests: the app under test plus
//! in-process stand-ins for the hosted table store and the email provider,
//! all bound to port 0 and driven over real HTTP.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;
use uuid::Uuid;

use configs::EmailConfig;
use gateway::GatewayClient;
use mailer::{EmailJsMailer, Mailer};
use server::routes;
use server::state::ServerState;

/// Chronological log shared by both mocks so tests can assert cross-service
/// ordering (email send before inquiry create).
pub type EventLog = Arc<Mutex<Vec<String>>>;

#[derive(Clone, Default)]
pub struct MockStore {
    tables: Arc<Mutex<HashMap<String, Vec<Value>>>>,
    failing: Arc<Mutex<HashSet<String>>>,
    list_hits: Arc<Mutex<HashMap<String, usize>>>,
    pub events: EventLog,
}

impl MockStore {
    pub async fn seed(&self, table: &str, mut row: Value) {
        if row.get("id").is_none() {
            row["id"] = json!(Uuid::new_v4());
        }
        self.tables.lock().await.entry(table.to_string()).or_default().push(row);
    }

    pub async fn fail_table(&self, table: &str) {
        self.failing.lock().await.insert(table.to_string());
    }

    pub async fn heal_table(&self, table: &str) {
        self.failing.lock().await.remove(table);
    }

    pub async fn list_hits(&self, table: &str) -> usize {
        *self.list_hits.lock().await.get(table).unwrap_or(&0)
    }

    pub async fn creates(&self, table: &str) -> usize {
        let wanted = format!("create:{table}");
        self.events.lock().await.iter().filter(|e| **e == wanted).count()
    }

    pub async fn rows(&self, table: &str) -> Vec<Value> {
        self.tables.lock().await.get(table).cloned().unwrap_or_default()
    }
}

fn id_filter(query: Option<String>) -> Option<String> {
    query.and_then(|q| {
        q.split('&')
            .find_map(|pair| pair.strip_prefix("id=eq.").map(str::to_string))
    })
}

async fn list_rows(
    State(s): State<MockStore>,
    Path(table): Path<String>,
) -> Result<Json<Value>, StatusCode> {
    *s.list_hits.lock().await.entry(table.clone()).or_insert(0) += 1;
    if s.failing.lock().await.contains(&table) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let tables = s.tables.lock().await;
    Ok(Json(Value::Array(tables.get(&table).cloned().unwrap_or_default())))
}

async fn create_row(
    State(s): State<MockStore>,
    Path(table): Path<String>,
    Json(mut input): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    s.events.lock().await.push(format!("create:{table}"));
    if s.failing.lock().await.contains(&table) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    input["id"] = json!(Uuid::new_v4());
    input["created_at"] = json!("2026-01-05T12:00:00Z");
    s.tables.lock().await.entry(table).or_default().push(input.clone());
    Ok(Json(json!([input])))
}

async fn update_row(
    State(s): State<MockStore>,
    Path(table): Path<String>,
    RawQuery(query): RawQuery,
    Json(patch): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    if s.failing.lock().await.contains(&table) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let Some(id) = id_filter(query) else { return Ok(Json(json!([]))) };
    let mut tables = s.tables.lock().await;
    let rows = tables.entry(table).or_default();
    for row in rows.iter_mut() {
        if Some(id.as_str()) == row["id"].as_str() {
            if let (Some(row_map), Some(patch_map)) = (row.as_object_mut(), patch.as_object()) {
                for (k, v) in patch_map {
                    row_map.insert(k.clone(), v.clone());
                }
            }
            return Ok(Json(json!([row.clone()])));
        }
    }
    Ok(Json(json!([])))
}

async fn delete_row(
    State(s): State<MockStore>,
    Path(table): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Json<Value>, StatusCode> {
    if s.failing.lock().await.contains(&table) {
        return Err(StatusCode::INTERNAL_SERVER_ERROR);
    }
    let Some(id) = id_filter(query) else { return Ok(Json(json!([]))) };
    let mut tables = s.tables.lock().await;
    let rows = tables.entry(table).or_default();
    let (removed, kept): (Vec<Value>, Vec<Value>) = rows
        .drain(..)
        .partition(|row| Some(id.as_str()) == row["id"].as_str());
    *rows = kept;
    Ok(Json(Value::Array(removed)))
}

#[derive(Clone, Default)]
pub struct MockMail {
    pub bodies: Arc<Mutex<Vec<Value>>>,
    pub fail: Arc<AtomicBool>,
    pub events: EventLog,
}

impl MockMail {
    pub async fn sends(&self) -> usize {
        self.bodies.lock().await.len()
    }

    pub fn fail_sends(&self) {
        self.fail.store(true, Ordering::SeqCst);
    }
}

async fn send_email(
    State(m): State<MockMail>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, StatusCode> {
    m.events.lock().await.push("email".to_string());
    m.bodies.lock().await.push(body);
    if m.fail.load(Ordering::SeqCst) {
        return Err(StatusCode::BAD_GATEWAY);
    }
    Ok(Json(json!({"ok": true})))
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0)).await.expect("bind test listener");
    let url = format!("http://{}", listener.local_addr().expect("listener addr"));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve test app");
    });
    url
}

pub struct TestApp {
    pub base_url: String,
    pub store: MockStore,
    pub mail: MockMail,
    pub http: reqwest::Client,
}

impl TestApp {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn events(&self) -> Vec<String> {
        self.store.events.lock().await.clone()
    }
}

pub async fn spawn_app(admin_key: Option<&str>, email_configured: bool) -> TestApp {
    let events: EventLog = Arc::new(Mutex::new(vec![]));
    let store = MockStore { events: events.clone(), ..MockStore::default() };
    let mail = MockMail { events, ..MockMail::default() };

    let store_app = Router::new()
        .route(
            "/rest/v1/:table",
            get(list_rows).post(create_row).patch(update_row).delete(delete_row),
        )
        .with_state(store.clone());
    let store_url = serve(store_app).await;

    let mail_app = Router::new()
        .route("/api/v1.0/email/send", post(send_email))
        .with_state(mail.clone());
    let mail_url = serve(mail_app).await;

    let client = GatewayClient::new(store_url, "test-key");
    let sender: Option<Arc<dyn Mailer>> = if email_configured {
        Some(Arc::new(EmailJsMailer::new(EmailConfig {
            service_id: "svc_test".into(),
            template_id: "tpl_test".into(),
            public_key: "pk_test".into(),
            endpoint: mail_url,
        })))
    } else {
        None
    };
    let state = ServerState::new(client, sender, admin_key.map(str::to_string));
    let app = routes::build_router(state, CorsLayer::very_permissive());
    let base_url = serve(app).await;

    TestApp { base_url, store, mail, http: reqwest::Client::new() }
}
