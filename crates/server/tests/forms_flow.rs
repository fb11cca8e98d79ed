mod support;

use reqwest::StatusCode;
use serde_json::{json, Value};

use support::spawn_app;

#[tokio::test]
async fn contact_sends_email_then_records_the_inquiry() -> anyhow::Result<()> {
    let app = spawn_app(None, true).await;

    let res = app
        .http
        .post(app.url("/api/contact"))
        .json(&json!({"user_name": "Jane", "user_email": "jane@x.com", "message": "Hello"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body["ok"], true);

    // exactly one send then one create, in that order
    assert_eq!(app.events().await, vec!["email", "create:inquiries"]);
    assert_eq!(app.mail.sends().await, 1);
    assert_eq!(app.store.creates("inquiries").await, 1);

    // the template got the provider's variable names and the lead is pending
    let bodies = app.mail.bodies.lock().await;
    assert_eq!(bodies[0]["template_params"]["user_name"], "Jane");
    assert_eq!(bodies[0]["template_params"]["user_email"], "jane@x.com");
    assert_eq!(bodies[0]["template_params"]["message"], "Hello");
    drop(bodies);
    let rows = app.store.rows("inquiries").await;
    assert_eq!(rows[0]["status"], "pending");
    Ok(())
}

#[tokio::test]
async fn failed_email_send_blocks_the_inquiry_create() -> anyhow::Result<()> {
    let app = spawn_app(None, true).await;
    app.mail.fail_sends();

    let res = app
        .http
        .post(app.url("/api/contact"))
        .json(&json!({"user_name": "Jane", "user_email": "jane@x.com", "message": "Hello"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_GATEWAY);
    let body: Value = res.json().await?;
    assert_eq!(body["retryable"], true);

    assert_eq!(app.events().await, vec!["email"]);
    assert_eq!(app.store.creates("inquiries").await, 0);
    Ok(())
}

#[tokio::test]
async fn blank_contact_field_dispatches_nothing() -> anyhow::Result<()> {
    let app = spawn_app(None, true).await;

    let res = app
        .http
        .post(app.url("/api/contact"))
        .json(&json!({"user_name": "Jane", "user_email": "jane@x.com", "message": ""}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(app.events().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn unconfigured_email_service_blocks_contact_before_dispatch() -> anyhow::Result<()> {
    let app = spawn_app(None, false).await;

    let res = app
        .http
        .post(app.url("/api/contact"))
        .json(&json!({"user_name": "Jane", "user_email": "jane@x.com", "message": "Hello"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: Value = res.json().await?;
    assert_eq!(body["error"], "Email service is not configured");
    assert!(app.events().await.is_empty());
    Ok(())
}

#[tokio::test]
async fn subscribe_sends_one_email_without_a_message_param() -> anyhow::Result<()> {
    let app = spawn_app(None, true).await;

    let res = app
        .http
        .post(app.url("/api/subscribe"))
        .json(&json!({"user_name": "Jane", "user_email": "jane@x.com"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    assert_eq!(app.mail.sends().await, 1);
    let bodies = app.mail.bodies.lock().await;
    assert_eq!(bodies[0]["template_params"]["user_email"], "jane@x.com");
    assert!(bodies[0]["template_params"].get("message").is_none());
    // no store write for a subscription
    drop(bodies);
    assert_eq!(app.events().await, vec!["email"]);
    Ok(())
}

#[tokio::test]
async fn subscribe_rejects_an_invalid_email_without_dispatch() -> anyhow::Result<()> {
    let app = spawn_app(None, true).await;

    let res = app
        .http
        .post(app.url("/api/subscribe"))
        .json(&json!({"user_email": "not-an-address"}))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(app.mail.sends().await, 0);
    Ok(())
}
