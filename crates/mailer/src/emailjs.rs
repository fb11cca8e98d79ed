use async_trait::async_trait;
use configs::EmailConfig;
use serde::Serialize;

use crate::errors::MailerError;

/// Values substituted into the provider-side template. Field names are the
/// template's variable names, not ours to rename.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct TemplateParams {
    pub user_name: String,
    pub user_email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// One send attempt; failures are terminal for the triggering action.
    async fn send(&self, params: TemplateParams) -> Result<(), MailerError>;
}

/// EmailJS-style REST sender: service id + template id + public key posted
/// alongside the template params.
pub struct EmailJsMailer {
    http: reqwest::Client,
    config: EmailConfig,
}

impl EmailJsMailer {
    pub fn new(config: EmailConfig) -> Self {
        Self { http: reqwest::Client::new(), config }
    }
}

#[derive(Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a TemplateParams,
}

#[async_trait]
impl Mailer for EmailJsMailer {
    async fn send(&self, params: TemplateParams) -> Result<(), MailerError> {
        let url = format!("{}/api/v1.0/email/send", self.config.endpoint.trim_end_matches('/'));
        let body = SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            template_params: &params,
        };
        let resp = self
            .http
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(|e| MailerError::Network(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(MailerError::Status(status.as_u16()));
        }
        Ok(())
    }
}
