use std::sync::Arc;

use mailer::{Mailer, TemplateParams};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::ServiceError;

/// Newsletter signup. The blog page only asks for an email, the FAQ page
/// also takes a name, so the name is optional here.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubscribeForm {
    #[serde(default)]
    pub user_name: String,
    pub user_email: String,
}

impl SubscribeForm {
    fn validate(&self) -> Result<(), ServiceError> {
        if self.user_email.trim().is_empty() {
            return Err(ServiceError::Validation("email is required".into()));
        }
        if !self.user_email.contains('@') {
            return Err(ServiceError::Validation("email must be a valid address".into()));
        }
        Ok(())
    }
}

pub struct SubscribeService {
    mailer: Option<Arc<dyn Mailer>>,
}

impl SubscribeService {
    pub fn new(mailer: Option<Arc<dyn Mailer>>) -> Self {
        Self { mailer }
    }

    pub async fn subscribe(&self, form: SubscribeForm) -> Result<(), ServiceError> {
        form.validate()?;
        let mailer = self.mailer.as_ref().ok_or(ServiceError::NotConfigured)?;
        mailer
            .send(TemplateParams {
                user_name: form.user_name,
                user_email: form.user_email.clone(),
                message: None,
            })
            .await?;
        info!(email = %form.user_email, "newsletter subscription sent");
        Ok(())
    }
}
