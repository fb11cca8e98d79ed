use std::sync::Arc;

use gateway::RecordStore;
use mailer::{Mailer, TemplateParams};
use models::inquiry::{Inquiry, InquiryInput};
use models::Validate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::ServiceError;

/// Contact form fields, named after the email template variables.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContactForm {
    pub user_name: String,
    pub user_email: String,
    pub message: String,
}

/// Handles a contact submission: notify the team by email, then record the
/// inquiry as a lead in the store.
pub struct ContactService {
    mailer: Option<Arc<dyn Mailer>>,
    inquiries: Arc<dyn RecordStore<Inquiry, InquiryInput>>,
}

impl ContactService {
    pub fn new(
        mailer: Option<Arc<dyn Mailer>>,
        inquiries: Arc<dyn RecordStore<Inquiry, InquiryInput>>,
    ) -> Self {
        Self { mailer, inquiries }
    }

    /// The email goes out first; the inquiry row is only written once the
    /// notification succeeded. A failed send leaves the store untouched and
    /// the caller keeps the form input for a manual retry.
    pub async fn submit(&self, form: ContactForm) -> Result<Inquiry, ServiceError> {
        let input = InquiryInput::new(form.user_name, form.user_email, form.message);
        input.validate()?;

        let mailer = self.mailer.as_ref().ok_or(ServiceError::NotConfigured)?;
        mailer
            .send(TemplateParams {
                user_name: input.name.clone(),
                user_email: input.email.clone(),
                message: Some(input.message.clone()),
            })
            .await?;

        let saved = self.inquiries.create(input).await?;
        info!(inquiry = %saved.id, "contact inquiry recorded");
        Ok(saved)
    }
}
