use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::{require, Validate};

/// Status a fresh inquiry is created with.
pub const STATUS_PENDING: &str = "pending";

/// A contact-form lead as persisted by the store.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Inquiry {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct InquiryInput {
    pub name: String,
    pub email: String,
    pub message: String,
    pub status: String,
}

impl InquiryInput {
    /// Compose a fresh inquiry in the `pending` state.
    pub fn new(name: String, email: String, message: String) -> Self {
        Self { name, email, message, status: STATUS_PENDING.into() }
    }
}

impl Validate for InquiryInput {
    fn validate(&self) -> Result<(), ModelError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        if !self.email.contains('@') {
            return Err(ModelError::Validation("email must be a valid address".into()));
        }
        require("message", &self.message)?;
        Ok(())
    }
}

/// Partial update used by the admin inquiry list.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct InquiryStatus {
    pub status: String,
}

impl Validate for InquiryStatus {
    fn validate(&self) -> Result<(), ModelError> {
        require("status", &self.status)
    }
}
