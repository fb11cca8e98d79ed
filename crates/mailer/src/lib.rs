//! Transactional email client.
//!
//! Contact inquiries and newsletter signups go out through a hosted
//! template-email provider; the template variable names (`user_name`,
//! `user_email`, `message`) must match what the provider has configured.

pub mod emailjs;
pub mod errors;

pub use emailjs::{EmailJsMailer, Mailer, TemplateParams};
pub use errors::MailerError;
