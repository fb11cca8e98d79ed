use thiserror::Error;

#[derive(Debug, Error)]
pub enum MailerError {
    #[error("network error: {0}")]
    Network(String),
    #[error("email provider returned status {0}")]
    Status(u16),
}
