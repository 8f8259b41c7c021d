use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MailError {
    #[error("message has no Subject header")]
    MissingSubject,
    #[error("invalid Date header '{0}'")]
    InvalidDate(String),
}
