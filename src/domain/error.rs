#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("malformed book record: {0:?}")]
    MalformedRecord(String),
}
