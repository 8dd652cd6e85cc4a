#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("book not found: {0}")]
    BookNotFound(String),

    #[error("storage error: {0}")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}
