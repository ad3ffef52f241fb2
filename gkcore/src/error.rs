use thiserror::Error;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ValueError {
    /// A stored publish status code outside of the known set; this is
    /// a data integrity problem and must never be treated as visible.
    #[error("invalid publish status code: {0}")]
    InvalidStatus(i64),
    #[error("unsupported value: {0}")]
    Unsupported(String),
}
