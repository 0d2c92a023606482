use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("provider list is not a JSON array of records: {0}")]
    Malformed(#[from] serde_json::Error),
}
