use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("JSON interchange error: {0}")]
    Json(#[from] serde_json::Error),
}
