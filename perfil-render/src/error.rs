use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to write drawing: {0}")]
    Io(#[from] std::io::Error),
}
