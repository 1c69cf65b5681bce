use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("container not found: `{container_id}`")]
    ContainerNotFound { container_id: String },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error("rendering engine failure: {0}")]
    Engine(String),
}
