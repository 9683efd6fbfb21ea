use thiserror::Error;

#[derive(Debug, Error)]
pub enum CubeError {
    #[error("a cube needs exactly {expected} face labels, got {found}")]
    FaceCount { expected: usize, found: usize },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    #[error("failed to parse config: {0}")]
    Config(#[from] toml::de::Error),
    #[error("element not found: #{0}")]
    MissingElement(String),
    #[error("DOM operation failed: {0}")]
    Dom(String),
}
