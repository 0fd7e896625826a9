#[derive(Debug, thiserror::Error)]
#[error("invalid token: {0}")]
pub struct InvalidTokenError(#[from] pub jsonwebtoken::errors::Error);
