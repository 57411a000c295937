use thiserror::Error;

#[derive(Debug, Error)]
pub enum SignatureError {
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}
