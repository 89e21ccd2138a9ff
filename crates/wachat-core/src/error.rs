use thiserror::Error;

/// Top-level error type for wachat.
///
/// The link kernel itself never fails; these cover the surfaces around it.
#[derive(Debug, Error)]
pub enum WachatError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// Settings store error.
    #[error("store error: {0}")]
    Store(String),

    /// Product data handed over at the boundary was unusable.
    #[error("product error: {0}")]
    Product(String),

    /// QR code rendering error.
    #[error("qr error: {0}")]
    Qr(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
