pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Invalid text color {value:?}: expected #rgb or #rrggbb")]
    InvalidColor { value: String },

    #[error("Failed to encode contact URL as QR code: {message}")]
    QrEncode { message: String },

    #[error("Invalid sheet config: {message}")]
    Config { message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
