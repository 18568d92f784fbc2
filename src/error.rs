use crate::media::AssetId;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("Image {asset_id} could not be resolved at size \"{size}\"")]
    AssetNotFound { asset_id: AssetId, size: String },
    #[error("Error performing IO")]
    Io(#[from] std::io::Error),
    #[error("Error reading JSON")]
    Json(#[from] serde_json::Error),
    #[error("Editor setting \"{key}\" is not a string")]
    SanitizerConfig { key: String },
    #[error("Unknown missing variant policy \"{0}\", expected \"skip\" or \"warn\"")]
    InvalidPolicy(String),
}
