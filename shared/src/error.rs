use thiserror::Error;

/// Failure while rasterizing a DOM region into an image.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CaptureError {
    #[error("capture target is not mounted")]
    TargetMissing,
    #[error("rasterizer failed: {0}")]
    Rasterize(String),
    #[error("could not encode captured image: {0}")]
    Encode(String),
}

/// Failure in one branch of the share step. These never escape
/// `capture_and_share`; they only decide which fallback runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShareError {
    #[error("platform share is not available")]
    Unsupported,
    #[error("platform share was rejected: {0}")]
    Rejected(String),
    #[error("could not open share link: {0}")]
    Intent(String),
    #[error("download failed: {0}")]
    Download(String),
}

/// Failure while loading the embedded celebration config.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid celebration config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("celebration config has no {0}")]
    Missing(&'static str),
}

/// Failure of a browser media API (camera, audio, speech).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MediaError {
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("playback refused: {0}")]
    Playback(String),
    #[error("media API unavailable: {0}")]
    Unavailable(String),
}
