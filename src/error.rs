use thiserror::Error;

#[derive(Error, Debug)]
pub enum OgTagsError {
    #[error("unknown meta key: {0}")]
    UnknownKey(String),
    #[error("unsupported meta value: {0}, expected a string or a non-negative number")]
    UnsupportedValue(String),
    #[error("unsupported video format: {0}, only mp4 is allowed")]
    UnsupportedVideoFormat(String),
}
