use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeatmapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid dataset: {0}")]
    Dataset(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Hour {hour} out of range (expected 0-23)")]
    HourOutOfRange { hour: u32 },

    #[error("Room {index}: {reason}")]
    InvalidRoom { index: usize, reason: String },

    #[error("Dataset contains no rooms")]
    EmptyDataset,
}

pub type Result<T> = std::result::Result<T, HeatmapError>;
