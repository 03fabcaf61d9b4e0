//! Error type shared by every long shadow operation.

use thiserror::Error;

/// Failure raised before any shadow layer is produced.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LongShadowError {
    /// Token is neither a direction keyword nor an angle.
    #[error("unrecognized direction: {0:?}")]
    UnrecognizedDirection(String),

    #[error("angle must be finite, got {0}")]
    InvalidAngle(f32),

    #[error("invalid length: {0:?}")]
    InvalidLength(String),

    #[error("length must be positive and finite, got {0}")]
    NonPositiveLength(f32),

    #[error("layer count must be at least 1")]
    ZeroLayerCount,

    #[error("layer count {count} exceeds the maximum of {max}")]
    LayerCountTooLarge { count: usize, max: usize },

    #[error("invalid color: {0:?}")]
    InvalidColor(String),
}

pub type Result<T> = std::result::Result<T, LongShadowError>;
