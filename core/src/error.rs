use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Network request failed: {0}")]
    Network(String),
    #[error("Malformed response from trivia service: {0}")]
    MalformedResponse(String),
    #[error("Not enough to choose from, needed {required} but only {available} available")]
    InsufficientPool { required: usize, available: usize },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Board shape is not rectangular")]
    InvalidBoardShape,
}

impl GameError {
    /// Whether the error came from loading a board rather than from using one.
    pub const fn is_load_error(&self) -> bool {
        matches!(
            self,
            Self::Network(_) | Self::MalformedResponse(_) | Self::InsufficientPool { .. }
        )
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
