use thiserror::Error;

pub const INVALID_LINK_MESSAGE: &str = "Please enter a valid YouTube playlist link.";
pub const TRANSPORT_MESSAGE: &str = "Something went wrong. Please try again.";

/// Why a calculation produced no duration.
///
/// The `Display` text of every variant is what the user sees. None of them
/// are retried automatically.
#[derive(Error, Debug)]
pub enum CalcError {
    /// Input was rejected locally, no request was made.
    #[error("{}", INVALID_LINK_MESSAGE)]
    Validation,

    /// The lookup service answered with its own message.
    #[error("{0}")]
    Service(String),

    /// The request failed or the answer had an unexpected shape.
    #[error("{}", TRANSPORT_MESSAGE)]
    Transport(#[source] anyhow::Error),
}

impl CalcError {
    pub fn kind(&self) -> &'static str {
        match self {
            CalcError::Validation => "validation",
            CalcError::Service(_) => "service",
            CalcError::Transport(_) => "transport",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpeedError {
    #[error("Playback speed {0} is outside 1.00x..2.00x")]
    OutOfRange(f64),

    #[error("Invalid playback speed '{0}'")]
    Invalid(String),
}
