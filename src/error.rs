use thiserror::Error;

/// Everything that can go wrong between the caller and the engine.
///
/// Engine status codes are opaque: the engine owns their meaning, so
/// `Engine` carries the code verbatim and nothing here interprets it.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("model file I/O failed")]
    Io(#[from] std::io::Error),

    #[error("engine exited with status {code}")]
    Engine { code: i32 },

    #[error("malformed engine output: row {row} has {found} fields, header has {expected}")]
    MalformedOutput {
        row: usize,
        expected: usize,
        found: usize,
    },
}

impl BridgeError {
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        BridgeError::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Exit status the hosting process should report for this error.
    /// Engine status codes pass through unchanged; everything else is 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            BridgeError::Engine { code } => *code,
            _ => 1,
        }
    }
}
