//! Rendering errors

/// Everything that can stop a disk from being rendered.
///
/// Geometry inputs other than the tooth count are clamped rather than
/// rejected, so [`EncoderError::InvalidParameter`] is the only geometric failure.
#[derive(Debug, thiserror::Error)]
pub enum EncoderError {
    /// (InvalidParameter) A parameter cannot be normalized into valid geometry
    #[error("(InvalidParameter) `{name}` {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    /// The JSON configuration text could not be parsed
    #[error("(Config) could not parse render configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl EncoderError {
    /// Shorthand for the tooth count rejection, shared by every entry point.
    pub(crate) fn tooth_count(found: impl std::fmt::Display) -> Self {
        EncoderError::InvalidParameter {
            name: "n",
            reason: format!("must be an integer >= 1, got {found}"),
        }
    }
}
