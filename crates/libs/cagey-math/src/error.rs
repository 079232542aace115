//! Error types.

/// Error returned when parsing an [`Angle`](crate::Angle) from a string such
/// as `"45 deg"` or `"0.5rad"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseAngleError {
    /// The string has no trailing unit.
    #[error("no unit found in angle string '{0}'")]
    MissingUnit(String),
    /// The numeric part could not be parsed.
    #[error("invalid angle value '{0}'")]
    InvalidValue(String),
    /// The unit is neither degrees nor radians.
    #[error("unknown angle unit '{0}'")]
    UnknownUnit(String),
}
