//! Error types for rig and tween operations.

/// Errors raised by the camera rig and tween engine.
///
/// Every variant is raised before any state is touched, so the receiver is
/// left exactly as it was.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RigError {
    #[error("invalid argument `{name}`: {value} (must be a non-negative number)")]
    InvalidArgument { name: &'static str, value: f32 },

    #[error("unknown shake direction: {0:?}")]
    UnknownDirection(String),

    #[error("unknown easing curve: {0:?}")]
    UnknownEase(String),
}

pub type RigResult<T> = Result<T, RigError>;

impl RigError {
    /// Checks that a duration is a non-negative number.
    pub(crate) fn check_duration(name: &'static str, value: f32) -> RigResult<f32> {
        if value >= 0.0 {
            Ok(value)
        } else {
            Err(Self::InvalidArgument { name, value })
        }
    }
}
