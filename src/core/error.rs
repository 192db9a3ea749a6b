use thiserror::Error;

/// Errors raised by the scoring core
///
/// Out-of-range but finite values are clamped, never reported here.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScoringError {
    #[error("Invalid input for {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },
}

impl ScoringError {
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

/// Reject NaN and infinities, pass every finite value through
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, ScoringError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ScoringError::invalid(field, format!("expected a finite number, got {}", value)))
    }
}
