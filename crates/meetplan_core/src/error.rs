use std::fmt;

/// Errors raised when validating an event parameter set
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    /// The participant count must be at least 1
    InvalidParticipantCount(u32),
    /// A floating-point input was NaN or infinite
    NonFiniteInput { field: &'static str, value: f64 },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidParticipantCount(count) => {
                write!(f, "participant count must be positive, got {count}")
            }
            ModelError::NonFiniteInput { field, value } => {
                write!(f, "{field} must be finite, got {value}")
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// Errors raised by the sensitivity analysis entry points
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// The requested name does not identify a sweepable parameter
    UnknownParameter(String),
    /// A perturbed clone failed model validation
    Model(ModelError),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::UnknownParameter(name) => {
                write!(f, "unknown parameter {name:?}")
            }
            AnalysisError::Model(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for AnalysisError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AnalysisError::Model(e) => Some(e),
            AnalysisError::UnknownParameter(_) => None,
        }
    }
}

impl From<ModelError> for AnalysisError {
    fn from(e: ModelError) -> Self {
        AnalysisError::Model(e)
    }
}
