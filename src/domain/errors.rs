use thiserror::Error;

/// Faults raised while scoring a single idea.
///
/// These never escape the scorer: they are folded into
/// [`Assessment::Degraded`](crate::domain::feasibility::Assessment).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssessmentError {
    #[error("Invalid input {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Invalid market snapshot: {reason}")]
    InvalidSnapshot { reason: String },

    #[error("Computation fault: {reason}")]
    Computation { reason: String },
}

impl AssessmentError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Errors reported by external collaborators (idea generation, market data, news)
#[derive(Debug, Error)]
pub enum CollaboratorError {
    #[error("Missing credentials for {provider}")]
    MissingCredentials { provider: String },

    #[error("{provider} rate limit exceeded")]
    RateLimited { provider: String },

    #[error("{provider} returned HTTP {status}")]
    HttpStatus { provider: String, status: u16 },

    #[error("{provider} request failed: {reason}")]
    Transport { provider: String, reason: String },

    #[error("{provider} returned no usable data: {reason}")]
    EmptyResponse { provider: String, reason: String },

    #[error("Failed to decode {provider} response: {reason}")]
    Decode { provider: String, reason: String },
}

/// Errors related to configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },

    #[error("Feature weights must sum to 1.0, got {sum:.4}")]
    WeightSum { sum: f64 },

    #[error("Failed to read keyword rules from {path}: {reason}")]
    KeywordRules { path: String, reason: String },
}
