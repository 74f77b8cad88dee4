use thiserror::Error;

use crate::methods::StarknetMethod;

/// Coarse classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Argument count or positional type matches none of the accepted shapes.
    ShapeMismatch,
    /// A present field violates a refinement or a required field is missing.
    FieldConstraint,
    UnknownMethod,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("unknown wallet method `{0}`")]
    UnknownMethod(String),
    #[error("{method}: expected {expected} argument(s), got {actual}")]
    ArgumentCount {
        method: StarknetMethod,
        expected: String,
        actual: usize,
    },
    #[error("{method}: invalid argument at position {position}: {reason}")]
    InvalidArgument {
        method: StarknetMethod,
        position: usize,
        reason: String,
    },
    #[error("{method}: arguments match none of the accepted shapes ({})", join_attempts(.attempts))]
    NoMatchingShape {
        method: StarknetMethod,
        attempts: Vec<ValidationError>,
    },
}

fn join_attempts(attempts: &[ValidationError]) -> String {
    attempts
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub const fn kind(&self) -> ValidationErrorKind {
        match self {
            Self::UnknownMethod(_) => ValidationErrorKind::UnknownMethod,
            Self::ArgumentCount { .. } | Self::NoMatchingShape { .. } => {
                ValidationErrorKind::ShapeMismatch
            }
            Self::InvalidArgument { .. } => ValidationErrorKind::FieldConstraint,
        }
    }

    /// Method the failure belongs to, if it was recognised.
    pub const fn method(&self) -> Option<StarknetMethod> {
        match self {
            Self::UnknownMethod(_) => None,
            Self::ArgumentCount { method, .. }
            | Self::InvalidArgument { method, .. }
            | Self::NoMatchingShape { method, .. } => Some(*method),
        }
    }

    /// Position of the offending argument, if a single one can be blamed.
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::InvalidArgument { position, .. } => Some(*position),
            _ => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConnectorError {
    #[error("provider is not available, connect first")]
    ProviderUnavailable,
    #[error("invalid node url {0}")]
    InvalidNodeUrl(#[from] url::ParseError),
    #[error("provider request failed: {0}")]
    Provider(#[from] starknet::providers::ProviderError),
}
