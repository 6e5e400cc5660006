//! Key agreement error types

use thiserror::Error;

/// Rejected domain or exponent parameter
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("modulus {0} is not prime")]
    ModulusNotPrime(i64),

    #[error("generator {generator} out of range: expected 1 < g < {modulus}")]
    GeneratorOutOfRange { generator: i64, modulus: i64 },

    #[error("private exponent {value} out of range: expected 0 < value < {modulus}")]
    PrivateExponentOutOfRange { value: i64, modulus: i64 },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: i64 },

    #[error("{name} = {value} exceeds the configured maximum {max}")]
    ExceedsMaximum {
        name: &'static str,
        value: i64,
        max: i64,
    },
}

/// Error class, one per failure category of the exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad construction input
    InvalidParameter,
    /// Peer value outside (0, p)
    Range,
    /// Non-positive secret installed
    State,
    /// Transform called without a key or without data
    Precondition,
    /// Two sides of the exchange disagree
    Consistency,
}

/// Key agreement error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyAgreementError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),

    #[error("Peer public value {value} out of range: expected 0 < value < {modulus}")]
    PeerValueOutOfRange { value: i64, modulus: i64 },

    #[error("Shared secret must be positive, got {0}")]
    NonPositiveSecret(i64),

    #[error("Shared key not established")]
    KeyNotEstablished,

    #[error("Input is empty")]
    EmptyInput,

    #[error("Shared secrets disagree: {first} != {second}")]
    SecretMismatch { first: i64, second: i64 },

    #[error("Decrypted message does not match the original")]
    RoundTripMismatch,
}

impl KeyAgreementError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidParameter(_) => ErrorKind::InvalidParameter,
            Self::PeerValueOutOfRange { .. } => ErrorKind::Range,
            Self::NonPositiveSecret(_) => ErrorKind::State,
            Self::KeyNotEstablished | Self::EmptyInput => ErrorKind::Precondition,
            Self::SecretMismatch { .. } | Self::RoundTripMismatch => ErrorKind::Consistency,
        }
    }
}

pub type KeyResult<T> = Result<T, KeyAgreementError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        let err: KeyAgreementError = ParameterError::ModulusNotPrime(9).into();
        assert_eq!(err.kind(), ErrorKind::InvalidParameter);
        assert_eq!(
            KeyAgreementError::PeerValueOutOfRange { value: 0, modulus: 23 }.kind(),
            ErrorKind::Range
        );
        assert_eq!(KeyAgreementError::NonPositiveSecret(-1).kind(), ErrorKind::State);
        assert_eq!(KeyAgreementError::EmptyInput.kind(), ErrorKind::Precondition);
        assert_eq!(
            KeyAgreementError::SecretMismatch { first: 1, second: 2 }.kind(),
            ErrorKind::Consistency
        );
    }

    #[test]
    fn test_messages() {
        let err: KeyAgreementError = ParameterError::GeneratorOutOfRange {
            generator: 23,
            modulus: 23,
        }
        .into();
        assert_eq!(
            err.to_string(),
            "Invalid parameter: generator 23 out of range: expected 1 < g < 23"
        );
    }
}
