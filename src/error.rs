use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Errors raised by ledger operations.
///
/// Every variant is recoverable. An operation that returns one of these
/// has left the ledger exactly as it found it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    /// Bulk-load payload or argument is malformed.
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    /// Address has no entry where one is required.
    #[error("unknown address: {address}")]
    UnknownAddress { address: String },

    /// Numeric argument outside its accepted range.
    #[error("{field} out of range: {value}")]
    InvalidRange { field: &'static str, value: f64 },

    /// Preference weights for the address sum to zero.
    #[error("preference weights for {address} sum to zero")]
    ZeroTotalWeight { address: String },

    /// No preference contributes to the requested pair.
    #[error("pair not found: {pair}")]
    PairNotFound { pair: String },

    /// Total incentive for the pair is zero, so shares are undefined.
    #[error("total incentive for {pair} is zero")]
    DivisionUndefined { pair: String },
}

impl LedgerError {
    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    pub(crate) fn unknown_address(address: impl Into<String>) -> Self {
        Self::UnknownAddress {
            address: address.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ledger_error_messages_name_the_subject() {
        let err = LedgerError::unknown_address("0xabc");
        assert_eq!(err.to_string(), "unknown address: 0xabc");

        let err = LedgerError::InvalidRange {
            field: "stake_fraction",
            value: 1.5,
        };
        assert_eq!(err.to_string(), "stake_fraction out of range: 1.5");
    }

    #[test]
    fn ledger_error_converts_into_crate_error() {
        let err: Error = LedgerError::PairNotFound {
            pair: "X-Y".into(),
        }
        .into();
        assert!(matches!(
            err,
            Error::Ledger(LedgerError::PairNotFound { .. })
        ));
        assert_eq!(err.to_string(), "pair not found: X-Y");
    }
}
