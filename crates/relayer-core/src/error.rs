use chain_btc::error::BtcError;
use thiserror::Error;

use crate::quote::QuoteError;

#[derive(Debug, Error)]
pub enum RelayerError {
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Malformed transaction: {0}")]
    MalformedTransaction(String),

    #[error("Fee quote unavailable: {0}")]
    FeeQuoteUnavailable(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl From<BtcError> for RelayerError {
    fn from(e: BtcError) -> Self {
        match e {
            BtcError::MalformedTransaction(msg) => RelayerError::MalformedTransaction(msg),
            BtcError::InvalidFeeRate(msg) => RelayerError::FeeQuoteUnavailable(msg),
            other => RelayerError::Decode(other.to_string()),
        }
    }
}

impl From<QuoteError> for RelayerError {
    fn from(e: QuoteError) -> Self {
        RelayerError::FeeQuoteUnavailable(e.to_string())
    }
}
