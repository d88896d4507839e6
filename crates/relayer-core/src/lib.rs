//! Fee estimation and artifact validation for the BTC/ETH relayer.
//!
//! - [`FeeEstimator`] turns a node fee-rate quote and a raw transaction into
//!   an absolute fee in satoshis.
//! - [`validate`] holds the boolean predicates used to vet counterparty
//!   addresses, public keys and PSBTs at the edges of the system.

pub mod config;
pub mod error;
pub mod estimator;
pub mod logging;
pub mod quote;
pub mod validate;

pub use config::RelayerConfig;
pub use error::RelayerError;
pub use estimator::{FeeEstimate, FeeEstimator};
pub use quote::{FeeQuote, FeeQuoteSource, FeeRateAdjustment, FixedFeeQuote, QuoteError};
