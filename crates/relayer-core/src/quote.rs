//! Node fee-quote collaborator.
//!
//! The transport to the Bitcoin node lives outside this crate. What lives here
//! is the contract a transport must satisfy ([`FeeQuoteSource`]) and the
//! serde models of the `estimatesmartfee` JSON-RPC exchange.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Confirmation target, in blocks, requested from the node.
pub const DEFAULT_CONF_TARGET: u16 = 2;

#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("node error: {0}")]
    Node(String),

    #[error("unusable fee rate: {0}")]
    Unusable(String),
}

/// Fee rate in whole BTC per kilobyte. Always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeQuote(f64);

impl FeeQuote {
    pub fn new(btc_per_kb: f64) -> Result<Self, QuoteError> {
        if btc_per_kb.is_finite() && btc_per_kb > 0.0 {
            Ok(FeeQuote(btc_per_kb))
        } else {
            Err(QuoteError::Unusable(format!("{btc_per_kb} BTC/kB")))
        }
    }

    pub fn btc_per_kb(self) -> f64 {
        self.0
    }
}

/// Signed sat/kB offset applied to a quote to absorb node estimation error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeeRateAdjustment(pub i64);

/// Source of fee-rate quotes, typically a bitcoind RPC client.
///
/// Calls block until the collaborator answers or its own timeout fires.
pub trait FeeQuoteSource {
    fn fee_rate(&self, wallet_id: &str) -> Result<FeeQuote, QuoteError>;
}

impl<T: FeeQuoteSource + ?Sized> FeeQuoteSource for &T {
    fn fee_rate(&self, wallet_id: &str) -> Result<FeeQuote, QuoteError> {
        (**self).fee_rate(wallet_id)
    }
}

/// A source that always answers with the same quote.
#[derive(Debug, Clone, Copy)]
pub struct FixedFeeQuote(pub FeeQuote);

impl FeeQuoteSource for FixedFeeQuote {
    fn fee_rate(&self, _wallet_id: &str) -> Result<FeeQuote, QuoteError> {
        Ok(self.0)
    }
}

/// JSON-RPC request body for `estimatesmartfee`.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateSmartFeeRequest {
    pub jsonrpc: &'static str,
    pub id: String,
    pub method: &'static str,
    pub params: [u16; 1],
}

impl EstimateSmartFeeRequest {
    pub fn new(id: impl Into<String>, conf_target: u16) -> Self {
        EstimateSmartFeeRequest {
            jsonrpc: "1.0",
            id: id.into(),
            method: "estimatesmartfee",
            params: [conf_target],
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EstimateSmartFeeResult {
    pub feerate: Option<f64>,
    #[serde(default)]
    pub errors: Vec<String>,
    pub blocks: Option<u32>,
}

/// JSON-RPC reply envelope for `estimatesmartfee`.
#[derive(Debug, Clone, Deserialize)]
pub struct EstimateSmartFeeResponse {
    pub result: Option<EstimateSmartFeeResult>,
    pub error: Option<RpcError>,
}

impl EstimateSmartFeeResponse {
    pub fn from_json(body: &str) -> Result<Self, QuoteError> {
        serde_json::from_str(body).map_err(|e| QuoteError::Transport(format!("bad reply: {e}")))
    }

    /// Extract the quote, turning RPC errors and estimator errors into
    /// [`QuoteError`].
    pub fn into_quote(self) -> Result<FeeQuote, QuoteError> {
        if let Some(err) = self.error {
            return Err(QuoteError::Node(format!("{} (code {})", err.message, err.code)));
        }

        let result = self
            .result
            .ok_or_else(|| QuoteError::Node("reply has neither result nor error".into()))?;

        match result.feerate {
            Some(rate) => FeeQuote::new(rate),
            None if result.errors.is_empty() => {
                Err(QuoteError::Node("no fee rate in reply".into()))
            }
            None => Err(QuoteError::Node(result.errors.join("; "))),
        }
    }
}
