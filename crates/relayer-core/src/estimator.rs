use chain_btc::amount::sats_to_btc;
use chain_btc::fee::{adjusted_rate_sat_per_kb, fee_for_vsize};
use chain_btc::transaction::{decode_raw_transaction, TxSize};
use tracing::*;

use crate::error::RelayerError;
use crate::quote::{FeeQuoteSource, FeeRateAdjustment};

/// Outcome of a fee estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeeEstimate {
    /// Absolute fee in satoshis.
    pub fee_sat: u64,
    /// Adjusted rate the fee was computed from, in sat/kB.
    pub rate_sat_per_kb: u64,
    pub size: TxSize,
}

/// Computes absolute fees for raw transactions from node fee-rate quotes.
///
/// Holds no state besides the quote source; wallet and adjustment are passed
/// per call.
#[derive(Debug)]
pub struct FeeEstimator<S> {
    source: S,
}

impl<S: FeeQuoteSource> FeeEstimator<S> {
    pub fn new(source: S) -> Self {
        FeeEstimator { source }
    }

    /// Estimate the fee for `raw_tx_hex` at the rate the node quotes for
    /// `wallet_id`, shifted by `adjustment`.
    ///
    /// The transaction is decoded before the node is asked, so malformed
    /// input never costs a quote request. Quote failures are returned as-is,
    /// with no retry and no fallback rate.
    pub fn estimate_fee(
        &self,
        wallet_id: &str,
        raw_tx_hex: &str,
        adjustment: FeeRateAdjustment,
    ) -> Result<FeeEstimate, RelayerError> {
        let tx = decode_raw_transaction(raw_tx_hex)?;
        let size = TxSize::of(&tx);

        let quote = self.source.fee_rate(wallet_id).map_err(|err| {
            warn!(%wallet_id, %err, "fee quote request failed");
            RelayerError::from(err)
        })?;

        let rate_sat_per_kb = adjusted_rate_sat_per_kb(quote.btc_per_kb(), adjustment.0)?;
        debug!(
            %wallet_id,
            quote_btc_per_kb = quote.btc_per_kb(),
            adjustment = adjustment.0,
            %rate_sat_per_kb,
            "resolved fee rate"
        );

        let fee_sat = fee_for_vsize(size.vsize, rate_sat_per_kb).ok_or_else(|| {
            RelayerError::FeeQuoteUnavailable(format!(
                "fee overflows for vsize {} at {rate_sat_per_kb} sat/kB",
                size.vsize
            ))
        })?;

        info!(
            txid = %tx.compute_txid(),
            weight = size.weight,
            vsize = size.vsize,
            %fee_sat,
            fee_btc = sats_to_btc(fee_sat as i64),
            "estimated transaction fee"
        );

        Ok(FeeEstimate {
            fee_sat,
            rate_sat_per_kb,
            size,
        })
    }
}
