//! Per-kilobyte fee arithmetic.
//!
//! All arithmetic is integer. The per-byte rate is `ceil(rate_sat_per_kb / 1024)`
//! and the fee is `vsize * per_byte`, so the result never falls below the
//! quoted rate.

use crate::amount::btc_to_sats;
use crate::error::BtcError;

/// Bytes per kilobyte used when deriving a per-byte rate.
pub const BYTES_PER_KB: u64 = 1024;

/// Turn a node quote (BTC/kB) plus a signed sat/kB adjustment into a
/// non-negative sat/kB rate.
pub fn adjusted_rate_sat_per_kb(quote_btc_per_kb: f64, adjustment: i64) -> Result<u64, BtcError> {
    if !quote_btc_per_kb.is_finite() || quote_btc_per_kb <= 0.0 {
        return Err(BtcError::InvalidFeeRate(format!(
            "quote must be a positive amount, got {quote_btc_per_kb}"
        )));
    }

    let adjusted = btc_to_sats(quote_btc_per_kb)
        .checked_add(adjustment)
        .ok_or_else(|| BtcError::InvalidFeeRate("adjusted rate overflows".into()))?;

    u64::try_from(adjusted).map_err(|_| {
        BtcError::InvalidFeeRate(format!("adjusted rate is negative: {adjusted} sat/kB"))
    })
}

/// Per-byte rate for a per-kilobyte rate, rounded up.
pub fn sat_per_byte(rate_sat_per_kb: u64) -> u64 {
    rate_sat_per_kb.div_ceil(BYTES_PER_KB)
}

/// Fee in satoshis for a transaction of `vsize` virtual bytes.
/// `None` on overflow.
pub fn fee_for_vsize(vsize: u64, rate_sat_per_kb: u64) -> Option<u64> {
    vsize.checked_mul(sat_per_byte(rate_sat_per_kb))
}
