use bitcoin::consensus;
use bitcoin::Transaction;

use crate::error::BtcError;

/// Witness discount: base bytes weigh this much more than witness bytes.
const WITNESS_SCALE_FACTOR: u64 = 4;

/// Size metrics of a deserialized transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxSize {
    /// Serialized size without witness data (stripped size).
    pub base_size: u64,
    /// Serialized size including witness data.
    pub total_size: u64,
    /// `3 * base_size + total_size`.
    pub weight: u64,
    /// `ceil(weight / 4)`.
    pub vsize: u64,
}

impl TxSize {
    pub fn of(tx: &Transaction) -> Self {
        let base_size = tx.base_size() as u64;
        let total_size = tx.total_size() as u64;
        let weight = (WITNESS_SCALE_FACTOR - 1) * base_size + total_size;
        let vsize = weight.div_ceil(WITNESS_SCALE_FACTOR);
        TxSize {
            base_size,
            total_size,
            weight,
            vsize,
        }
    }
}

/// Decode a hex-encoded wire-format transaction.
///
/// Fails closed: non-hex input is `HexDecode`, and truncated fields or
/// unconsumed trailing bytes are `MalformedTransaction`.
pub fn decode_raw_transaction(raw_tx_hex: &str) -> Result<Transaction, BtcError> {
    let bytes = hex::decode(raw_tx_hex)
        .map_err(|e| BtcError::HexDecode(format!("raw transaction: {e}")))?;

    consensus::deserialize::<Transaction>(&bytes)
        .map_err(|e| BtcError::MalformedTransaction(e.to_string()))
}

/// Consensus-serialize a transaction as lowercase hex.
pub fn encode_raw_transaction(tx: &Transaction) -> String {
    hex::encode(consensus::serialize(tx))
}
