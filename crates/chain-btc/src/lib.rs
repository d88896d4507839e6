//! Bitcoin support for the relayer.
//!
//! Provides network parameter sets, address / public key / PSBT validation,
//! raw transaction decoding with weight and vsize metrics, and the integer
//! fee arithmetic used by the fee estimator.

pub mod address;
pub mod amount;
pub mod error;
pub mod fee;
pub mod network;
pub mod psbt;
pub mod pubkey;
pub mod transaction;
