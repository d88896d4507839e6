//! Ethereum support for the relayer.
//!
//! Counterparty address parsing and EIP-55 display normalisation.

pub mod address;
pub mod error;
