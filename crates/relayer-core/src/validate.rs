//! Boundary predicates for counterparty artifacts.
//!
//! Each predicate answers `true` or `false` and nothing else. The reason a
//! candidate was rejected is logged at debug level and then dropped.

use std::fmt::Display;

use tracing::*;

pub use chain_btc::amount::{btc_to_sats, sats_to_btc};

fn collapse<T, E: Display>(kind: &'static str, result: Result<T, E>) -> bool {
    match result {
        Ok(_) => true,
        Err(err) => {
            debug!(%kind, %err, "rejected artifact");
            false
        }
    }
}

/// Hex-encoded secp256k1 public key, compressed or uncompressed.
pub fn is_valid_public_key(pubkey_hex: &str) -> bool {
    collapse("public key", chain_btc::pubkey::parse_public_key(pubkey_hex))
}

/// `0x`-prefixed 20-byte Ethereum address. Checksum casing is not enforced.
pub fn is_valid_eth_address(address: &str) -> bool {
    collapse("eth address", chain_eth::address::parse_address(address))
}

/// Base58-encoded PSBT. An empty payload is invalid.
pub fn is_valid_psbt(psbt_b58: &str) -> bool {
    collapse("psbt", chain_btc::psbt::parse_psbt_base58(psbt_b58))
}

/// Bitcoin address valid on mainnet, testnet, signet or regtest.
pub fn is_valid_btc_address(address: &str) -> bool {
    match chain_btc::address::matching_network(address) {
        Some(network) => {
            trace!(%network, "address accepted");
            true
        }
        None => {
            debug!(kind = "btc address", "rejected artifact");
            false
        }
    }
}
