use bitcoin::address::{Address, NetworkUnchecked};

use crate::error::BtcError;
use crate::network::BtcNetwork;

fn parse_unchecked(address: &str) -> Result<Address<NetworkUnchecked>, BtcError> {
    address
        .parse::<Address<NetworkUnchecked>>()
        .map_err(|e| BtcError::InvalidAddress(format!("failed to parse address: {e}")))
}

/// Validate a Bitcoin address string for a single network.
///
/// Supports P2PKH, P2SH, P2WPKH, P2WSH, and P2TR address formats.
/// Returns `Err` if the string is not an address at all, `Ok(false)` if it is
/// a well-formed address for a different network.
pub fn validate_address(address: &str, network: BtcNetwork) -> Result<bool, BtcError> {
    let parsed = parse_unchecked(address)?;
    Ok(parsed.is_valid_for_network(network.to_bitcoin_network()))
}

/// Return the first network, in [`BtcNetwork::ALL`] order, that accepts the
/// address. Testnet and signet share encodings, so a signet address reports
/// as testnet.
pub fn matching_network(address: &str) -> Option<BtcNetwork> {
    let parsed = parse_unchecked(address).ok()?;
    BtcNetwork::ALL
        .into_iter()
        .find(|net| parsed.is_valid_for_network(net.to_bitcoin_network()))
}
