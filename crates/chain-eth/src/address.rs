use alloy_primitives::Address;

use crate::error::EthError;

/// Hex digits in a 20-byte address.
const ADDRESS_HEX_LEN: usize = 40;

/// Parse a `0x`-prefixed 20-byte hex address.
///
/// Casing is not checked against EIP-55: all-lower, all-upper and mixed case
/// are accepted as long as every digit is hex.
pub fn parse_address(address: &str) -> Result<Address, EthError> {
    let hex_part = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| EthError::InvalidAddress("address must start with 0x".into()))?;

    if hex_part.len() != ADDRESS_HEX_LEN {
        return Err(EthError::InvalidAddress(format!(
            "expected {ADDRESS_HEX_LEN} hex characters, got {}",
            hex_part.len()
        )));
    }

    let mut bytes = [0u8; 20];
    hex::decode_to_slice(hex_part, &mut bytes)
        .map_err(|e| EthError::InvalidAddress(format!("address contains non-hex characters: {e}")))?;

    Ok(Address::new(bytes))
}

/// Normalize an address to its EIP-55 mixed-case form.
pub fn to_checksummed(address: &str) -> Result<String, EthError> {
    Ok(parse_address(address)?.to_checksum(None))
}
