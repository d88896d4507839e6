use k256::elliptic_curve::sec1::FromEncodedPoint;
use k256::{EncodedPoint, PublicKey};

use crate::error::BtcError;

/// Length of a SEC1 compressed secp256k1 public key.
pub const COMPRESSED_LEN: usize = 33;

/// Length of a SEC1 uncompressed secp256k1 public key.
pub const UNCOMPRESSED_LEN: usize = 65;

/// Parse a hex-encoded secp256k1 public key.
///
/// Accepts 33-byte compressed (`02`/`03`) and 65-byte uncompressed (`04`)
/// SEC1 encodings. The point must lie on the curve.
pub fn parse_public_key(pubkey_hex: &str) -> Result<PublicKey, BtcError> {
    let bytes =
        hex::decode(pubkey_hex).map_err(|e| BtcError::HexDecode(format!("public key: {e}")))?;

    match (bytes.first(), bytes.len()) {
        (Some(0x02 | 0x03), COMPRESSED_LEN) | (Some(0x04), UNCOMPRESSED_LEN) => {}
        (Some(prefix), len) => {
            return Err(BtcError::InvalidPublicKey(format!(
                "prefix {prefix:#04x} with {len} bytes is neither compressed nor uncompressed"
            )))
        }
        (None, _) => return Err(BtcError::InvalidPublicKey("empty key".into())),
    }

    let encoded = EncodedPoint::from_bytes(&bytes)
        .map_err(|e| BtcError::InvalidPublicKey(format!("invalid SEC1 encoding: {e}")))?;

    let pubkey: Option<PublicKey> = PublicKey::from_encoded_point(&encoded).into();
    pubkey.ok_or_else(|| BtcError::InvalidPublicKey("point is not on the secp256k1 curve".into()))
}
