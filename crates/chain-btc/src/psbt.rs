use bitcoin::Psbt;

use crate::error::BtcError;

/// Parse a base58-encoded PSBT (raw base58, no checksum).
///
/// An empty decode is rejected rather than treated as an empty container.
pub fn parse_psbt_base58(psbt_b58: &str) -> Result<Psbt, BtcError> {
    let bytes = bs58::decode(psbt_b58)
        .into_vec()
        .map_err(|e| BtcError::Base58Decode(format!("psbt: {e}")))?;

    if bytes.is_empty() {
        return Err(BtcError::InvalidPsbt("empty payload".into()));
    }

    Psbt::deserialize(&bytes).map_err(|e| BtcError::InvalidPsbt(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitcoin::absolute::LockTime;
    use bitcoin::hashes::Hash;
    use bitcoin::transaction::Version;
    use bitcoin::{Amount, OutPoint, ScriptBuf, Sequence, Transaction, TxIn, TxOut, Txid, Witness};

    fn fixture_bytes() -> Vec<u8> {
        let tx = Transaction {
            version: Version::TWO,
            lock_time: LockTime::ZERO,
            input: vec![TxIn {
                previous_output: OutPoint::new(Txid::from_byte_array([0x11; 32]), 0),
                script_sig: ScriptBuf::new(),
                sequence: Sequence::ENABLE_RBF_NO_LOCKTIME,
                witness: Witness::default(),
            }],
            output: vec![TxOut {
                value: Amount::from_sat(50_000),
                script_pubkey: ScriptBuf::from_hex(&format!("0014{}", "22".repeat(20))).unwrap(),
            }],
        };
        Psbt::from_unsigned_tx(tx).unwrap().serialize()
    }

    fn accepts(psbt_b58: &str) -> bool {
        parse_psbt_base58(psbt_b58).is_ok()
    }

    #[test]
    fn well_formed_psbt_is_valid() {
        let encoded = bs58::encode(fixture_bytes()).into_string();
        assert!(accepts(&encoded));
        let psbt = parse_psbt_base58(&encoded).unwrap();
        assert_eq!(psbt.unsigned_tx.input.len(), 1);
        assert_eq!(psbt.inputs.len(), 1);
        assert_eq!(psbt.outputs.len(), 1);
    }

    #[test]
    fn empty_string_is_invalid() {
        assert!(!accepts(""));
        assert!(matches!(parse_psbt_base58(""), Err(BtcError::InvalidPsbt(_))));
    }

    #[test]
    fn flipped_magic_byte_is_invalid() {
        let mut bytes = fixture_bytes();
        bytes[0] ^= 0x01;
        assert!(!accepts(&bs58::encode(bytes).into_string()));
    }

    #[test]
    fn truncated_payload_is_invalid() {
        let bytes = fixture_bytes();
        let truncated = &bytes[..bytes.len() - 1];
        assert!(!accepts(&bs58::encode(truncated).into_string()));
    }

    #[test]
    fn non_base58_characters_are_invalid() {
        // '0', 'O', 'I' and 'l' are outside the base58 alphabet.
        assert!(matches!(
            parse_psbt_base58("0OIl"),
            Err(BtcError::Base58Decode(_))
        ));
    }

    #[test]
    fn base64_psbt_is_not_accepted() {
        let b64_prefix = "cHNidP8BAHECAAAAAQ";
        assert!(!accepts(b64_prefix));
    }
}
