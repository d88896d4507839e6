use thiserror::Error;

/// Bitcoin artifact and fee errors.
#[derive(Debug, Error)]
pub enum BtcError {
    #[error("hex decode error: {0}")]
    HexDecode(String),

    #[error("base58 decode error: {0}")]
    Base58Decode(String),

    #[error("malformed transaction: {0}")]
    MalformedTransaction(String),

    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid psbt: {0}")]
    InvalidPsbt(String),

    #[error("invalid fee rate: {0}")]
    InvalidFeeRate(String),

    #[error("invalid network: {0}")]
    InvalidNetwork(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_hex_decode() {
        let err = BtcError::HexDecode("odd number of digits".into());
        assert_eq!(err.to_string(), "hex decode error: odd number of digits");
    }

    #[test]
    fn display_base58_decode() {
        let err = BtcError::Base58Decode("invalid character '0'".into());
        assert_eq!(err.to_string(), "base58 decode error: invalid character '0'");
    }

    #[test]
    fn display_malformed_transaction() {
        let err = BtcError::MalformedTransaction("trailing bytes".into());
        assert_eq!(err.to_string(), "malformed transaction: trailing bytes");
    }

    #[test]
    fn display_invalid_public_key() {
        let err = BtcError::InvalidPublicKey("not on curve".into());
        assert_eq!(err.to_string(), "invalid public key: not on curve");
    }

    #[test]
    fn display_invalid_address() {
        let err = BtcError::InvalidAddress("bad checksum".into());
        assert_eq!(err.to_string(), "invalid address: bad checksum");
    }

    #[test]
    fn display_invalid_psbt() {
        let err = BtcError::InvalidPsbt("missing magic".into());
        assert_eq!(err.to_string(), "invalid psbt: missing magic");
    }

    #[test]
    fn display_invalid_fee_rate() {
        let err = BtcError::InvalidFeeRate("negative".into());
        assert_eq!(err.to_string(), "invalid fee rate: negative");
    }

    #[test]
    fn display_invalid_network() {
        let err = BtcError::InvalidNetwork("litecoin".into());
        assert_eq!(err.to_string(), "invalid network: litecoin");
    }

    #[test]
    fn error_trait_is_implemented() {
        let err: Box<dyn std::error::Error> = Box::new(BtcError::InvalidPsbt("test".into()));
        assert!(err.to_string().contains("test"));
    }
}
