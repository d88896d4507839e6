use thiserror::Error;

/// Ethereum address errors.
#[derive(Debug, Error)]
pub enum EthError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_address() {
        let err = EthError::InvalidAddress("bad length".into());
        assert_eq!(err.to_string(), "invalid address: bad length");
    }

    #[test]
    fn debug_format_works() {
        let err = EthError::InvalidAddress("x".into());
        assert!(format!("{:?}", err).contains("InvalidAddress"));
    }
}
