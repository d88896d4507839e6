/// Satoshis in one bitcoin.
pub const SATS_PER_BTC: i64 = 100_000_000;

/// Convert a whole-coin amount, as reported by external systems, to satoshis.
///
/// Rounds to the nearest satoshi so that values such as `0.00012345` do not
/// lose a unit to binary floating point.
pub fn btc_to_sats(btc: f64) -> i64 {
    (btc * SATS_PER_BTC as f64).round() as i64
}

/// Convert satoshis to a whole-coin amount. Display only.
pub fn sats_to_btc(sats: i64) -> f64 {
    sats as f64 / SATS_PER_BTC as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_values() {
        assert_eq!(btc_to_sats(0.0), 0);
        assert_eq!(btc_to_sats(1.0), SATS_PER_BTC);
        assert_eq!(btc_to_sats(0.0001), 10_000);
        assert_eq!(btc_to_sats(0.00012345), 12_345);
        assert_eq!(btc_to_sats(-0.5), -50_000_000);
        assert_eq!(sats_to_btc(150_000_000), 1.5);
    }

    #[test]
    fn representative_values_survive_conversion() {
        for btc in [0.0, 1.0, 0.00012345, 21_000_000.0] {
            let back = sats_to_btc(btc_to_sats(btc));
            assert!((back - btc).abs() < 1e-9, "{btc} came back as {back}");
        }
    }

    proptest! {
        #[test]
        fn sats_survive_conversion(sats in -100_000_000_000_000i64..=100_000_000_000_000i64) {
            prop_assert_eq!(btc_to_sats(sats_to_btc(sats)), sats);
        }
    }
}
