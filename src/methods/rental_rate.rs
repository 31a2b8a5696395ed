pub const DP_RATE: f64 = 0.2;

/// Uang muka (DP) owed to confirm a rental: 20% of the daily rate.
/// Both the detail screen and the payment flow must call this, so the
/// displayed and the charged amount are the same f64.
pub fn uang_muka(harga_sewa_per_hari: f64) -> f64 {
    harga_sewa_per_hari * DP_RATE
}

// -------------------------------------------------------------------------
// Tests
// -------------------------------------------------------------------------
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dp_is_twenty_percent() {
        assert_eq!(uang_muka(500_000.0), 100_000.0);
        assert_eq!(uang_muka(350_000.0), 70_000.0);
        assert_eq!(uang_muka(0.0), 0.0);
    }

    #[test]
    fn dp_agrees_bit_for_bit_with_display_formula() {
        // The detail screen shows harga * 0.2; the payment flow charges
        // uang_muka(harga). Same operand precision, same bits.
        for harga in [123_456.0_f64, 99_999.99, 1.0, 275_000.0, 0.1] {
            assert_eq!(uang_muka(harga).to_bits(), (harga * 0.2).to_bits());
        }
    }
}
