//! Small financial helpers used by the scenario builders.

/// Annuity factor of an investment: the constant yearly payment that
/// repays `capex` over `n` years at interest rate `wacc`.
///
/// # Examples
///
/// ```
/// use esm_examples::utils::annuity;
///
/// let yearly = annuity(1_000_000.0, 20, 0.05);
/// assert!((yearly - 80_242.587).abs() < 0.001);
/// ```
pub fn annuity(capex: f64, n: u32, wacc: f64) -> f64 {
    let q = (1.0 + wacc).powi(n as i32);
    capex * (wacc * q) / (q - 1.0)
}

#[cfg(test)]
mod tests {
    use super::annuity;
    use approx::assert_relative_eq;

    #[test]
    fn annuity_matches_closed_form() {
        // 1 MEUR over 20 years at 5%
        assert_relative_eq!(annuity(1_000_000.0, 20, 0.05), 80_242.587, epsilon = 1e-3);
    }

    #[test]
    fn annuity_scales_linearly_with_capex() {
        let one = annuity(200_000.0, 30, 0.05);
        let two = annuity(400_000.0, 30, 0.05);
        assert_relative_eq!(two, 2.0 * one, epsilon = 1e-9);
    }
}
