use std::f64::consts::PI;

use crate::error::ImpliedVolError;

/// Implied volatility of an at-the-money option under the normal (Bachelier)
/// model, inverted algebraically from the ATM price formula.
/// See https://en.wikipedia.org/wiki/Bachelier_model
///
/// The interest rate is accepted for interface symmetry with the Newton
/// solver; the ATM normal-model price in this form does not depend on it.
pub fn bachelier_implied_vol_atm(
    option_price: f64,
    asset_price: f64,
    time_to_expiration: f64,
    _interest_rate: f64,
) -> Result<f64, ImpliedVolError> {
    check_positive("option_price", option_price)?;
    check_positive("asset_price", asset_price)?;
    check_positive("time_to_expiration", time_to_expiration)?;

    Ok(option_price * (2.0 * PI).sqrt() / (asset_price * time_to_expiration.sqrt()))
}

fn check_positive(name: &'static str, value: f64) -> Result<(), ImpliedVolError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ImpliedVolError::InvalidArgument { name, value })
    }
}
