use crate::error::ImpliedVolError;
use pricing::analytic::{price, BlackScholesMerton, OptionPrice};
use pricing::common::models::{DerivativeParameter, OptionType};

/// A Newton step below this vega magnitude is numerically unstable.
const VEGA_FLOOR: f64 = 1e-12;
/// Non-positive volatility estimates are clamped back to this floor,
/// keeping the iteration inside the monotonic region of the price.
const VOLA_FLOOR: f64 = 1e-8;

pub struct SolverSettings {
    pub initial_guess: f64,
    pub tolerance: f64,
    pub max_iterations: usize,
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            initial_guess: 0.2,
            tolerance: 1e-8,
            max_iterations: 100,
        }
    }
}

/// The volatility for which the Black-Scholes-Merton price matches the given
/// market price, found by Newton-Raphson iteration on the vola.
/// See https://en.wikipedia.org/wiki/Implied_volatility
pub fn implied_volatility(
    option_type: OptionType,
    market_price: f64,
    rfr: f64,
    time_to_expiration: f64,
    strike: f64,
    asset_price: f64,
    dividend_yield: f64,
    settings: &SolverSettings,
) -> Result<f64, ImpliedVolError> {
    let mut vola = settings.initial_guess;

    for _ in 0..settings.max_iterations {
        let dp = DerivativeParameter::with_dividend_yield(
            asset_price,
            strike,
            time_to_expiration,
            rfr,
            vola,
            dividend_yield,
        );
        let price_diff = price(option_type, &dp) - market_price;
        if price_diff.abs() < settings.tolerance {
            return Ok(vola);
        }

        let vega = BlackScholesMerton::vega(&dp);
        if vega.abs() < VEGA_FLOOR {
            return Err(ImpliedVolError::VegaTooSmall(vega));
        }

        vola -= price_diff / vega;
        if vola <= 0.0 {
            vola = VOLA_FLOOR;
        }
    }

    Err(ImpliedVolError::DidNotConverge(settings.max_iterations))
}
