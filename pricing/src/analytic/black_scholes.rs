use crate::common::models::{DerivativeParameter, OptionType};
use probability::distribution::{Continuous, Distribution, Gaussian};

pub(crate) fn cdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.distribution(d)
}

pub(crate) fn pdf(d: f64) -> f64 {
    let normal = Gaussian::new(0.0, 1.0);
    normal.density(d)
}

pub trait OptionPrice {
    type Params;
    fn put(params: &Self::Params) -> f64;
    fn call(params: &Self::Params) -> f64;
    /// dPrice / dVola; identical for put and call by put-call parity.
    fn vega(params: &Self::Params) -> f64;
}

/// European Put and Call option prices for dividend-paying stocks.
/// https://en.wikipedia.org/wiki/Black-Scholes_model
///
/// Expired (`T <= 0`) and volatility-free (`vola <= 0`) parameters are priced
/// at their closed-form limits, so `call` and `put` are continuous there and
/// never divide by zero.
pub struct BlackScholesMerton;

impl BlackScholesMerton {
    fn d1_d2(dp: &DerivativeParameter) -> (f64, f64) {
        let sigma_exp = dp.vola * dp.time_to_expiration.sqrt();
        let d1 = ((dp.asset_price / dp.strike).ln()
            + (dp.rfr - dp.dividend_yield + dp.vola.powi(2) / 2.0) * dp.time_to_expiration)
            / sigma_exp;
        (d1, d1 - sigma_exp)
    }

    /// asset price net of the dividends paid out until expiration
    fn discounted_spot(dp: &DerivativeParameter) -> f64 {
        dp.asset_price * (-dp.dividend_yield * dp.time_to_expiration).exp()
    }

    fn discounted_strike(dp: &DerivativeParameter) -> f64 {
        dp.strike * (-dp.rfr * dp.time_to_expiration).exp()
    }
}

impl OptionPrice for BlackScholesMerton {
    type Params = DerivativeParameter;

    fn call(dp: &DerivativeParameter) -> f64 {
        if dp.time_to_expiration <= 0.0 {
            return (dp.asset_price - dp.strike).max(0.0);
        }
        if dp.vola <= 0.0 {
            return (Self::discounted_spot(dp) - Self::discounted_strike(dp)).max(0.0);
        }
        let (d1, d2) = Self::d1_d2(dp);
        cdf(d1) * Self::discounted_spot(dp) - cdf(d2) * Self::discounted_strike(dp)
    }

    fn put(dp: &DerivativeParameter) -> f64 {
        if dp.time_to_expiration <= 0.0 {
            return (dp.strike - dp.asset_price).max(0.0);
        }
        if dp.vola <= 0.0 {
            return (Self::discounted_strike(dp) - Self::discounted_spot(dp)).max(0.0);
        }
        let (d1, d2) = Self::d1_d2(dp);
        cdf(-d2) * Self::discounted_strike(dp) - cdf(-d1) * Self::discounted_spot(dp)
    }

    fn vega(dp: &DerivativeParameter) -> f64 {
        if dp.time_to_expiration <= 0.0 || dp.vola <= 0.0 {
            // flat region of the price surface
            return 0.0;
        }
        let (d1, _) = Self::d1_d2(dp);
        Self::discounted_spot(dp) * dp.time_to_expiration.sqrt() * pdf(d1)
    }
}

pub fn price(option_type: OptionType, dp: &DerivativeParameter) -> f64 {
    match option_type {
        OptionType::Call => BlackScholesMerton::call(dp),
        OptionType::Put => BlackScholesMerton::put(dp),
    }
}

pub fn vega(_option_type: OptionType, dp: &DerivativeParameter) -> f64 {
    BlackScholesMerton::vega(dp)
}
