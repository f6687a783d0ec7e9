mod black_scholes;

pub use black_scholes::{price, vega, BlackScholesMerton, OptionPrice};
