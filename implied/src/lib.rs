pub mod error;

mod bachelier;
mod newton;

pub use bachelier::bachelier_implied_vol_atm;
pub use newton::{implied_volatility, SolverSettings};
