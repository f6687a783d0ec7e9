use thiserror::Error;

#[derive(Error, Debug)]
pub enum ImpliedVolError {
    #[error("vega {0} is too small for a stable Newton step")]
    VegaTooSmall(f64),
    #[error("no convergence within {0} iterations")]
    DidNotConverge(usize),
    #[error("{name} must be positive, got {value}")]
    InvalidArgument { name: &'static str, value: f64 },
}
