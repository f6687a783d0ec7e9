pub mod analytic;
pub mod common;
