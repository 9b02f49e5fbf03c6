use thiserror::Error;

/// Parameter sets that would make the curve undefined are rejected with
/// one of these before any computation runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    #[error("virtual SOL reserves must be positive, got {0}")]
    NonPositiveSolReserves(f64),

    #[error("virtual token reserves ({virtual_token_reserves}) must exceed real token reserves ({real_token_reserves})")]
    TokenReservesTooLow {
        virtual_token_reserves: f64,
        real_token_reserves: f64,
    },

    #[error("real token reserves must be positive, got {0}")]
    NonPositiveSupply(f64),

    #[error("token increment must be positive, got {0}")]
    NonPositiveIncrement(f64),

    #[error("{0} is not a finite number")]
    NonFiniteParameter(&'static str),
}
