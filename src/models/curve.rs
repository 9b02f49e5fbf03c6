use serde::{Deserialize, Serialize};

use crate::models::error::CurveError;

/// Validated bonding curve parameters.
///
/// Values of this type only exist after passing the validating
/// constructors, so every instance satisfies
/// `virtual_token_reserves > real_token_reserves` with all fields finite
/// and positive. The constant product `k` is derived on demand rather
/// than stored, so it cannot drift from the reserves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveParameters {
    virtual_sol_reserves: f64,
    virtual_token_reserves: f64,
    real_token_reserves: f64,
    token_increment: f64,
}

impl CurveParameters {
    /// Real token supply available for sale: 800 million.
    pub const REAL_TOKEN_RESERVES: f64 = 800_000_000.0;

    /// Granularity of the discrete cost schedule: 10 million tokens.
    pub const TOKEN_INCREMENT: f64 = 10_000_000.0;

    /// Build parameters against the standard 800M real supply and 10M
    /// increment.
    pub fn new(
        virtual_sol_reserves: f64,
        virtual_token_reserves: f64,
    ) -> Result<Self, CurveError> {
        Self::with_supply(
            virtual_sol_reserves,
            virtual_token_reserves,
            Self::REAL_TOKEN_RESERVES,
            Self::TOKEN_INCREMENT,
        )
    }

    /// Full-form constructor for non-standard supplies.
    pub fn with_supply(
        virtual_sol_reserves: f64,
        virtual_token_reserves: f64,
        real_token_reserves: f64,
        token_increment: f64,
    ) -> Result<Self, CurveError> {
        if !virtual_sol_reserves.is_finite() {
            return Err(CurveError::NonFiniteParameter("virtual_sol_reserves"));
        }
        if !virtual_token_reserves.is_finite() {
            return Err(CurveError::NonFiniteParameter("virtual_token_reserves"));
        }
        if !real_token_reserves.is_finite() {
            return Err(CurveError::NonFiniteParameter("real_token_reserves"));
        }
        if !token_increment.is_finite() {
            return Err(CurveError::NonFiniteParameter("token_increment"));
        }
        if virtual_sol_reserves <= 0.0 {
            return Err(CurveError::NonPositiveSolReserves(virtual_sol_reserves));
        }
        if real_token_reserves <= 0.0 {
            return Err(CurveError::NonPositiveSupply(real_token_reserves));
        }
        if token_increment <= 0.0 {
            return Err(CurveError::NonPositiveIncrement(token_increment));
        }
        if virtual_token_reserves <= real_token_reserves {
            return Err(CurveError::TokenReservesTooLow {
                virtual_token_reserves,
                real_token_reserves,
            });
        }

        Ok(CurveParameters {
            virtual_sol_reserves,
            virtual_token_reserves,
            real_token_reserves,
            token_increment,
        })
    }

    pub fn virtual_sol_reserves(&self) -> f64 {
        self.virtual_sol_reserves
    }

    pub fn virtual_token_reserves(&self) -> f64 {
        self.virtual_token_reserves
    }

    pub fn real_token_reserves(&self) -> f64 {
        self.real_token_reserves
    }

    pub fn token_increment(&self) -> f64 {
        self.token_increment
    }

    /// Constant product `k = virtual_sol * virtual_tokens`.
    pub fn constant_product(&self) -> f64 {
        self.virtual_sol_reserves * self.virtual_token_reserves
    }

    /// Marginal token price before any tokens are sold.
    pub fn initial_price(&self) -> f64 {
        self.virtual_sol_reserves / self.virtual_token_reserves
    }

    /// Replace the SOL side of the reserves, revalidating. The receiver
    /// is left untouched on rejection.
    pub fn with_virtual_sol_reserves(
        &self,
        virtual_sol_reserves: f64,
    ) -> Result<Self, CurveError> {
        Self::with_supply(
            virtual_sol_reserves,
            self.virtual_token_reserves,
            self.real_token_reserves,
            self.token_increment,
        )
    }

    /// Replace the token side of the reserves, revalidating. The receiver
    /// is left untouched on rejection.
    pub fn with_virtual_token_reserves(
        &self,
        virtual_token_reserves: f64,
    ) -> Result<Self, CurveError> {
        Self::with_supply(
            self.virtual_sol_reserves,
            virtual_token_reserves,
            self.real_token_reserves,
            self.token_increment,
        )
    }

    /// Stepper-style edit of the token reserves. The result is clamped to
    /// one token above the real supply, so it is always valid; a
    /// non-finite delta is ignored.
    pub fn adjust_virtual_token_reserves(&self, delta: f64) -> Self {
        if !delta.is_finite() {
            return *self;
        }
        let floor = self.real_token_reserves + 1.0;
        CurveParameters {
            virtual_token_reserves: (self.virtual_token_reserves + delta).max(floor),
            ..*self
        }
    }
}

/// One step of the discrete cost schedule: the cumulative position after
/// buying `tokens_bought` tokens and what the latest increment cost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IncrementPoint {
    pub tokens_bought: f64,
    pub increment_cost: f64,
    pub increment_price: f64,
    pub average_price: f64,
    pub sol_total: f64,
}

/// One sample of the continuous price/cost curve. `price` is the
/// instantaneous marginal price in SOL per token, unscaled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub tokens_sold: f64,
    pub price: f64,
    pub sol_required: f64,
}

/// Headline figures for one parameter set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurveSummary {
    pub initial_price: f64,
    pub constant_product: f64,
    pub total_sol_required: f64,
    pub increment_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_reserves_above_the_real_supply() {
        let params = CurveParameters::new(30.0, 1_000_000_000.0).unwrap();
        assert_eq!(params.virtual_sol_reserves(), 30.0);
        assert_eq!(params.virtual_token_reserves(), 1_000_000_000.0);
        assert_eq!(params.real_token_reserves(), 800_000_000.0);
        assert_eq!(params.token_increment(), 10_000_000.0);
        assert_eq!(params.constant_product(), 3.0e10);
        assert!((params.initial_price() - 3.0e-8).abs() < 1e-20);
    }

    #[test]
    fn rejects_token_reserves_at_or_below_the_real_supply() {
        // Equality means division by zero at full depletion.
        assert!(matches!(
            CurveParameters::new(30.0, 800_000_000.0),
            Err(CurveError::TokenReservesTooLow { .. })
        ));
        assert!(matches!(
            CurveParameters::new(30.0, 500_000_000.0),
            Err(CurveError::TokenReservesTooLow { .. })
        ));
        assert!(CurveParameters::new(30.0, 800_000_001.0).is_ok());
    }

    #[test]
    fn rejects_non_positive_sol_reserves() {
        assert!(matches!(
            CurveParameters::new(0.0, 1_000_000_000.0),
            Err(CurveError::NonPositiveSolReserves(_))
        ));
        assert!(matches!(
            CurveParameters::new(-5.0, 1_000_000_000.0),
            Err(CurveError::NonPositiveSolReserves(_))
        ));
    }

    #[test]
    fn rejects_non_finite_input() {
        assert!(matches!(
            CurveParameters::new(f64::NAN, 1_000_000_000.0),
            Err(CurveError::NonFiniteParameter("virtual_sol_reserves"))
        ));
        assert!(matches!(
            CurveParameters::new(30.0, f64::INFINITY),
            Err(CurveError::NonFiniteParameter("virtual_token_reserves"))
        ));
    }

    #[test]
    fn with_supply_validates_supply_and_increment() {
        assert!(matches!(
            CurveParameters::with_supply(30.0, 1_000_000_000.0, 0.0, 10_000_000.0),
            Err(CurveError::NonPositiveSupply(_))
        ));
        assert!(matches!(
            CurveParameters::with_supply(30.0, 1_000_000_000.0, 800_000_000.0, 0.0),
            Err(CurveError::NonPositiveIncrement(_))
        ));
        let custom =
            CurveParameters::with_supply(10.0, 2_000_000.0, 1_000_000.0, 50_000.0).unwrap();
        assert_eq!(custom.real_token_reserves(), 1_000_000.0);
        assert_eq!(custom.token_increment(), 50_000.0);
    }

    #[test]
    fn single_field_edits_leave_the_receiver_untouched() {
        let params = CurveParameters::new(30.0, 1_000_000_000.0).unwrap();

        let richer = params.with_virtual_sol_reserves(300.0).unwrap();
        assert_eq!(richer.virtual_sol_reserves(), 300.0);
        assert_eq!(richer.virtual_token_reserves(), 1_000_000_000.0);
        assert_eq!(params.virtual_sol_reserves(), 30.0);

        assert!(params.with_virtual_token_reserves(1.0).is_err());
        assert!(params.with_virtual_sol_reserves(-1.0).is_err());
        assert_eq!(params, CurveParameters::new(30.0, 1_000_000_000.0).unwrap());
    }

    #[test]
    fn stepper_adjustment_clamps_at_one_token_above_the_real_supply() {
        let params = CurveParameters::new(30.0, 801_000_000.0).unwrap();

        let clamped = params.adjust_virtual_token_reserves(-100_000_000.0);
        assert_eq!(clamped.virtual_token_reserves(), 800_000_001.0);

        let bumped = params.adjust_virtual_token_reserves(10_000_000.0);
        assert_eq!(bumped.virtual_token_reserves(), 811_000_000.0);

        let ignored = params.adjust_virtual_token_reserves(f64::NAN);
        assert_eq!(ignored, params);
    }
}
