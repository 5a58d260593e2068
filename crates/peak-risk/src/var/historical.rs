//! Historical VaR calculation.

use crate::RiskError;
use peak_math::quantile::empirical_quantile;

/// Single-period historical VaR: the loss magnitude at the empirical
/// `(1 - alpha)`-quantile of the return distribution.
///
/// The caller has already filtered non-finite values and validated
/// `alpha`; the quantile uses linear interpolation between order
/// statistics. A quantile in gain territory is floored at zero.
pub fn historical_var(returns: &[f64], alpha: f64) -> Result<f64, RiskError> {
    let quantile = empirical_quantile(returns, 1.0 - alpha)?;
    Ok((-quantile).max(0.0))
}
