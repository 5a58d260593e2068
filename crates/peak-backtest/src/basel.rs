//! Basel traffic-light banding.
//!
//! The Basel Committee's backtesting framework classifies the number of
//! exceedances over the most recent 250 observations into GREEN (<= 4),
//! YELLOW (5-9), and RED (>= 10) zones. The cumulative binomial
//! probability of the observed count at the theoretical rate is reported
//! alongside the band.

use serde::{Deserialize, Serialize};

use peak_math::distributions::binomial_cdf;

use crate::exceedance::ExceedanceSequence;
use crate::BacktestError;

/// Standard Basel backtesting window length.
pub const BASEL_WINDOW: usize = 250;

/// Upper exceedance count of the GREEN zone.
pub const GREEN_MAX: usize = 4;

/// Upper exceedance count of the YELLOW zone.
pub const YELLOW_MAX: usize = 9;

/// Basel traffic-light band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrafficLight {
    /// Model accepted (no capital add-on).
    Green,
    /// Model under scrutiny (progressive add-on).
    Yellow,
    /// Model rejected.
    Red,
}

impl std::fmt::Display for TrafficLight {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrafficLight::Green => write!(f, "GREEN"),
            TrafficLight::Yellow => write!(f, "YELLOW"),
            TrafficLight::Red => write!(f, "RED"),
        }
    }
}

/// Result of the Basel traffic-light classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrafficLightResult {
    /// Exceedances counted inside the window.
    pub exceedances: usize,
    /// Window length actually used (`min(n, 250)`).
    pub window: usize,
    /// `P(X <= exceedances)` under the binomial null at rate `1 - alpha`.
    pub cumulative_probability: f64,
    /// The assigned band.
    pub band: TrafficLight,
}

/// Classifies the most recent `min(n, 250)` observations into a Basel band.
///
/// # Errors
///
/// Only propagates backend failures from the binomial CDF; an empty
/// sequence is classified GREEN with probability 1.
pub fn basel_traffic_light(
    exceedances: &ExceedanceSequence,
    alpha: f64,
) -> Result<TrafficLightResult, BacktestError> {
    let n = exceedances.len();
    let window = n.min(BASEL_WINDOW);
    let count = if window == 0 {
        0
    } else {
        exceedances.window(n - window, window).count()
    };

    let band = if count <= GREEN_MAX {
        TrafficLight::Green
    } else if count <= YELLOW_MAX {
        TrafficLight::Yellow
    } else {
        TrafficLight::Red
    };

    let cumulative_probability = if window == 0 {
        1.0
    } else {
        binomial_cdf(count as u64, window as u64, 1.0 - alpha)?
    };

    Ok(TrafficLightResult {
        exceedances: count,
        window,
        cumulative_probability,
        band,
    })
}
