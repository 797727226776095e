//! Value types shared by all component parameters.

use serde::{Deserialize, Serialize};

/// Inclusive lower/upper bound pair. Infinite bounds mean "unconstrained".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinMax {
    pub min: f64,
    pub max: f64,
}

impl MinMax {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// `[0, +inf)` — the default for any unconstrained flow.
    pub const fn unbounded() -> Self {
        Self {
            min: 0.0,
            max: f64::INFINITY,
        }
    }

    /// Degenerate bound pair pinning a flow to a single value.
    pub const fn fixed(value: f64) -> Self {
        Self {
            min: value,
            max: value,
        }
    }
}

impl Default for MinMax {
    fn default() -> Self {
        Self::unbounded()
    }
}

/// Directional value pair for ramp-up (`positive`) and ramp-down (`negative`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositiveNegative {
    pub positive: f64,
    pub negative: f64,
}

impl PositiveNegative {
    pub const fn new(positive: f64, negative: f64) -> Self {
        Self { positive, negative }
    }

    /// Same magnitude in both directions.
    pub const fn symmetric(value: f64) -> Self {
        Self {
            positive: value,
            negative: value,
        }
    }
}

impl Default for PositiveNegative {
    fn default() -> Self {
        Self::symmetric(f64::INFINITY)
    }
}

/// Storage charge/discharge efficiency pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InOut {
    pub inflow: f64,
    pub outflow: f64,
}

impl InOut {
    pub const fn new(inflow: f64, outflow: f64) -> Self {
        Self { inflow, outflow }
    }
}

impl Default for InOut {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// Value pair attached to the on/off commitment status of a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OnOff {
    pub on: f64,
    pub off: f64,
}

impl OnOff {
    pub const fn new(on: f64, off: f64) -> Self {
        Self { on, off }
    }
}

impl Default for OnOff {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Per-timestep lower/upper bound series, used to override a flow with
/// explicit profile data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesBounds {
    pub min: Vec<f64>,
    pub max: Vec<f64>,
}

impl SeriesBounds {
    pub fn new(min: Vec<f64>, max: Vec<f64>) -> Self {
        Self { min, max }
    }

    /// Pins both bounds to the same profile, fixing the flow to it.
    pub fn fixed(values: &[f64]) -> Self {
        Self {
            min: values.to_vec(),
            max: values.to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.min.len().max(self.max.len())
    }

    pub fn is_empty(&self) -> bool {
        self.min.is_empty() && self.max.is_empty()
    }
}

/// Conversion factor of a transformer flow pair, constant or per timestep.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Efficiency {
    Scalar(f64),
    Series(Vec<f64>),
}

impl From<f64> for Efficiency {
    fn from(value: f64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<f64>> for Efficiency {
    fn from(values: Vec<f64>) -> Self {
        Self::Series(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_minmax_pins_both_bounds() {
        let mm = MinMax::fixed(11.0);
        assert_eq!(mm.min, 11.0);
        assert_eq!(mm.max, 11.0);
    }

    #[test]
    fn default_minmax_is_unbounded() {
        let mm = MinMax::default();
        assert_eq!(mm.min, 0.0);
        assert!(mm.max.is_infinite());
    }

    #[test]
    fn fixed_series_clones_profile() {
        let sb = SeriesBounds::fixed(&[12.0, 3.0, 7.0]);
        assert_eq!(sb.min, sb.max);
        assert_eq!(sb.len(), 3);
    }

    #[test]
    fn efficiency_from_scalar_and_series() {
        assert_eq!(Efficiency::from(0.42), Efficiency::Scalar(0.42));
        let series = Efficiency::from(vec![0.6, 0.8]);
        assert_eq!(series, Efficiency::Series(vec![0.6, 0.8]));
    }
}
