//! Efficiency-curve scale factors: data/simulation ratio per |eta| bin.

use serde::Deserialize;

use tp_core::{Error, Result};

use crate::table::clamp_bin;

/// A continuous piecewise-linear curve through sorted control points.
#[derive(Debug, Clone, Deserialize)]
pub struct Curve {
    /// Control-point abscissas, strictly increasing.
    pub x: Vec<f64>,
    /// Control-point values, one per abscissa.
    pub y: Vec<f64>,
}

impl Curve {
    /// Check the control-point invariants.
    pub fn validate(&self) -> Result<()> {
        if self.x.is_empty() || self.x.len() != self.y.len() {
            return Err(Error::Validation(format!(
                "curve with {} abscissas and {} values",
                self.x.len(),
                self.y.len()
            )));
        }
        if self.x.windows(2).any(|w| !(w[0] < w[1])) {
            return Err(Error::Validation("curve abscissas are not strictly increasing".into()));
        }
        if let Some(bad) = self.x.iter().chain(&self.y).find(|v| !v.is_finite()) {
            return Err(Error::Validation(format!("curve with non-finite control point {bad}")));
        }
        Ok(())
    }

    /// Evaluate the curve at `x`, clamping to the endpoint values outside
    /// the covered range. A single-point curve is constant.
    pub fn eval(&self, x: f64) -> f64 {
        let last = self.x.len() - 1;
        if !(x > self.x[0]) {
            return self.y[0];
        }
        if x >= self.x[last] {
            return self.y[last];
        }
        let hi = self.x.partition_point(|&e| e <= x);
        let lo = hi - 1;
        let t = (x - self.x[lo]) / (self.x[hi] - self.x[lo]);
        self.y[lo] + t * (self.y[hi] - self.y[lo])
    }
}

/// One |eta| slice of an efficiency measurement.
#[derive(Debug, Clone, Deserialize)]
pub struct EtaBin {
    /// Bin label, e.g. `"Lt1p48"`.
    pub label: String,
    /// Efficiency measured in data.
    pub data: Curve,
    /// Efficiency measured in simulation.
    pub sim: Curve,
}

/// Data/simulation efficiency ratio split into |eta| bins.
///
/// Each bin of the |eta| partition carries a data curve and a simulation
/// curve over pT; the scale factor is their ratio.
#[derive(Debug, Clone, Deserialize)]
pub struct EfficiencyCurveSet {
    /// Set name, used in diagnostics.
    #[serde(default)]
    pub name: String,
    /// |eta| partition edges (strictly increasing, length = bins + 1).
    pub eta_edges: Vec<f64>,
    /// One entry per partition bin, each with both curves defined.
    pub bins: Vec<EtaBin>,
}

impl EfficiencyCurveSet {
    /// Check the partition invariants and every contained curve.
    pub fn validate(&self) -> Result<()> {
        if self.eta_edges.len() < 2 {
            return Err(Error::Validation(format!(
                "curve set '{}': eta partition needs at least 2 edges",
                self.name
            )));
        }
        if self.eta_edges.windows(2).any(|w| !(w[0] < w[1])) {
            return Err(Error::Validation(format!(
                "curve set '{}': eta edges are not strictly increasing",
                self.name
            )));
        }
        if self.bins.len() != self.eta_edges.len() - 1 {
            return Err(Error::Validation(format!(
                "curve set '{}': {} bins for {} edges",
                self.name,
                self.bins.len(),
                self.eta_edges.len()
            )));
        }
        for bin in &self.bins {
            bin.data.validate()?;
            bin.sim.validate()?;
        }
        Ok(())
    }

    /// Scale factor at the given kinematics: `data(pT) / sim(pT)` in the
    /// |eta| bin containing the particle.
    ///
    /// |eta| beyond the partition clamps to the last bin. A simulation
    /// efficiency of exactly zero yields 1.0; downstream calibration relies
    /// on this exact fallback.
    pub fn evaluate(&self, pt: f64, eta: f64) -> f64 {
        let bin = &self.bins[clamp_bin(&self.eta_edges, eta.abs())];
        let sim = bin.sim.eval(pt);
        if sim == 0.0 { 1.0 } else { bin.data.eval(pt) / sim }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn flat(value: f64) -> Curve {
        Curve { x: vec![20.0, 100.0], y: vec![value, value] }
    }

    fn test_set() -> EfficiencyCurveSet {
        let set = EfficiencyCurveSet {
            name: "ZMass".into(),
            eta_edges: vec![0.0, 1.48, 2.5],
            bins: vec![
                EtaBin {
                    label: "Lt1p48".into(),
                    data: Curve { x: vec![20.0, 40.0, 100.0], y: vec![0.8, 0.9, 0.95] },
                    sim: flat(0.9),
                },
                EtaBin { label: "Gt1p48".into(), data: flat(0.7), sim: flat(0.0) },
            ],
        };
        set.validate().unwrap();
        set
    }

    #[test]
    fn curve_interpolates_linearly() {
        let c = Curve { x: vec![0.0, 10.0, 20.0], y: vec![0.0, 1.0, 3.0] };
        c.validate().unwrap();
        assert_relative_eq!(c.eval(5.0), 0.5);
        assert_relative_eq!(c.eval(10.0), 1.0);
        assert_relative_eq!(c.eval(15.0), 2.0);
    }

    #[test]
    fn curve_clamps_to_endpoints() {
        let c = Curve { x: vec![10.0, 20.0], y: vec![0.5, 0.8] };
        assert_relative_eq!(c.eval(-100.0), 0.5);
        assert_relative_eq!(c.eval(1e6), 0.8);
    }

    #[test]
    fn single_point_curve_is_constant() {
        let c = Curve { x: vec![25.0], y: vec![0.97] };
        c.validate().unwrap();
        assert_relative_eq!(c.eval(0.0), 0.97);
        assert_relative_eq!(c.eval(25.0), 0.97);
        assert_relative_eq!(c.eval(400.0), 0.97);
    }

    #[test]
    fn ratio_in_central_bin() {
        let set = test_set();
        assert_relative_eq!(set.evaluate(40.0, 0.5), 0.9 / 0.9);
        assert_relative_eq!(set.evaluate(40.0, -0.5), 1.0); // |eta|
    }

    #[test]
    fn zero_sim_efficiency_yields_unity() {
        let set = test_set();
        // data curve is 0.7 there, but sim == 0 forces the fallback
        assert_relative_eq!(set.evaluate(50.0, 2.0), 1.0);
    }

    #[test]
    fn eta_beyond_partition_clamps_to_last_bin() {
        let set = test_set();
        assert_relative_eq!(set.evaluate(50.0, 4.0), set.evaluate(50.0, 2.0));
    }

    #[test]
    fn validate_requires_matching_bins() {
        let mut set = test_set();
        set.bins.pop();
        assert!(set.validate().is_err());
    }

    #[test]
    fn validate_rejects_non_finite_control_points() {
        let c = Curve { x: vec![20.0, 100.0], y: vec![0.9, f64::NAN] };
        assert!(c.validate().is_err());
        let c = Curve { x: vec![20.0, f64::INFINITY], y: vec![0.9, 0.9] };
        assert!(c.validate().is_err());

        // a bad curve inside a set fails the set's load-time validation
        let mut set = test_set();
        set.bins[0].sim.y[0] = f64::NAN;
        assert!(set.validate().is_err());
    }
}
