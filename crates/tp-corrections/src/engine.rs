//! Composable scale-factor engines.

use crate::curves::EfficiencyCurveSet;
use crate::table::CalibrationTable;

/// A per-particle multiplicative correction weight, evaluated at (pT, eta).
///
/// Aggregate correction chains (e.g. trigger x identification) are built at
/// configuration time with [`ScaleFactor::product`]; evaluation is a pure
/// function that never fails.
#[derive(Debug, Clone)]
pub enum ScaleFactor {
    /// Exact bin-content lookup in a 2-D calibration table.
    Table(CalibrationTable),
    /// Data/simulation efficiency-curve ratio.
    Curves(EfficiencyCurveSet),
    /// Product of two sub-engines.
    Product(Box<ScaleFactor>, Box<ScaleFactor>),
}

impl ScaleFactor {
    /// Combine two engines into one that multiplies their weights.
    /// Associative, so any number of engines chain pairwise.
    pub fn product(left: ScaleFactor, right: ScaleFactor) -> ScaleFactor {
        ScaleFactor::Product(Box::new(left), Box::new(right))
    }

    /// Evaluate the correction weight for the given kinematics.
    pub fn evaluate(&self, pt: f64, eta: f64) -> f64 {
        match self {
            ScaleFactor::Table(table) => table.evaluate(pt, eta),
            ScaleFactor::Curves(set) => set.evaluate(pt, eta),
            ScaleFactor::Product(left, right) => {
                left.evaluate(pt, eta) * right.evaluate(pt, eta)
            }
        }
    }

    /// Engine name for diagnostics; products compose as `"left*right"`.
    pub fn name(&self) -> String {
        match self {
            ScaleFactor::Table(table) => table.name.clone(),
            ScaleFactor::Curves(set) => set.name.clone(),
            ScaleFactor::Product(left, right) => format!("{}*{}", left.name(), right.name()),
        }
    }
}
