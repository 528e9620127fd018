//! 2-D calibration tables: exact bin-content lookup with edge clamping.

use serde::Deserialize;

use tp_core::{Error, Result};

/// Which physical coordinate each table axis carries.
///
/// Calibration files ship both orientations (`abseta_pt_ratio` and
/// `pt_abseta_ratio` style maps); the tag is fixed at load time and the
/// lookup branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisOrder {
    /// x axis is eta, y axis is pT.
    PtVsEta,
    /// x axis is pT, y axis is eta.
    EtaVsPt,
}

/// A 2-D efficiency map with fixed bin contents.
///
/// Built once from a [`CorrectionFile`](crate::CorrectionFile) object and
/// never mutated per-event.
#[derive(Debug, Clone, Deserialize)]
pub struct CalibrationTable {
    /// Table name, used in diagnostics.
    #[serde(default)]
    pub name: String,
    /// Bin edges along x (strictly increasing, length >= 2).
    pub x_edges: Vec<f64>,
    /// Bin edges along y (strictly increasing, length >= 2).
    pub y_edges: Vec<f64>,
    /// Row-major bin contents: `values[ix * n_y_bins + iy]`.
    pub values: Vec<f64>,
    /// Axis orientation.
    pub order: AxisOrder,
}

impl CalibrationTable {
    /// Check the structural invariants: strictly increasing edge sequences
    /// and a value array matching the bin grid.
    pub fn validate(&self) -> Result<()> {
        check_edges(&self.name, "x", &self.x_edges)?;
        check_edges(&self.name, "y", &self.y_edges)?;
        let n_bins = (self.x_edges.len() - 1) * (self.y_edges.len() - 1);
        if self.values.len() != n_bins {
            return Err(Error::Validation(format!(
                "table '{}': {} values for {} bins",
                self.name,
                self.values.len(),
                n_bins
            )));
        }
        if let Some(bad) = self.values.iter().find(|v| !v.is_finite()) {
            return Err(Error::Validation(format!(
                "table '{}': non-finite bin content {bad}",
                self.name
            )));
        }
        Ok(())
    }

    /// Look up the correction weight for the given kinematics.
    ///
    /// Coordinates outside the covered range clamp to the boundary bins; no
    /// interpolation or extrapolation is performed. Total over all finite
    /// and non-finite inputs.
    pub fn evaluate(&self, pt: f64, eta: f64) -> f64 {
        let (x, y) = match self.order {
            AxisOrder::PtVsEta => (eta, pt),
            AxisOrder::EtaVsPt => (pt, eta),
        };
        let ix = clamp_bin(&self.x_edges, x);
        let iy = clamp_bin(&self.y_edges, y);
        self.values[ix * (self.y_edges.len() - 1) + iy]
    }
}

fn check_edges(name: &str, axis: &str, edges: &[f64]) -> Result<()> {
    if edges.len() < 2 {
        return Err(Error::Validation(format!(
            "table '{name}': {axis} axis needs at least 2 edges, got {}",
            edges.len()
        )));
    }
    if edges.windows(2).any(|w| !(w[0] < w[1])) {
        return Err(Error::Validation(format!(
            "table '{name}': {axis} edges are not strictly increasing"
        )));
    }
    Ok(())
}

/// Find the bin containing `val` given sorted edges, clamping out-of-range
/// coordinates (including NaN) to the boundary bins.
pub(crate) fn clamp_bin(edges: &[f64], val: f64) -> usize {
    let n_bins = edges.len() - 1;
    // the guards must use the same total order as the search, or values the
    // two orders disagree on (-0.0 against a 0.0 first edge) slip through
    if edges[0].total_cmp(&val).is_gt() {
        return 0;
    }
    if edges[n_bins].total_cmp(&val).is_le() {
        return n_bins - 1;
    }
    match edges.binary_search_by(|e| e.total_cmp(&val)) {
        Ok(i) => i.min(n_bins - 1),
        Err(i) => i - 1,
    }
}
