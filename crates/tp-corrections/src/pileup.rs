//! Pileup reweighting from data and simulation pileup profiles.

use tp_core::{Error, Result};

use crate::source::CorrectionFile;

/// Per-event pileup weight: ratio of the unit-normalised data and
/// simulation profiles of the true number of interactions.
#[derive(Debug, Clone)]
pub struct PileupWeights {
    weights: Vec<f64>,
}

impl PileupWeights {
    /// Build weights as the per-bin ratio of unit-normalised profiles.
    ///
    /// Bins where the simulation profile vanishes get weight 1.0.
    pub fn from_profiles(data: &[f64], sim: &[f64]) -> Result<Self> {
        if data.is_empty() || data.len() != sim.len() {
            return Err(Error::Validation(format!(
                "pileup profiles with {} and {} bins",
                data.len(),
                sim.len()
            )));
        }
        let data_sum: f64 = data.iter().sum();
        let sim_sum: f64 = sim.iter().sum();
        if !(data_sum > 0.0) || !(sim_sum > 0.0) {
            return Err(Error::Validation("pileup profile with non-positive integral".into()));
        }
        let weights = data
            .iter()
            .zip(sim)
            .map(|(&d, &s)| if s == 0.0 { 1.0 } else { (d / data_sum) / (s / sim_sum) })
            .collect();
        Ok(PileupWeights { weights })
    }

    /// Load the two named profiles from a calibration file.
    pub fn load(file: &CorrectionFile, data_key: &str, sim_key: &str) -> Result<Self> {
        let data = file.profile(data_key)?;
        let sim = file.profile(sim_key)?;
        Self::from_profiles(&data, &sim)
    }

    /// Weight for an event's true number of pileup interactions.
    /// Out-of-range and non-finite inputs clamp to the boundary bins.
    pub fn weight(&self, n_true_int: f64) -> f64 {
        if !(n_true_int >= 0.0) {
            return self.weights[0];
        }
        let bin = (n_true_int as usize).min(self.weights.len() - 1);
        self.weights[bin]
    }

    /// Number of profile bins.
    pub fn n_bins(&self) -> usize {
        self.weights.len()
    }
}
