//! Per-event weight record written alongside the output table.

use serde::Serialize;

/// All multiplicative event weights, each defaulting to 1.
///
/// The combined weight folds in the factors the output `weight` column
/// carries; the b-tag and boson-pT reweighting factors are bookkept in their
/// own columns and applied downstream.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EventWeights {
    /// Generator weight of the event.
    pub genweight: f64,
    /// Pileup reweighting factor.
    pub puweight: f64,
    /// Trigger-efficiency scale factor of the leading leg.
    pub trigweight: f64,
    /// Identification/isolation scale factor of the first leg.
    pub idisoweight_1: f64,
    /// Identification/isolation scale factor of the second leg.
    pub idisoweight_2: f64,
    /// b-tag event weight.
    pub btagweight: f64,
    /// Z-boson pT reweighting factor.
    pub zptweight: f64,
    /// Top-pair pT reweighting factor.
    pub ttptweight: f64,
}

impl Default for EventWeights {
    fn default() -> Self {
        EventWeights {
            genweight: 1.0,
            puweight: 1.0,
            trigweight: 1.0,
            idisoweight_1: 1.0,
            idisoweight_2: 1.0,
            btagweight: 1.0,
            zptweight: 1.0,
            ttptweight: 1.0,
        }
    }
}

impl EventWeights {
    /// Combined event weight:
    /// `genweight * puweight * trigweight * idisoweight_1 * idisoweight_2`.
    pub fn combined(&self) -> f64 {
        self.genweight * self.puweight * self.trigweight * self.idisoweight_1 * self.idisoweight_2
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults_to_unity() {
        let w = EventWeights::default();
        assert_relative_eq!(w.combined(), 1.0);
    }

    #[test]
    fn combined_excludes_btag_and_boson_factors() {
        let w = EventWeights {
            genweight: 2.0,
            puweight: 0.5,
            trigweight: 0.9,
            idisoweight_1: 0.95,
            idisoweight_2: 0.98,
            btagweight: 0.7,
            zptweight: 1.1,
            ttptweight: 1.2,
        };
        assert_relative_eq!(w.combined(), 2.0 * 0.5 * 0.9 * 0.95 * 0.98);
    }
}
