//! Per-event b-tagging weight from efficiency maps and scale factors.
//!
//! The efficiency maps are measured per jet flavor as tagged/all in
//! simulation; the event weight is the usual probability ratio
//! `P(data)/P(sim)` over the selected jets.

use crate::engine::ScaleFactor;
use crate::table::CalibrationTable;

/// Jet flavor classes used by the b-tag calibration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JetFlavor {
    /// b-quark jets.
    B,
    /// c-quark jets.
    C,
    /// Light quark and gluon jets.
    Light,
}

impl JetFlavor {
    /// Map the generator hadron-flavor code (5, 4, 0) onto a calibration class.
    pub fn from_hadron_flavor(flavor: i32) -> Self {
        match flavor.abs() {
            5 => JetFlavor::B,
            4 => JetFlavor::C,
            _ => JetFlavor::Light,
        }
    }
}

/// One jet as seen by the b-tag weighting.
#[derive(Debug, Clone, Copy)]
pub struct Jet {
    /// Transverse momentum.
    pub pt: f64,
    /// Pseudorapidity.
    pub eta: f64,
    /// Calibration flavor class.
    pub flavor: JetFlavor,
    /// Whether the jet passes the tagger working point.
    pub tagged: bool,
}

/// Event-level b-tag weight built from per-flavor efficiency maps and
/// per-flavor scale factors. Immutable after construction.
#[derive(Debug, Clone)]
pub struct BTagWeighter {
    eff_b: CalibrationTable,
    eff_c: CalibrationTable,
    eff_light: CalibrationTable,
    sf_b: ScaleFactor,
    sf_c: ScaleFactor,
    sf_light: ScaleFactor,
}

impl BTagWeighter {
    /// Assemble a weighter from per-flavor efficiency maps and scale factors.
    pub fn new(
        eff: [CalibrationTable; 3],
        sf: [ScaleFactor; 3],
    ) -> Self {
        let [eff_b, eff_c, eff_light] = eff;
        let [sf_b, sf_c, sf_light] = sf;
        BTagWeighter { eff_b, eff_c, eff_light, sf_b, sf_c, sf_light }
    }

    fn efficiency(&self, jet: &Jet) -> f64 {
        match jet.flavor {
            JetFlavor::B => self.eff_b.evaluate(jet.pt, jet.eta),
            JetFlavor::C => self.eff_c.evaluate(jet.pt, jet.eta),
            JetFlavor::Light => self.eff_light.evaluate(jet.pt, jet.eta),
        }
    }

    fn scale(&self, jet: &Jet) -> f64 {
        match jet.flavor {
            JetFlavor::B => self.sf_b.evaluate(jet.pt, jet.eta),
            JetFlavor::C => self.sf_c.evaluate(jet.pt, jet.eta),
            JetFlavor::Light => self.sf_light.evaluate(jet.pt, jet.eta),
        }
    }

    /// Per-event weight over the selected jets:
    /// tagged jets contribute `sf`, untagged jets `(1 - sf*eff)/(1 - eff)`.
    /// A degenerate efficiency (eff >= 1) contributes 1.0.
    pub fn event_weight(&self, jets: &[Jet]) -> f64 {
        let mut weight = 1.0;
        for jet in jets {
            let sf = self.scale(jet);
            if jet.tagged {
                weight *= sf;
            } else {
                let eff = self.efficiency(jet);
                let denom = 1.0 - eff;
                if denom > 0.0 {
                    weight *= (1.0 - sf * eff) / denom;
                }
            }
        }
        weight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::AxisOrder;
    use approx::assert_relative_eq;

    fn flat_table(name: &str, value: f64) -> CalibrationTable {
        CalibrationTable {
            name: name.into(),
            x_edges: vec![20.0, 1000.0],
            y_edges: vec![-2.5, 2.5],
            values: vec![value],
            order: AxisOrder::EtaVsPt,
        }
    }

    fn weighter(eff: f64, sf: f64) -> BTagWeighter {
        BTagWeighter::new(
            [flat_table("eff_b", eff), flat_table("eff_c", eff), flat_table("eff_udsg", eff)],
            [
                ScaleFactor::Table(flat_table("sf_b", sf)),
                ScaleFactor::Table(flat_table("sf_c", sf)),
                ScaleFactor::Table(flat_table("sf_udsg", sf)),
            ],
        )
    }

    fn jet(flavor: JetFlavor, tagged: bool) -> Jet {
        Jet { pt: 60.0, eta: 0.4, flavor, tagged }
    }

    #[test]
    fn tagged_jet_contributes_scale_factor() {
        let w = weighter(0.6, 0.9);
        assert_relative_eq!(w.event_weight(&[jet(JetFlavor::B, true)]), 0.9);
    }

    #[test]
    fn untagged_jet_contributes_probability_ratio() {
        let w = weighter(0.6, 0.9);
        let expected = (1.0 - 0.9 * 0.6) / (1.0 - 0.6);
        assert_relative_eq!(w.event_weight(&[jet(JetFlavor::B, false)]), expected);
    }

    #[test]
    fn jets_multiply_independently() {
        let w = weighter(0.5, 0.8);
        let tagged = w.event_weight(&[jet(JetFlavor::B, true)]);
        let untagged = w.event_weight(&[jet(JetFlavor::Light, false)]);
        let both = w.event_weight(&[jet(JetFlavor::B, true), jet(JetFlavor::Light, false)]);
        assert_relative_eq!(both, tagged * untagged);
    }

    #[test]
    fn degenerate_efficiency_contributes_unity() {
        let w = weighter(1.0, 0.9);
        assert_relative_eq!(w.event_weight(&[jet(JetFlavor::C, false)]), 1.0);
    }

    #[test]
    fn no_jets_is_unity() {
        let w = weighter(0.5, 0.8);
        assert_relative_eq!(w.event_weight(&[]), 1.0);
    }

    #[test]
    fn hadron_flavor_mapping() {
        assert_eq!(JetFlavor::from_hadron_flavor(5), JetFlavor::B);
        assert_eq!(JetFlavor::from_hadron_flavor(-4), JetFlavor::C);
        assert_eq!(JetFlavor::from_hadron_flavor(0), JetFlavor::Light);
        assert_eq!(JetFlavor::from_hadron_flavor(21), JetFlavor::Light);
    }
}
