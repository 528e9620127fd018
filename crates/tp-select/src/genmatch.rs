//! Generator-level matching for reconstructed taus.
//!
//! Reimplements the nearest-dR match over generator particles; the stock
//! nanoAOD matching is buggy for lepton-to-tau fakes reconstructed as decay
//! mode 1, so the codes are rederived from the generator collections.

use crate::kinematics::delta_r;

/// Flat generator-particle arrays for one event, indexed by object position.
#[derive(Debug, Clone, Copy)]
pub struct GenColumns<'a> {
    /// Transverse momentum.
    pub pt: &'a [f64],
    /// Pseudorapidity.
    pub eta: &'a [f64],
    /// Azimuthal angle.
    pub phi: &'a [f64],
    /// PDG identifier.
    pub pdg_id: &'a [i32],
    /// Generator status.
    pub status: &'a [i32],
    /// Packed status-flag bits.
    pub status_flags: &'a [u32],
}

/// Visible hadronic gen-tau kinematics for one event.
#[derive(Debug, Clone, Copy)]
pub struct GenVisTaus<'a> {
    /// Pseudorapidity.
    pub eta: &'a [f64],
    /// Azimuthal angle.
    pub phi: &'a [f64],
}

/// Check a packed status-flag bit.
pub fn has_bit(bits: u32, bit: u32) -> bool {
    bits & (1 << bit) != 0
}

const IS_PROMPT: u32 = 0;
const IS_DIRECT_PROMPT_TAU_DECAY_PRODUCT: u32 = 5;

/// Match a reconstructed tau to the generator record.
///
/// Codes: 1/2 prompt electron/muon, 3/4 electron/muon from a prompt tau
/// decay, 5 visible hadronic gen tau, 0 unmatched. The nearest match inside
/// a shrinking dR cone of 0.2 wins; generator particles with `pt < 8` or
/// `status != 1` (muons exempt) are skipped.
pub fn genmatch(
    reco_eta: f64,
    reco_phi: f64,
    parts: &GenColumns<'_>,
    vis_taus: &GenVisTaus<'_>,
) -> u8 {
    let mut code = 0u8;
    let mut dr_min = 0.2;

    for i in 0..parts.pt.len() {
        let pid = parts.pdg_id[i].abs();
        if (parts.status[i] != 1 && pid != 13) || parts.pt[i] < 8.0 {
            continue;
        }
        let dr = delta_r(reco_eta, reco_phi, parts.eta[i], parts.phi[i]);
        if dr >= dr_min {
            continue;
        }
        if has_bit(parts.status_flags[i], IS_PROMPT) {
            if pid == 11 {
                code = 1;
                dr_min = dr;
            } else if pid == 13 {
                code = 2;
                dr_min = dr;
            }
        } else if has_bit(parts.status_flags[i], IS_DIRECT_PROMPT_TAU_DECAY_PRODUCT) {
            if pid == 11 {
                code = 3;
                dr_min = dr;
            } else if pid == 13 {
                code = 4;
                dr_min = dr;
            }
        }
    }

    for i in 0..vis_taus.eta.len() {
        let dr = delta_r(reco_eta, reco_phi, vis_taus.eta[i], vis_taus.phi[i]);
        if dr < dr_min {
            dr_min = dr;
            code = 5;
        }
    }

    code
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROMPT: u32 = 1 << IS_PROMPT;
    const TAU_PRODUCT: u32 = 1 << IS_DIRECT_PROMPT_TAU_DECAY_PRODUCT;

    struct Event {
        pt: Vec<f64>,
        eta: Vec<f64>,
        phi: Vec<f64>,
        pdg_id: Vec<i32>,
        status: Vec<i32>,
        status_flags: Vec<u32>,
        vis_eta: Vec<f64>,
        vis_phi: Vec<f64>,
    }

    impl Event {
        fn empty() -> Self {
            Event {
                pt: vec![],
                eta: vec![],
                phi: vec![],
                pdg_id: vec![],
                status: vec![],
                status_flags: vec![],
                vis_eta: vec![],
                vis_phi: vec![],
            }
        }

        fn with_part(mut self, pt: f64, eta: f64, pdg_id: i32, status: i32, flags: u32) -> Self {
            self.pt.push(pt);
            self.eta.push(eta);
            self.phi.push(0.0);
            self.pdg_id.push(pdg_id);
            self.status.push(status);
            self.status_flags.push(flags);
            self
        }

        fn with_vis_tau(mut self, eta: f64) -> Self {
            self.vis_eta.push(eta);
            self.vis_phi.push(0.0);
            self
        }

        fn matched(&self, reco_eta: f64) -> u8 {
            let parts = GenColumns {
                pt: &self.pt,
                eta: &self.eta,
                phi: &self.phi,
                pdg_id: &self.pdg_id,
                status: &self.status,
                status_flags: &self.status_flags,
            };
            let vis = GenVisTaus { eta: &self.vis_eta, phi: &self.vis_phi };
            genmatch(reco_eta, 0.0, &parts, &vis)
        }
    }

    #[test]
    fn prompt_electron_is_code_one() {
        let ev = Event::empty().with_part(20.0, 0.05, 11, 1, PROMPT);
        assert_eq!(ev.matched(0.0), 1);
    }

    #[test]
    fn tau_decay_muon_is_code_four() {
        let ev = Event::empty().with_part(20.0, 0.05, -13, 1, TAU_PRODUCT);
        assert_eq!(ev.matched(0.0), 4);
    }

    #[test]
    fn vis_tau_wins_when_closer() {
        let ev = Event::empty().with_part(20.0, 0.15, 11, 1, PROMPT).with_vis_tau(0.02);
        assert_eq!(ev.matched(0.0), 5);
    }

    #[test]
    fn closer_lepton_beats_farther_vis_tau() {
        let ev = Event::empty().with_part(20.0, 0.02, 13, 1, PROMPT).with_vis_tau(0.15);
        assert_eq!(ev.matched(0.0), 2);
    }

    #[test]
    fn soft_and_nonfinal_particles_skipped() {
        // below the 8 GeV floor
        let ev = Event::empty().with_part(5.0, 0.0, 11, 1, PROMPT);
        assert_eq!(ev.matched(0.0), 0);
        // non-final electron is skipped, non-final muon is not
        let ev = Event::empty().with_part(20.0, 0.0, 11, 23, PROMPT);
        assert_eq!(ev.matched(0.0), 0);
        let ev = Event::empty().with_part(20.0, 0.0, 13, 23, PROMPT);
        assert_eq!(ev.matched(0.0), 2);
    }

    #[test]
    fn outside_cone_is_unmatched() {
        let ev = Event::empty().with_part(20.0, 0.5, 11, 1, PROMPT).with_vis_tau(0.5);
        assert_eq!(ev.matched(0.0), 0);
    }
}
