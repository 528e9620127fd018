//! Best-candidate-pair selection with deterministic tie-breaking.

use std::cmp::Ordering;

use tp_core::{Error, Result};

/// A candidate object pair built from one event's flat object arrays.
///
/// Created fresh per event and discarded once the winner is extracted; the
/// indices refer back into the event's object collections.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Index of the first object in its input collection.
    pub idx1: usize,
    /// Index of the second object in its input collection.
    pub idx2: usize,
    /// Transverse momentum of the first object.
    pub pt1: f64,
    /// Transverse momentum of the second object.
    pub pt2: f64,
    /// Isolation of the first object (relative isolation for leptons, raw
    /// discriminant for hadronic taus).
    pub iso1: f64,
    /// Isolation of the second object.
    pub iso2: f64,
}

/// What the two slots of a pair hold; fixes the isolation tie-break
/// directions.
///
/// Lepton isolation ranks ascending (smaller is cleaner), a hadronic-tau
/// discriminant ranks descending (larger is better). One comparator
/// parameterised by this tag replaces per-channel ordering overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairKind {
    /// Two light leptons.
    Dilepton,
    /// Light lepton first, hadronic tau second.
    LeptonTau,
    /// Two hadronic taus.
    DiTau,
}

impl PairKind {
    /// Compare two candidates; `Ordering::Greater` means `a` is preferred.
    ///
    /// Criteria in order: pt1 (higher wins), pt2 (higher wins), iso1, iso2
    /// with the direction given by the slot kind.
    pub fn compare(self, a: &Candidate, b: &Candidate) -> Ordering {
        let by_pt1 = a.pt1.total_cmp(&b.pt1);
        if by_pt1 != Ordering::Equal {
            return by_pt1;
        }
        let by_pt2 = a.pt2.total_cmp(&b.pt2);
        if by_pt2 != Ordering::Equal {
            return by_pt2;
        }
        let by_iso1 = match self {
            PairKind::Dilepton | PairKind::LeptonTau => b.iso1.total_cmp(&a.iso1),
            PairKind::DiTau => a.iso1.total_cmp(&b.iso1),
        };
        if by_iso1 != Ordering::Equal {
            return by_iso1;
        }
        match self {
            PairKind::Dilepton => b.iso2.total_cmp(&a.iso2),
            PairKind::LeptonTau | PairKind::DiTau => a.iso2.total_cmp(&b.iso2),
        }
    }
}

/// Pick the single best pair out of a non-empty candidate list.
///
/// Returns [`Error::EmptyCandidates`] on empty input; a singleton list
/// short-circuits to its element without invoking the comparison. Ties that
/// exhaust all four criteria resolve to the first-seen candidate, so the
/// result is stable and calling twice on the same list yields the same
/// winner.
pub fn select_best(kind: PairKind, candidates: &[Candidate]) -> Result<&Candidate> {
    let (first, rest) = candidates.split_first().ok_or(Error::EmptyCandidates)?;
    if rest.is_empty() {
        return Ok(first);
    }
    let mut best = first;
    for candidate in rest {
        if kind.compare(candidate, best) == Ordering::Greater {
            best = candidate;
        }
    }
    Ok(best)
}
