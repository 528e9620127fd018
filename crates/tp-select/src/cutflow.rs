//! Bookkeeping counters: labelled cutflow stages and the pileup profile.

use serde::Serialize;

/// Sequential selection bookkeeping with labelled stages.
///
/// Each stage records an unweighted entry count and a weighted sum, the
/// same two views the labelled cutflow histogram carried.
#[derive(Debug, Clone, Serialize)]
pub struct Cutflow {
    labels: Vec<String>,
    counts: Vec<u64>,
    weighted: Vec<f64>,
}

impl Cutflow {
    /// Create a cutflow with the given ordered stage labels.
    pub fn new(stages: &[&str]) -> Self {
        Cutflow {
            labels: stages.iter().map(|s| s.to_string()).collect(),
            counts: vec![0; stages.len()],
            weighted: vec![0.0; stages.len()],
        }
    }

    /// Record one unweighted entry for `stage`.
    pub fn fill(&mut self, stage: usize) {
        self.fill_weighted(stage, 1.0);
    }

    /// Record one entry for `stage` with the given weight.
    /// Out-of-range stages are dropped.
    pub fn fill_weighted(&mut self, stage: usize, weight: f64) {
        if let Some(count) = self.counts.get_mut(stage) {
            *count += 1;
            self.weighted[stage] += weight;
        }
    }

    /// Unweighted entries recorded for `stage`.
    pub fn count(&self, stage: usize) -> u64 {
        self.counts.get(stage).copied().unwrap_or(0)
    }

    /// Weighted sum recorded for `stage`.
    pub fn weighted(&self, stage: usize) -> f64 {
        self.weighted.get(stage).copied().unwrap_or(0.0)
    }

    /// Stage labels in fill order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of stages.
    pub fn n_stages(&self) -> usize {
        self.labels.len()
    }
}

/// Pileup bookkeeping profile: 100 unit bins over [0, 100).
#[derive(Debug, Clone, Serialize)]
pub struct PileupProfile {
    content: Vec<f64>,
}

impl PileupProfile {
    /// Create an empty profile.
    pub fn new() -> Self {
        PileupProfile { content: vec![0.0; 100] }
    }

    /// Record one event's true number of interactions.
    /// Entries outside [0, 100) are dropped.
    pub fn fill(&mut self, n_true_int: f64) {
        if n_true_int >= 0.0 && n_true_int < self.content.len() as f64 {
            self.content[n_true_int as usize] += 1.0;
        }
    }

    /// Bin contents.
    pub fn content(&self) -> &[f64] {
        &self.content
    }
}

impl Default for PileupProfile {
    fn default() -> Self {
        Self::new()
    }
}
