//! # tp-select
//!
//! Per-event candidate handling: deterministic best-pair selection,
//! kinematic helper functions over flat per-object arrays, generator-level
//! tau matching, and cutflow/pileup bookkeeping.
//!
//! The selector is a total, stable function: given the same candidate list
//! it always returns the same winner, which the downstream weight
//! computation and output records rely on.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod candidate;
pub mod cutflow;
pub mod genmatch;
pub mod kinematics;

pub use candidate::{Candidate, PairKind, select_best};
pub use cutflow::{Cutflow, PileupProfile};
pub use genmatch::{GenColumns, GenVisTaus, genmatch, has_bit};
