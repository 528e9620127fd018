//! # tp-corrections
//!
//! Correction weights for simulated events: scale-factor lookup tables,
//! efficiency-curve ratios, pileup reweighting, and b-tag event weights.
//!
//! All calibration objects are loaded once from a [`CorrectionFile`] before
//! any event is processed and are immutable afterwards. Per-event evaluation
//! never fails: out-of-range coordinates clamp to the boundary bins and a
//! vanishing simulation efficiency falls back to a weight of 1.0.
//!
//! ## Example
//!
//! ```no_run
//! use tp_corrections::{CorrectionFile, ScaleFactor};
//!
//! let f = CorrectionFile::open("corrections/muon_2017.json").unwrap();
//! let trig = ScaleFactor::Table(f.table("IsoMu27_PtEtaBins/abseta_pt_ratio").unwrap());
//! let idiso = ScaleFactor::Curves(f.curve_set("ZMass").unwrap());
//! let combined = ScaleFactor::product(trig, idiso);
//! let weight = combined.evaluate(55.0, -1.2);
//! assert!(weight.is_finite());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod btag;
pub mod curves;
pub mod engine;
pub mod pileup;
pub mod source;
pub mod table;
pub mod weights;

pub use btag::{BTagWeighter, Jet, JetFlavor};
pub use curves::{Curve, EfficiencyCurveSet, EtaBin};
pub use engine::ScaleFactor;
pub use pileup::PileupWeights;
pub use source::CorrectionFile;
pub use table::{AxisOrder, CalibrationTable};
pub use weights::EventWeights;
