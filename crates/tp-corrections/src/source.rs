//! Named calibration container with `/`-separated key paths.
//!
//! A correction file is a JSON document whose nested objects are addressed
//! the way histogram directories are, e.g.
//! `"IsoMu27_PtEtaBins/abseta_pt_ratio"`. The file is read once at startup;
//! a missing file or key is fatal because a defaulted weight would silently
//! corrupt the physics results downstream.

use std::path::Path;

use serde_json::Value;

use tp_core::{Error, Result};

use crate::curves::EfficiencyCurveSet;
use crate::table::CalibrationTable;

/// An immutable collection of named calibration objects loaded from disk.
#[derive(Debug)]
pub struct CorrectionFile {
    path: String,
    root: Value,
}

impl CorrectionFile {
    /// Open and parse a calibration file.
    ///
    /// Returns [`Error::SourceNotFound`] when the file cannot be read and
    /// [`Error::Json`] when it is not valid JSON.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let bytes =
            std::fs::read(path).map_err(|_| Error::SourceNotFound(display.clone()))?;
        let root: Value = serde_json::from_slice(&bytes)?;
        Ok(CorrectionFile { path: display, root })
    }

    /// Source path, for diagnostics.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Load the 2-D calibration table stored under `key`.
    pub fn table(&self, key: &str) -> Result<CalibrationTable> {
        let mut table: CalibrationTable = serde_json::from_value(self.get(key)?.clone())?;
        if table.name.is_empty() {
            table.name = key.to_string();
        }
        table.validate()?;
        Ok(table)
    }

    /// Load the efficiency-curve set stored under `key`.
    pub fn curve_set(&self, key: &str) -> Result<EfficiencyCurveSet> {
        let mut set: EfficiencyCurveSet = serde_json::from_value(self.get(key)?.clone())?;
        if set.name.is_empty() {
            set.name = key.to_string();
        }
        set.validate()?;
        Ok(set)
    }

    /// Load the 1-D profile (plain array of bin contents) stored under `key`.
    pub fn profile(&self, key: &str) -> Result<Vec<f64>> {
        let profile: Vec<f64> = serde_json::from_value(self.get(key)?.clone())?;
        if profile.is_empty() {
            return Err(Error::Validation(format!("profile '{key}' is empty")));
        }
        Ok(profile)
    }

    fn get(&self, key: &str) -> Result<&Value> {
        let mut node = &self.root;
        for part in key.split('/') {
            node = node.get(part).ok_or_else(|| Error::KeyNotFound {
                file: self.path.clone(),
                key: format!("{part} (in path {key})"),
            })?;
        }
        Ok(node)
    }
}
