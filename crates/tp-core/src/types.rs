//! Common configuration types for tauprod

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Analysis channel: which pair of physics objects the producer selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Muon + hadronic tau.
    MuTau,
    /// Electron + hadronic tau.
    EleTau,
    /// Two hadronic taus.
    TauTau,
    /// Two muons.
    MuMu,
    /// Electron + muon.
    EleMu,
}

impl Channel {
    /// Lower-case channel name as used in file names and job lists.
    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::MuTau => "mutau",
            Channel::EleTau => "eletau",
            Channel::TauTau => "tautau",
            Channel::MuMu => "mumu",
            Channel::EleMu => "elemu",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mutau" => Ok(Channel::MuTau),
            "eletau" => Ok(Channel::EleTau),
            "tautau" => Ok(Channel::TauTau),
            "mumu" => Ok(Channel::MuMu),
            "elemu" | "muele" => Ok(Channel::EleMu),
            other => Err(Error::Validation(format!("unknown channel: '{other}'"))),
        }
    }
}

/// Year-dependent input field names, resolved once at startup.
///
/// The electron MVA-isolation identification was retrained between data-taking
/// years, and the retrained fields carry a `V2` infix. Consumers read the
/// names from this record instead of patching a shared mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldNames {
    /// Data-taking year this record was resolved for.
    pub year: u16,
    /// Electron MVA-isolation discriminant.
    pub ele_mva_iso: &'static str,
    /// Loose working point flag.
    pub ele_mva_iso_wpl: &'static str,
    /// 80% efficiency working point flag.
    pub ele_mva_iso_wp80: &'static str,
    /// 90% efficiency working point flag.
    pub ele_mva_iso_wp90: &'static str,
}

impl FieldNames {
    /// Resolve the field names for a data-taking year.
    ///
    /// 2016 and 2018 samples carry the `V2` retraining; 2017 keeps the
    /// original names.
    pub fn for_year(year: u16) -> Self {
        if year == 2016 || year == 2018 {
            FieldNames {
                year,
                ele_mva_iso: "Electron_mvaFall17V2Iso",
                ele_mva_iso_wpl: "Electron_mvaFall17V2Iso_WPL",
                ele_mva_iso_wp80: "Electron_mvaFall17V2Iso_WP80",
                ele_mva_iso_wp90: "Electron_mvaFall17V2Iso_WP90",
            }
        } else {
            FieldNames {
                year,
                ele_mva_iso: "Electron_mvaFall17Iso",
                ele_mva_iso_wpl: "Electron_mvaFall17Iso_WPL",
                ele_mva_iso_wp80: "Electron_mvaFall17Iso_WP80",
                ele_mva_iso_wp90: "Electron_mvaFall17Iso_WP90",
            }
        }
    }
}
