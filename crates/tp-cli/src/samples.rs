//! Sample-list parsing and dataset filtering.

use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

use tp_core::Channel;

/// Read a plaintext sample list: one dataset pattern per line, lines
/// containing `#` and blank lines are skipped.
pub(crate) fn read_sample_list(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read sample list {}", path.display()))?;
    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.contains('#'))
        .map(str::to_string)
        .collect())
}

/// Dataset exclusion rules per channel, keyed on the primary dataset name.
pub(crate) fn channel_accepts(channel: Channel, pattern: &str) -> bool {
    match channel {
        Channel::TauTau => {
            !(pattern.contains("/SingleMuon") || pattern.contains("/SingleElectron"))
        }
        Channel::MuTau | Channel::MuMu | Channel::EleMu => {
            !(pattern.contains("/SingleElectron") || pattern.contains("/Tau"))
        }
        Channel::EleTau => !(pattern.contains("/SingleMuon") || pattern.contains("/Tau")),
    }
}

/// Optional user filter: plain substring, or a `*`/`?` wildcard matched
/// anywhere in the pattern.
pub(crate) enum SampleFilter {
    All,
    Substring(String),
    Wildcard(Regex),
}

impl SampleFilter {
    pub(crate) fn new(filter: Option<&str>) -> Result<Self> {
        match filter {
            None => Ok(SampleFilter::All),
            Some(f) if f.contains('*') || f.contains('?') => {
                let mut re = String::from(".*");
                for ch in f.chars() {
                    match ch {
                        '*' => re.push_str(".*"),
                        '?' => re.push('.'),
                        c => re.push_str(&regex::escape(&c.to_string())),
                    }
                }
                re.push_str(".*");
                let re = Regex::new(&re).with_context(|| format!("compile filter '{f}'"))?;
                Ok(SampleFilter::Wildcard(re))
            }
            Some(f) => Ok(SampleFilter::Substring(f.to_string())),
        }
    }

    pub(crate) fn accepts(&self, pattern: &str) -> bool {
        match self {
            SampleFilter::All => true,
            SampleFilter::Substring(sub) => pattern.contains(sub.as_str()),
            SampleFilter::Wildcard(re) => re.is_match(pattern),
        }
    }
}

/// Dataset short name used for output directories and joblist files:
/// the first three path components joined with `__` for catalog patterns,
/// the directory name for local patterns.
pub(crate) fn dataset_name(pattern: &str, local: bool) -> String {
    let parts: Vec<&str> = pattern.split('/').filter(|p| !p.is_empty()).collect();
    if local {
        parts.last().map(|p| p.to_string()).unwrap_or_else(|| pattern.to_string())
    } else {
        parts.iter().take(3).copied().collect::<Vec<_>>().join("__")
    }
}

/// Batch job name: the primary dataset name truncated at the first `_`
/// (e.g. `WW_TuneCP5...` becomes `WW`).
pub(crate) fn job_name(pattern: &str, local: bool) -> String {
    let parts: Vec<&str> = pattern.split('/').filter(|p| !p.is_empty()).collect();
    let primary = if local { parts.last() } else { parts.first() };
    let primary = primary.copied().unwrap_or(pattern);
    primary.split('_').next().unwrap_or(primary).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_rules_match_dataset_kind() {
        assert!(!channel_accepts(Channel::EleTau, "/SingleMuon/Run2017B/NANOAOD"));
        assert!(channel_accepts(Channel::EleTau, "/SingleElectron/Run2017B/NANOAOD"));
        assert!(!channel_accepts(Channel::MuTau, "/Tau/Run2017B/NANOAOD"));
        assert!(!channel_accepts(Channel::TauTau, "/SingleElectron/Run2017B/NANOAOD"));
        assert!(channel_accepts(Channel::TauTau, "/Tau/Run2017B/NANOAOD"));
        assert!(channel_accepts(Channel::MuMu, "/SingleMuon/Run2017B/NANOAOD"));
    }

    #[test]
    fn wildcard_filter_compiles_to_regex() {
        let f = SampleFilter::new(Some("DY*Jets")).unwrap();
        assert!(f.accepts("/DYJetsToLL/x/y"));
        assert!(f.accepts("/DY2JetsToLL/x/y"));
        assert!(!f.accepts("/WJetsToLNu/x/y"));
    }

    #[test]
    fn substring_filter() {
        let f = SampleFilter::new(Some("SingleMuon")).unwrap();
        assert!(f.accepts("/SingleMuon/Run2017B/NANOAOD"));
        assert!(!f.accepts("/Tau/Run2017B/NANOAOD"));
        assert!(SampleFilter::new(None).unwrap().accepts("anything"));
    }

    #[test]
    fn names_from_catalog_pattern() {
        let p = "/DYJetsToLL_M-50/RunIIFall17-v1/NANOAODSIM";
        assert_eq!(dataset_name(p, false), "DYJetsToLL_M-50__RunIIFall17-v1__NANOAODSIM");
        assert_eq!(job_name(p, false), "DYJetsToLL");
        assert_eq!(job_name("/WW_TuneCP5_13TeV/x/y", false), "WW");
    }

    #[test]
    fn names_from_local_pattern() {
        assert_eq!(dataset_name("/data/store/DYJets", true), "DYJets");
        assert_eq!(job_name("/data/store/WZ_part2", true), "WZ");
    }
}
