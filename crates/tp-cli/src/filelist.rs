//! Dataset-pattern resolution to input file lists.

use std::path::Path;
use std::process::Command;

use anyhow::{Context, Result, bail};

/// Resolve a dataset pattern to a list of `.root` files.
///
/// A pattern naming an existing local directory is listed directly (sorted,
/// so chunking is reproducible); anything else is resolved through the
/// external catalog command. Returns the files and whether the resolution
/// was local.
pub(crate) fn resolve(
    pattern: &str,
    catalog_cmd: &str,
    remote_prefix: &str,
) -> Result<(Vec<String>, bool)> {
    let path = Path::new(pattern);
    if path.is_dir() {
        Ok((list_local(path)?, true))
    } else {
        Ok((query_catalog(pattern, catalog_cmd, remote_prefix)?, false))
    }
}

fn list_local(dir: &Path) -> Result<Vec<String>> {
    let rd = std::fs::read_dir(dir).with_context(|| format!("read_dir {}", dir.display()))?;
    let mut files = Vec::new();
    for entry in rd {
        let entry = entry.with_context(|| format!("iter dir {}", dir.display()))?;
        let path = entry.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("root") {
            files.push(path.display().to_string());
        }
    }
    files.sort();
    Ok(files)
}

fn query_catalog(dataset: &str, catalog_cmd: &str, remote_prefix: &str) -> Result<Vec<String>> {
    // user datasets live in the phys03 instance
    let instance = if dataset.contains("USER") { "prod/phys03" } else { "prod/global" };
    let query = format!("--query=file dataset={dataset} instance={instance} status=*");
    tracing::debug!(cmd = catalog_cmd, query = query.as_str(), "querying catalog");

    let output = Command::new(catalog_cmd)
        .arg("--limit=0")
        .arg(&query)
        .output()
        .with_context(|| format!("run catalog command '{catalog_cmd}'"))?;
    if !output.status.success() {
        bail!("catalog command '{catalog_cmd}' failed with {}", output.status);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout
        .lines()
        .map(str::trim)
        .filter(|line| line.contains(".root"))
        .map(|line| format!("{remote_prefix}{line}"))
        .collect())
}
