//! Job chunking, joblist creation, and array-job submission.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{Context, Result, bail};

use tp_core::Channel;

/// Split `files` into consecutive chunks of at most `size` entries.
pub(crate) fn split_chunks(files: &[String], size: usize) -> Vec<Vec<String>> {
    let size = size.max(1);
    files.chunks(size).map(|c| c.to_vec()).collect()
}

/// A written joblist: one worker command line per chunk.
pub(crate) struct Joblist {
    pub(crate) path: PathBuf,
    pub(crate) n_chunks: usize,
}

/// Write the joblist for one dataset. Each line is
/// `<worker> <files,comma,joined> <outdir> <dataset> <chunk> <channel>`.
pub(crate) fn write_joblist(
    joblist_dir: &Path,
    dataset: &str,
    channel: Channel,
    chunks: &[Vec<String>],
    worker: &str,
    outdir: &Path,
) -> Result<Joblist> {
    std::fs::create_dir_all(joblist_dir)
        .with_context(|| format!("create {}", joblist_dir.display()))?;
    let path = joblist_dir.join(format!("joblist_{dataset}_{channel}.txt"));
    let mut out = std::fs::File::create(&path)
        .with_context(|| format!("create joblist {}", path.display()))?;
    for (chunk, files) in chunks.iter().enumerate() {
        writeln!(
            out,
            "{worker} {} {} {dataset} {chunk} {channel}",
            files.join(","),
            outdir.display()
        )
        .with_context(|| format!("write joblist {}", path.display()))?;
    }
    Ok(Joblist { path, n_chunks: chunks.len() })
}

/// Submit the joblist as a `qsub` array job. With `dry_run` the command is
/// logged but not executed.
pub(crate) fn submit(
    job_name: &str,
    joblist: &Path,
    n_chunks: usize,
    logs_dir: &Path,
    batch_script: &str,
    dry_run: bool,
) -> Result<()> {
    let args = [
        "-t".to_string(),
        format!("1-{n_chunks}"),
        "-N".to_string(),
        job_name.to_string(),
        "-o".to_string(),
        logs_dir.display().to_string(),
        batch_script.to_string(),
        joblist.display().to_string(),
    ];
    tracing::info!(jobs = n_chunks, cmd = %format!("qsub {}", args.join(" ")), "submitting");
    if dry_run {
        return Ok(());
    }
    let status = Command::new("qsub").args(&args).status().context("run qsub")?;
    if !status.success() {
        bail!("qsub exited with {status}");
    }
    Ok(())
}
