//! The `submit` subcommand: fan ntuple production out over datasets.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use tp_core::Channel;

use crate::{filelist, jobs, samples};

/// Arguments of the `submit` subcommand.
#[derive(Args)]
pub(crate) struct SubmitArgs {
    /// Sample list: one dataset pattern per line, '#' comments
    #[arg(short, long, default_value = "samples.cfg")]
    pub(crate) samples: PathBuf,

    /// Channel to submit
    #[arg(short, long, default_value = "mutau")]
    pub(crate) channel: Channel,

    /// Only process datasets matching this filter (substring or wildcard)
    #[arg(long)]
    pub(crate) sample: Option<String>,

    /// Number of input files per job
    #[arg(short = 'n', long, default_value = "4")]
    pub(crate) nfiles: usize,

    /// Base directory for per-dataset output, logs, and joblists
    #[arg(short, long, default_value = ".")]
    pub(crate) outdir: PathBuf,

    /// Batch runner script passed to qsub
    #[arg(long, default_value = "psibatch_runner.sh")]
    pub(crate) batch_script: String,

    /// External catalog command used for non-local dataset patterns
    #[arg(long, default_value = "das_client")]
    pub(crate) catalog_cmd: String,

    /// Prefix prepended to catalog-resolved file paths
    #[arg(long, default_value = "root://cms-xrd-global.cern.ch/")]
    pub(crate) remote_prefix: String,

    /// Worker command placed in the joblist
    #[arg(long, default_value = "tauprod-job")]
    pub(crate) worker: String,

    /// Write joblists but do not invoke the batch system
    #[arg(long)]
    pub(crate) dry_run: bool,

    /// Submit without interactive confirmation
    #[arg(short, long)]
    pub(crate) force: bool,
}

/// Diboson samples are large enough that one file per job is forced.
const ONE_FILE_JOBS: [&str; 3] = ["WW", "WZ", "ZZ"];

pub(crate) fn run(args: &SubmitArgs) -> Result<()> {
    let patterns = samples::read_sample_list(&args.samples)?;
    let filter = samples::SampleFilter::new(args.sample.as_deref())?;

    for pattern in &patterns {
        if !samples::channel_accepts(args.channel, pattern) {
            tracing::debug!(%pattern, channel = %args.channel, "dataset excluded for channel");
            continue;
        }
        if !filter.accepts(pattern) {
            continue;
        }

        let (files, local) =
            match filelist::resolve(pattern, &args.catalog_cmd, &args.remote_prefix) {
                Ok(resolved) => resolved,
                Err(err) => {
                    tracing::warn!(%pattern, error = %err, "file-list resolution failed, skipping dataset");
                    continue;
                }
            };
        if files.is_empty() {
            tracing::warn!(%pattern, "empty file list, skipping dataset");
            continue;
        }

        let dataset = samples::dataset_name(pattern, local);
        let job_name = samples::job_name(pattern, local);
        let mut nfiles = args.nfiles;
        if nfiles > 1 && ONE_FILE_JOBS.contains(&job_name.as_str()) {
            tracing::warn!(job = job_name.as_str(), "forcing one file per job");
            nfiles = 1;
        }

        let dataset_dir = args.outdir.join(&dataset);
        let logs_dir = dataset_dir.join("logs");
        std::fs::create_dir_all(&logs_dir)
            .with_context(|| format!("create {}", logs_dir.display()))?;

        let chunks = jobs::split_chunks(&files, nfiles);
        let joblist = jobs::write_joblist(
            &args.outdir.join("joblist"),
            &dataset,
            args.channel,
            &chunks,
            &args.worker,
            &dataset_dir,
        )?;
        tracing::info!(
            dataset = dataset.as_str(),
            files = files.len(),
            jobs = joblist.n_chunks,
            joblist = %joblist.path.display(),
            "joblist written"
        );

        if !args.dry_run
            && !args.force
            && !confirm(&format!("Submit {} jobs for {dataset}?", joblist.n_chunks))?
        {
            tracing::info!(dataset = dataset.as_str(), "not submitting");
            continue;
        }
        jobs::submit(
            &job_name,
            &joblist.path,
            joblist.n_chunks,
            &logs_dir,
            &args.batch_script,
            args.dry_run,
        )?;
    }

    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt} [y/n] ");
    std::io::stdout().flush().context("flush stdout")?;
    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer).context("read confirmation")?;
    Ok(answer.trim().eq_ignore_ascii_case("y"))
}
