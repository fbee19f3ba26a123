//! Line source -> sanitizer -> validator -> resolver -> reporter.
//!
//! Everything runs in one sequential pass. A line either resolves and is printed
//! straight away, or it is skipped without a trace on stdout. Only input access,
//! stdout and the final report write can fail a run.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use massres_common::config::Config;
use massres_common::hostname;
use massres_common::resolution::{Outcome, Resolution, ResolveError, SkipReason};
use thiserror::Error;
use tracing::{debug, info};

use crate::input::{InputError, LineSource};
use crate::report::{ReportError, ResultTable};
use crate::resolver::Ipv4Resolver;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error("cannot write to stdout: {0}")]
    Output(#[from] io::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Raw lines read across all sources.
    pub lines: usize,
    pub resolved: usize,
    /// Where the report went, if one was written.
    pub saved: Option<PathBuf>,
}

/// Cleans, validates and resolves one raw line.
///
/// The resolver is only consulted for lines that pass validation.
pub async fn resolve_line<R>(raw: &str, resolver: &R) -> Outcome
where
    R: Ipv4Resolver + ?Sized,
{
    let host = hostname::clean(raw);
    if !hostname::is_valid_hostname(host.as_str()) {
        return Outcome::Skipped(SkipReason::Invalid);
    }

    match resolver.lookup_ipv4(&host).await {
        Ok(addresses) => match Resolution::new(host, addresses) {
            Some(resolution) => Outcome::Resolved(resolution),
            None => Outcome::Skipped(SkipReason::Unresolved(ResolveError::NoRecords)),
        },
        Err(e) => Outcome::Skipped(SkipReason::Unresolved(e)),
    }
}

/// Per-run state: the printer, the optional table and the counters.
pub struct Pipeline<'a, R: ?Sized, W> {
    resolver: &'a R,
    out: W,
    table: Option<ResultTable>,
    summary: RunSummary,
}

impl<'a, R, W> Pipeline<'a, R, W>
where
    R: Ipv4Resolver + ?Sized,
    W: Write,
{
    pub fn new(resolver: &'a R, out: W, collect_table: bool) -> Self {
        Self {
            resolver,
            out,
            table: collect_table.then(ResultTable::new),
            summary: RunSummary::default(),
        }
    }

    /// Drains `lines`, printing every resolution as soon as it arrives.
    pub async fn consume(&mut self, lines: &mut LineSource) -> Result<(), PipelineError> {
        while let Some(raw) = lines.next_line().await? {
            self.summary.lines += 1;
            match resolve_line(&raw, self.resolver).await {
                Outcome::Resolved(resolution) => self.report(resolution)?,
                Outcome::Skipped(reason) => {
                    debug!("Skipping {:?}: {reason}", raw.trim_end());
                }
            }
        }
        Ok(())
    }

    fn report(&mut self, resolution: Resolution) -> Result<(), PipelineError> {
        writeln!(self.out, "{resolution}")?;
        self.out.flush()?;
        self.summary.resolved += 1;
        if let Some(table) = self.table.as_mut() {
            table.push(&resolution);
        }
        Ok(())
    }

    pub fn table(&self) -> Option<&ResultTable> {
        self.table.as_ref()
    }

    /// Saves the table when one was collected, it has rows and `save_path` is set.
    pub fn finish(self, save_path: Option<&Path>) -> Result<RunSummary, PipelineError> {
        let mut summary = self.summary;
        if let (Some(table), Some(path)) = (self.table, save_path) {
            if table.is_empty() {
                info!("Nothing resolved, not writing {}", path.display());
            } else {
                table.save(path)?;
                summary.saved = Some(path.to_path_buf());
            }
        }
        info!("{} of {} lines resolved", summary.resolved, summary.lines);
        Ok(summary)
    }
}

/// Runs every configured source in order and writes the report at the end.
///
/// An input source that cannot be opened or read aborts the run before the
/// report is written.
pub async fn run<R, W>(cfg: &Config, resolver: &R, out: W) -> Result<RunSummary, PipelineError>
where
    R: Ipv4Resolver + ?Sized,
    W: Write,
{
    let mut pipeline = Pipeline::new(resolver, out, cfg.save_enabled());
    for source in &cfg.sources {
        let mut lines = LineSource::open(source).await?;
        pipeline.consume(&mut lines).await?;
    }
    pipeline.finish(cfg.save_path.as_deref())
}
