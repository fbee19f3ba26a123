mod commands;
mod terminal;

use anyhow::Context;
use commands::CommandLine;
use massres_common::config::Config;
use massres_core::pipeline::{self, PipelineError, RunSummary};
use massres_core::resolver::SystemResolver;
use tracing::{debug, error};

use crate::terminal::logging;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose);

    let cfg: Config = commands.to_config();
    if !cfg.has_input() {
        CommandLine::print_usage().context("printing usage")?;
        return Ok(());
    }

    let resolver = SystemResolver::from_system_conf();

    tokio::select! {
        res = pipeline::run(&cfg, &resolver, std::io::stdout()) => finish(res),
        Ok(()) = tokio::signal::ctrl_c() => {
            // A blocked stdin read would keep the runtime from shutting down.
            std::process::exit(0);
        }
    }
}

fn finish(res: Result<RunSummary, PipelineError>) -> anyhow::Result<()> {
    match res {
        Ok(summary) => {
            debug!("{summary:?}");
            Ok(())
        }
        // Exits with success, the same as a completed run.
        Err(PipelineError::Input(e)) => {
            error!("Error accessing file");
            debug!("{e}");
            Ok(())
        }
        Err(e) => Err(e).context("mass resolve failed"),
    }
}
