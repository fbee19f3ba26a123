use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, ArgMatches, CommandFactory, FromArgMatches, Parser};
use massres_common::config::{Config, InputSource};

use crate::terminal::banner::{BANNER, EXAMPLES};

#[derive(Parser, Debug)]
#[command(name = "massres", version)]
#[command(about = "Mass resolve FQDNs from standard input or from files.")]
#[command(before_help = BANNER, after_help = EXAMPLES)]
pub struct CommandLine {
    /// Read hostnames from standard input
    #[arg(short = 'i', long = "stdin")]
    pub stdin: bool,

    /// Read hostnames from a file, one per line (repeatable)
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    /// Save successful resolutions as a Markdown table
    #[arg(short = 's', long = "save", value_name = "PATH")]
    pub save: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    /// Input sources in the order they were given.
    #[arg(skip)]
    sources: Vec<InputSource>,
}

impl CommandLine {
    /// Parses the process arguments, exiting on `--help`, `--version` or a usage error.
    pub fn parse_args() -> Self {
        Self::try_parse_from_args(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    pub fn try_parse_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        let mut commands = Self::from_arg_matches(&matches)?;
        commands.sources = ordered_sources(&matches, &commands);
        Ok(commands)
    }

    pub fn print_usage() -> std::io::Result<()> {
        Self::command().print_help()
    }

    pub fn to_config(&self) -> Config {
        Config {
            sources: self.sources.clone(),
            save_path: self.save.clone(),
        }
    }
}

fn ordered_sources(matches: &ArgMatches, commands: &CommandLine) -> Vec<InputSource> {
    let mut indexed: Vec<(usize, InputSource)> = Vec::new();

    if commands.stdin {
        let idx = matches.index_of("stdin").unwrap_or(0);
        indexed.push((idx, InputSource::Stdin));
    }

    if let Some(indices) = matches.indices_of("files") {
        indexed.extend(
            indices.zip(commands.files.iter().cloned().map(InputSource::File)),
        );
    }

    indexed.sort_by_key(|(idx, _)| *idx);
    indexed.into_iter().map(|(_, source)| source).collect()
}
