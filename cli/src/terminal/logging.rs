use std::io::IsTerminal;

use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

/// Renders events as `[+] message`.
///
/// The status symbol is coloured by level only when the writer accepts ANSI
/// escapes, so redirected stderr stays plain text.
pub struct MassresFormatter;

fn status_symbol(level: &Level) -> &'static str {
    match *level {
        Level::TRACE => "[ ]",
        Level::DEBUG => "[?]",
        Level::INFO => "[+]",
        Level::WARN => "[*]",
        Level::ERROR => "[-]",
    }
}

fn paint(level: &Level, symbol: &str) -> ColoredString {
    match *level {
        Level::TRACE => symbol.dimmed(),
        Level::DEBUG => symbol.blue(),
        Level::INFO => symbol.green().bold(),
        Level::WARN => symbol.yellow().bold(),
        Level::ERROR => symbol.red().bold(),
    }
}

impl<S, N> FormatEvent<S, N> for MassresFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let level = event.metadata().level();
        let symbol = status_symbol(level);

        if writer.has_ansi_escapes() {
            write!(writer, "{} ", paint(level, symbol))?;
        } else {
            write!(writer, "{symbol} ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Installs the global subscriber. Everything goes to stderr so stdout only ever
/// carries resolution lines.
///
/// `RUST_LOG` takes precedence over `-v`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_ansi(std::io::stderr().is_terminal())
        .event_format(MassresFormatter)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
