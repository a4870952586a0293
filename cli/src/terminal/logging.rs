use colored::*;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::{self, Writer};
use tracing_subscriber::fmt::{FmtContext, FormatEvent};
use tracing_subscriber::registry::LookupSpan;

/// One line per event: a coloured level glyph, then the message.
///
/// Debug and trace events also name the module that emitted them, so `-v` output shows whether
/// a line came from discovery or the broadcaster.
pub struct LanwakeFormatter;

fn glyph(level: &Level) -> ColoredString {
    match *level {
        Level::ERROR => "[-]".red().bold(),
        Level::WARN => "[*]".yellow().bold(),
        Level::INFO => "[+]".green().bold(),
        Level::DEBUG => "[?]".blue(),
        Level::TRACE => "[ ]".dimmed(),
    }
}

impl<S, N> FormatEvent<S, N> for LanwakeFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> format::FormatFields<'a> + 'static,
{
    fn format_event(&self, ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> std::fmt::Result {
        let meta = event.metadata();
        write!(writer, "{} ", glyph(meta.level()))?;

        if *meta.level() >= Level::DEBUG {
            let module = meta.target().rsplit("::").next().unwrap_or_default();
            write!(writer, "{} ", format!("{module}:").bright_black())?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Installs the global subscriber on stderr.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects `debug` over `warn`.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .event_format(LanwakeFormatter)
        .init();
}
