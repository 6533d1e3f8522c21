//! Tracing subscriber: console output, the per-command log file, and setup.
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, Write as _};
use std::path::Path;
use std::sync::Mutex;

use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::layer::Context;
use tracing_subscriber::registry::LookupSpan;

use super::utils::{format_utc_datetime, format_utc_time, log_file_path, strip_ansi};

/// Target used for stage headers.
pub(super) const STAGE_TARGET: &str = "dots::stage";

/// Presentation of one event, from its level and target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Stage,
    Error,
    Warn,
    Info,
    Detail,
}

impl LineKind {
    fn of(event: &Event<'_>) -> Self {
        let meta = event.metadata();
        match *meta.level() {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            Level::INFO if meta.target() == STAGE_TARGET => Self::Stage,
            Level::INFO => Self::Info,
            _ => Self::Detail,
        }
    }

    /// Tag written after the timestamp in the log file.
    const fn file_tag(self) -> &'static str {
        match self {
            Self::Stage => "==> ",
            Self::Error => "    [error] ",
            Self::Warn => "    [warn] ",
            Self::Info => "    ",
            Self::Detail => "    [debug] ",
        }
    }

    /// Escape sequences opening and closing the message on a terminal.
    const fn console_frame(self) -> (&'static str, &'static str) {
        match self {
            Self::Stage => ("\x1b[1;34m==>\x1b[0m \x1b[1m", "\x1b[0m"),
            Self::Error => ("\x1b[31merror:\x1b[0m ", ""),
            Self::Warn => ("\x1b[33mwarning:\x1b[0m ", ""),
            Self::Info => ("  ", ""),
            Self::Detail => ("  \x1b[2m", "\x1b[0m"),
        }
    }
}

/// The formatted `message` field of `event`.
fn message_of(event: &Event<'_>) -> String {
    struct Message(String);

    impl Visit for Message {
        fn record_str(&mut self, field: &Field, value: &str) {
            if field.name() == "message" {
                value.clone_into(&mut self.0);
            }
        }

        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{value:?}");
            }
        }
    }

    let mut message = Message(String::new());
    event.record(&mut message);
    message.0
}

/// Layer appending every event it sees to one log file, timestamped and
/// without ANSI escapes.
#[derive(Debug)]
pub(super) struct FileLayer {
    file: Mutex<File>,
}

impl FileLayer {
    /// Open the log file for `command` under the cache directory.
    ///
    /// `None` if the cache directory or the file is unusable; logging then
    /// goes to the console only.
    pub(super) fn new(command: &str) -> Option<Self> {
        Self::at(&log_file_path(command)?)
    }

    /// Start a fresh log at `path` with a one-line run header.
    pub(super) fn at(path: &Path) -> Option<Self> {
        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .ok()?;
        writeln!(
            file,
            "dots {} started {}",
            env!("DOTS_VERSION"),
            format_utc_datetime()
        )
        .ok()?;
        Some(Self {
            file: Mutex::new(file),
        })
    }
}

impl<S: Subscriber> tracing_subscriber::Layer<S> for FileLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let tag = LineKind::of(event).file_tag();
        let message = strip_ansi(&message_of(event));
        if let Ok(mut file) = self.file.lock() {
            // Write failures are dropped.
            let _ = writeln!(file, "[{}] {tag}{message}", format_utc_time());
        }
    }
}

/// Console format: stage arrows, indented info, dimmed debug detail.
struct ConsoleFormat;

impl<S, N> FormatEvent<S, N> for ConsoleFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        _ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let (open, close) = LineKind::of(event).console_frame();
        writeln!(writer, "{open}{}{close}", message_of(event))
    }
}

/// Install the global [`tracing`] subscriber for one `dots` invocation.
///
/// Warnings and errors go to stderr, everything else to stdout. Debug
/// events reach the console only when `verbose` is set, but always land in
/// `$XDG_CACHE_HOME/dots/<command>.log`. Call once, before any logging.
pub fn init_subscriber(verbose: bool, command: &str) {
    use tracing_subscriber::fmt::writer::MakeWriterExt as _;
    use tracing_subscriber::{
        Layer as _, filter::LevelFilter, layer::SubscriberExt as _, util::SubscriberInitExt as _,
    };

    let console_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };
    let console = tracing_subscriber::fmt::layer()
        .event_format(ConsoleFormat)
        .with_writer(io::stderr.with_max_level(Level::WARN).or_else(io::stdout))
        .with_filter(console_level);
    let file = FileLayer::new(command).map(|layer| layer.with_filter(LevelFilter::DEBUG));

    tracing_subscriber::registry().with(console).with(file).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_tags_line_up_under_stage_arrow() {
        assert_eq!(LineKind::Stage.file_tag(), "==> ");
        assert_eq!(LineKind::Info.file_tag(), "    ");
        assert_eq!(LineKind::Warn.file_tag(), "    [warn] ");
        assert_eq!(LineKind::Detail.file_tag(), "    [debug] ");
    }

    #[test]
    fn console_frames_close_what_they_open() {
        for kind in [LineKind::Stage, LineKind::Detail] {
            let (open, close) = kind.console_frame();
            assert!(open.ends_with('m') && close == "\x1b[0m", "{kind:?}");
        }
        assert_eq!(LineKind::Info.console_frame(), ("  ", ""));
    }
}
