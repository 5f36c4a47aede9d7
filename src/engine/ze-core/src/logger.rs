use crate::thread::thread_name;
use chrono::Local;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use std::fmt::Arguments;
use std::io::Write;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Weak};
use std::{fmt, thread};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum Severity {
    Verbose,
    Info,
    Warn,
    Error,
    Fatal,
}

impl Severity {
    fn from_u8(value: u8) -> Self {
        match value {
            0 => Severity::Verbose,
            1 => Severity::Info,
            2 => Severity::Warn,
            3 => Severity::Error,
            _ => Severity::Fatal,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Verbose => write!(f, "verbose"),
            Severity::Info => write!(f, "info"),
            Severity::Warn => write!(f, "warn"),
            Severity::Error => write!(f, "error"),
            Severity::Fatal => write!(f, "fatal"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Message {
    pub severity: Severity,
    pub crate_name: &'static str,
    pub message: String,
    pub time: chrono::DateTime<Local>,
    pub thread: thread::ThreadId,
}

/// Receives every message that passes the severity filter.
/// E.g: print to the console, append to a file
pub trait Sink: Send + Sync {
    fn log(&self, message: &Message);
}

enum SinkEntry {
    Strong(Arc<dyn Sink>),
    Weak(Weak<dyn Sink>),
}

impl SinkEntry {
    fn log(&self, message: &Message) {
        match self {
            SinkEntry::Strong(sink) => sink.log(message),
            SinkEntry::Weak(weak) => {
                if let Some(sink) = weak.upgrade() {
                    sink.log(message);
                }
            }
        }
    }

    fn is_alive(&self) -> bool {
        match self {
            SinkEntry::Strong(_) => true,
            SinkEntry::Weak(weak) => weak.strong_count() > 0,
        }
    }
}

static SINKS: Lazy<RwLock<Vec<SinkEntry>>> = Lazy::new(RwLock::default);
static MIN_SEVERITY: AtomicU8 = AtomicU8::new(Severity::Verbose as u8);

/// Messages below `severity` are dropped before reaching any sink. Fatal messages are never dropped.
pub fn set_min_severity(severity: Severity) {
    MIN_SEVERITY.store(severity as u8, Ordering::Relaxed);
}

pub fn min_severity() -> Severity {
    Severity::from_u8(MIN_SEVERITY.load(Ordering::Relaxed))
}

#[doc(hidden)]
pub fn internal_log(severity: Severity, crate_name: &'static str, args: Arguments) {
    if severity < min_severity() && severity != Severity::Fatal {
        return;
    }

    let message = Message {
        severity,
        crate_name,
        message: args.to_string(),
        time: Local::now(),
        thread: thread::current().id(),
    };

    for sink in SINKS.read().iter() {
        sink.log(&message);
    }

    if matches!(message.severity, Severity::Fatal) {
        panic!("{}", message.message);
    }
}

/** Sink API */

pub fn register_sink(sink: Arc<dyn Sink>) {
    SINKS.write().push(SinkEntry::Strong(sink));
}

pub fn register_sink_weak<T: Sink + 'static>(sink: Weak<T>) {
    let mut sinks = SINKS.write();
    sinks.retain(SinkEntry::is_alive);
    sinks.push(SinkEntry::Weak(sink));
}

/** Default logging macros */
#[macro_export]
macro_rules! ze_verbose {
    ($($arg:tt)*) => ({
        $crate::logger::internal_log($crate::logger::Severity::Verbose, env!("CARGO_PKG_NAME"), format_args!($($arg)*));
    })
}

#[macro_export]
macro_rules! ze_info {
    ($($arg:tt)*) => ({
        $crate::logger::internal_log($crate::logger::Severity::Info, env!("CARGO_PKG_NAME"), format_args!($($arg)*));
    })
}

#[macro_export]
macro_rules! ze_warn {
    ($($arg:tt)*) => ({
        $crate::logger::internal_log($crate::logger::Severity::Warn, env!("CARGO_PKG_NAME"), format_args!($($arg)*));
    })
}

#[macro_export]
macro_rules! ze_error {
    ($($arg:tt)*) => ({
        $crate::logger::internal_log($crate::logger::Severity::Error, env!("CARGO_PKG_NAME"), format_args!($($arg)*));
    })
}

#[macro_export]
macro_rules! ze_fatal {
    ($($arg:tt)*) => ({
        $crate::logger::internal_log($crate::logger::Severity::Fatal, env!("CARGO_PKG_NAME"), format_args!($($arg)*));
        unreachable!();
    })
}

/** Default sinks */
pub struct StdoutSink;

impl StdoutSink {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {})
    }

    fn color(severity: Severity) -> Color {
        match severity {
            Severity::Verbose => Color::Cyan,
            Severity::Info => Color::White,
            Severity::Warn => Color::Yellow,
            Severity::Error => Color::Red,
            Severity::Fatal => Color::Rgb(255, 15, 15),
        }
    }

    fn write(&self, message: &Message) -> std::io::Result<()> {
        let mut stdout = StandardStream::stdout(ColorChoice::Auto);
        let thread_name = thread_name(message.thread);
        let thread_name = thread_name.as_deref().unwrap_or("Unknown Thread");

        stdout.set_color(ColorSpec::new().set_fg(Some(Self::color(message.severity))))?;
        writeln!(
            &mut stdout,
            "[{}] [{}/{}] ({}) {}",
            message.time.format("%H:%M:%S"),
            message.severity,
            thread_name,
            message.crate_name,
            message.message
        )?;
        stdout.reset()?;
        stdout.flush()
    }
}

impl Sink for StdoutSink {
    fn log(&self, message: &Message) {
        // A closed stdout must not take the caller down with it
        self.write(message).ok();
    }
}

#[cfg(test)]
mod tests {
    use crate::logger::{
        min_severity, register_sink, register_sink_weak, set_min_severity, Message, Severity,
        Sink, StdoutSink,
    };
    use parking_lot::Mutex;
    use std::sync::Arc;

    // Tests touching the global severity filter must not interleave
    static FILTER_LOCK: Mutex<()> = parking_lot::const_mutex(());

    struct CaptureSink {
        tag: &'static str,
        messages: Mutex<Vec<Message>>,
    }

    impl CaptureSink {
        fn new(tag: &'static str) -> Arc<Self> {
            Arc::new(Self {
                tag,
                messages: Mutex::default(),
            })
        }

        fn captured(&self) -> Vec<(Severity, String)> {
            self.messages
                .lock()
                .iter()
                .map(|message| (message.severity, message.message.clone()))
                .collect()
        }
    }

    impl Sink for CaptureSink {
        fn log(&self, message: &Message) {
            if message.message.starts_with(self.tag) {
                self.messages.lock().push(message.clone());
            }
        }
    }

    #[test]
    fn messages_reach_registered_sink_with_crate_name() {
        let _guard = FILTER_LOCK.lock();
        let sink = CaptureSink::new("[dispatch]");
        register_sink(sink.clone());

        ze_info!("[dispatch] loaded {}", 615);
        ze_warn!("[dispatch] missing");

        assert_eq!(
            sink.captured(),
            vec![
                (Severity::Info, "[dispatch] loaded 615".to_string()),
                (Severity::Warn, "[dispatch] missing".to_string()),
            ]
        );
        assert_eq!(sink.messages.lock()[0].crate_name, "ze-core");
    }

    #[test]
    fn messages_below_min_severity_are_dropped() {
        let _guard = FILTER_LOCK.lock();
        let sink = CaptureSink::new("[filter]");
        register_sink(sink.clone());

        set_min_severity(Severity::Warn);
        assert_eq!(min_severity(), Severity::Warn);
        ze_verbose!("[filter] verbose");
        ze_info!("[filter] info");
        ze_error!("[filter] error");
        set_min_severity(Severity::Verbose);

        assert_eq!(
            sink.captured(),
            vec![(Severity::Error, "[filter] error".to_string())]
        );
    }

    #[test]
    fn dropped_weak_sink_stops_receiving() {
        let _guard = FILTER_LOCK.lock();
        let sink = CaptureSink::new("[weak]");
        register_sink_weak(Arc::downgrade(&sink));

        ze_info!("[weak] first");
        let captured = sink.captured();
        drop(sink);
        ze_info!("[weak] second");

        assert_eq!(captured, vec![(Severity::Info, "[weak] first".to_string())]);
    }

    #[test]
    #[should_panic(expected = "device lost")]
    fn fatal_panics_after_dispatch() {
        let _guard = FILTER_LOCK.lock();
        set_min_severity(Severity::Verbose);
        ze_fatal!("device lost");
    }

    #[test]
    fn severity_ordering() {
        assert!(Severity::Verbose < Severity::Info);
        assert!(Severity::Error < Severity::Fatal);
        assert_eq!(Severity::Warn.to_string(), "warn");
    }

    #[test]
    fn stdout_sink_writes_every_severity() {
        let sink = StdoutSink::new();
        for severity in [
            Severity::Verbose,
            Severity::Info,
            Severity::Warn,
            Severity::Error,
            Severity::Fatal,
        ] {
            sink.log(&Message {
                severity,
                crate_name: "ze-core",
                message: "stdout sink".to_string(),
                time: chrono::Local::now(),
                thread: std::thread::current().id(),
            });
        }
    }
}
