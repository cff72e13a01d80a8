/// Outcome of [`init_tracing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceInit {
    /// The JSON subscriber now receives `deldict` and `deldict_core` events.
    Installed,
    /// An earlier call already installed it; nothing changed.
    AlreadyActive,
    /// Built without the `trace` feature.
    Disabled,
    /// The log file could not be created, or the host process already set
    /// its own global subscriber.
    Failed,
}

impl TraceInit {
    /// Status code returned by `deldict_trace_init`.
    pub fn code(self) -> i32 {
        match self {
            TraceInit::Installed => 0,
            TraceInit::AlreadyActive => 1,
            TraceInit::Disabled => 2,
            TraceInit::Failed => 3,
        }
    }
}

#[cfg(feature = "trace")]
mod imp {
    use std::path::Path;
    use std::sync::{Mutex, PoisonError};

    use tracing_appender::non_blocking::WorkerGuard;
    use tracing_appender::rolling::{RollingFileAppender, Rotation};
    use tracing_subscriber::EnvFilter;

    use super::TraceInit;

    const DEFAULT_FILTER: &str = "deldict=debug,deldict_core=debug";

    /// Flush worker for the installed writer. Held for the life of the
    /// process; `Some` once a subscriber is installed.
    static WORKER: Mutex<Option<WorkerGuard>> = Mutex::new(None);

    pub fn init_tracing(log_dir: &Path) -> TraceInit {
        let mut worker = WORKER.lock().unwrap_or_else(PoisonError::into_inner);
        if worker.is_some() {
            return TraceInit::AlreadyActive;
        }

        // Writes `log_dir/deldict-trace.jsonl`.
        let appender = match RollingFileAppender::builder()
            .rotation(Rotation::NEVER)
            .filename_prefix("deldict-trace")
            .filename_suffix("jsonl")
            .build(log_dir)
        {
            Ok(appender) => appender,
            Err(_) => return TraceInit::Failed,
        };
        let (writer, guard) = tracing_appender::non_blocking(appender);

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
        let installed = tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(filter)
            .try_init();

        match installed {
            Ok(()) => {
                *worker = Some(guard);
                tracing::debug!(log_dir = %log_dir.display(), "trace subscriber installed");
                TraceInit::Installed
            }
            Err(_) => TraceInit::Failed,
        }
    }
}

#[cfg(feature = "trace")]
pub use imp::init_tracing;

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) -> TraceInit {
    TraceInit::Disabled
}
