//! Logging setup
//!
//! The library only emits `tracing` events: a span per assembled diagram,
//! trace events per walked ancestor, debug events for members and
//! constructor parameters that were skipped. Binaries install a subscriber
//! with [`init_logging`].
//!
//! ```rust
//! use lineage::core::logging::init_logging;
//!
//! // A second call in the same process fails because a global subscriber
//! // is already installed
//! let _ = init_logging(Some("debug"), Some("pretty"));
//! ```
//!
//! Settings left unset fall back to `LINEAGE_LOG_LEVEL`, then `RUST_LOG`
//! (level), and `LINEAGE_LOG_FORMAT` (format). Levels accept any
//! `EnvFilter` directive, so a single module can be opened up:
//!
//! ```bash
//! LINEAGE_LOG_LEVEL="lineage::plugins::class::extractor=debug" lineage diagram -m model.json -c Leaf
//! ```

use std::str::FromStr;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

/// Level used when neither an argument nor the environment names one
pub const DEFAULT_LEVEL: &str = "warn";

/// Output format of the installed subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One line per event
    #[default]
    Compact,
    /// Multi-line with source locations
    Pretty,
    /// Newline-delimited JSON objects
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!(
                "Unknown log format: {} (expected one of: {})",
                s,
                LogFormat::variants().join(", ")
            )),
        }
    }
}

impl LogFormat {
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }

    /// Formatting layer writing to stderr; stdout is reserved for diagrams
    fn layer(self) -> Box<dyn Layer<Registry> + Send + Sync> {
        let base = fmt::Layer::default().with_writer(std::io::stderr);
        match self {
            LogFormat::Compact => base
                .with_target(false)
                .with_span_events(FmtSpan::NONE)
                .compact()
                .boxed(),
            LogFormat::Pretty => base
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::ACTIVE)
                .pretty()
                .boxed(),
            LogFormat::Json => base.with_span_events(FmtSpan::ACTIVE).json().boxed(),
        }
    }
}

/// Level directive and format after applying environment fallbacks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub directive: String,
    pub format: LogFormat,
}

impl LogSettings {
    /// Resolve settings, reading the environment for anything left unset
    pub fn resolve(level: Option<&str>, format: Option<&str>) -> Result<Self, String> {
        Self::resolve_with(level, format, |key| std::env::var(key).ok())
    }

    /// Resolve settings against an arbitrary variable lookup
    pub fn resolve_with(
        level: Option<&str>,
        format: Option<&str>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, String> {
        let directive = level
            .map(str::to_string)
            .or_else(|| env("LINEAGE_LOG_LEVEL"))
            .or_else(|| env("RUST_LOG"))
            .unwrap_or_else(|| DEFAULT_LEVEL.to_string());

        let format = match format.map(str::to_string).or_else(|| env("LINEAGE_LOG_FORMAT")) {
            Some(name) => name.parse()?,
            None => LogFormat::default(),
        };

        Ok(Self { directive, format })
    }

    /// Filter for the resolved directive; a malformed directive means `warn`
    pub fn filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    }
}

/// Install the global subscriber
///
/// Fails for an unknown format, or when a global subscriber is already set.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let settings =
        LogSettings::resolve(level, format).map_err(|e| format!("Invalid log format: {}", e))?;

    Registry::default()
        .with(settings.format.layer())
        .with(settings.filter())
        .try_init()?;

    Ok(())
}

/// Install the global subscriber from the environment alone
pub fn init_default_logging() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(None, None)
}
