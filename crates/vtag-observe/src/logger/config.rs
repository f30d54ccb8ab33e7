use serde::{Deserialize, Serialize};
use std::io::IsTerminal;

use crate::logger::object::{LoggerFormat, LoggerLevel};

/// Logger configuration, usually embedded in the agent config file.
///
/// Every field has a default, so a partial (or empty) object is accepted.
///
/// # Examples
/// ```rust
/// use vtag_observe::{LoggerConfig, LoggerFormat};
///
/// let cfg: LoggerConfig = serde_json::from_str(r#"{"format": "JSON", "level": "debug"}"#).unwrap();
/// assert_eq!(cfg.format, LoggerFormat::Json);
/// assert_eq!(cfg.level.as_str(), "debug");
/// assert!(cfg.with_targets);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub format: LoggerFormat,
    /// `EnvFilter` expression, e.g. `"info"` or `"vtag_core=debug,warn"`.
    pub level: LoggerLevel,
    /// Include the event target (module path) in every line.
    pub with_targets: bool,
    /// Colored text output; ignored for JSON and when stdout is not a terminal.
    pub use_color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            format: LoggerFormat::default(),
            level: LoggerLevel::default(),
            with_targets: true,
            use_color: true,
        }
    }
}

impl LoggerConfig {
    /// Whether ANSI colors are emitted.
    ///
    /// True only for text output with `use_color` set and stdout attached to a terminal.
    ///
    /// # Examples
    /// ```rust
    /// use vtag_observe::{LoggerConfig, LoggerFormat};
    ///
    /// let json = LoggerConfig { format: LoggerFormat::Json, ..LoggerConfig::default() };
    /// assert!(!json.should_use_color());
    ///
    /// let plain = LoggerConfig { use_color: false, ..LoggerConfig::default() };
    /// assert!(!plain.should_use_color());
    /// ```
    pub fn should_use_color(&self) -> bool {
        self.use_color && self.format == LoggerFormat::Text && std::io::stdout().is_terminal()
    }
}
