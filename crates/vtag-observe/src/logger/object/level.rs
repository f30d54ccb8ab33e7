use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::logger::LoggerError;

/// Validated `EnvFilter` expression.
///
/// The raw string is kept so it can be written back to config unchanged.
///
/// # Examples
/// ```rust
/// use vtag_observe::LoggerLevel;
///
/// let level: LoggerLevel = serde_json::from_str(r#""vtag_core=debug,warn""#).unwrap();
/// assert_eq!(level.as_str(), "vtag_core=debug,warn");
///
/// assert!(serde_json::from_str::<LoggerLevel>(r#""vtag_core=loud""#).is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LoggerLevel(String);

impl LoggerLevel {
    /// Parses and validates an `EnvFilter` expression.
    ///
    /// # Errors
    /// [`LoggerError::InvalidLevel`] when the expression does not parse.
    ///
    /// # Examples
    /// ```rust
    /// use vtag_observe::{LoggerError, LoggerLevel};
    ///
    /// assert!(LoggerLevel::new("info").is_ok());
    /// assert!(LoggerLevel::new("vtag_core=debug,info").is_ok());
    /// assert!(matches!(LoggerLevel::new("vtag_core=verbose"), Err(LoggerError::InvalidLevel(_))));
    /// ```
    pub fn new(s: impl Into<String>) -> Result<Self, LoggerError> {
        Self::try_from(s.into())
    }

    /// The expression exactly as configured.
    ///
    /// # Examples
    /// ```rust
    /// use vtag_observe::LoggerLevel;
    ///
    /// let level = LoggerLevel::new("warn,vtag_core=trace").unwrap();
    /// assert_eq!(level.as_str(), "warn,vtag_core=trace");
    /// assert_eq!(LoggerLevel::default().as_str(), "info");
    /// ```
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the filter; the expression was validated on construction.
    ///
    /// # Examples
    /// ```rust
    /// use tracing_subscriber::filter::LevelFilter;
    /// use vtag_observe::LoggerLevel;
    ///
    /// let filter = LoggerLevel::new("vtag_core=debug").unwrap().to_env_filter();
    /// assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    /// ```
    pub fn to_env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(self.as_str()).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

impl Default for LoggerLevel {
    fn default() -> Self {
        Self("info".to_string())
    }
}

impl FromStr for LoggerLevel {
    type Err = LoggerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for LoggerLevel {
    type Error = LoggerError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match EnvFilter::try_new(&s) {
            Ok(_) => Ok(LoggerLevel(s)),
            Err(e) => Err(LoggerError::InvalidLevel(format!("{s}: {e}"))),
        }
    }
}

impl From<LoggerLevel> for String {
    fn from(l: LoggerLevel) -> Self {
        l.0
    }
}

#[cfg(test)]
mod tests {
    use super::LoggerLevel;

    #[test]
    fn accepts_valid_levels() {
        for lvl in ["info", "warn", "trace", "vtag_core=debug,info"] {
            assert!(lvl.parse::<LoggerLevel>().is_ok(), "{lvl} should parse");
        }
    }

    #[test]
    fn rejects_invalid_levels() {
        for lvl in ["vtag_core=verbose", "a=trace,b=wat"] {
            assert!(lvl.parse::<LoggerLevel>().is_err(), "{lvl} should not parse");
        }
    }

    #[test]
    fn default_is_info() {
        let lvl = LoggerLevel::default();
        assert_eq!(lvl.as_str(), "info");
        let _ = lvl.to_env_filter();
    }

    #[test]
    fn serde_from_plain_string() {
        let lvl: LoggerLevel = serde_json::from_str(r#""debug""#).unwrap();
        assert_eq!(lvl.as_str(), "debug");
        assert_eq!(serde_json::to_string(&lvl).unwrap(), r#""debug""#);
    }
}
