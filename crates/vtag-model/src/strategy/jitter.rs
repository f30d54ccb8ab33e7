use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::error::{ModelError, ModelResult};

/// Randomization applied on top of a computed retry delay.
///
/// - `None`: the delay is used as computed.
/// - `Full`: uniform in `[0, delay]`.
/// - `Equal`: `delay / 2` plus uniform in `[0, delay / 2]`.
/// - `Decorrelated`: uniform in `[first, delay * 3]`, capped at the backoff maximum.
///
/// Only the policy lives here; the sampling is done by the retry runtime in `vtag-core`.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum JitterStrategy {
    /// Deterministic delays.
    #[default]
    None,
    Full,
    Equal,
    Decorrelated,
}

impl FromStr for JitterStrategy {
    type Err = ModelError;
    fn from_str(s: &str) -> ModelResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "none" | "off" => Ok(JitterStrategy::None),
            "full" => Ok(JitterStrategy::Full),
            "equal" => Ok(JitterStrategy::Equal),
            "decorrelated" => Ok(JitterStrategy::Decorrelated),
            other => Err(ModelError::UnknownJitter(other.to_string())),
        }
    }
}

impl TryFrom<String> for JitterStrategy {
    type Error = ModelError;
    fn try_from(s: String) -> ModelResult<Self> {
        s.parse()
    }
}

impl From<JitterStrategy> for String {
    fn from(j: JitterStrategy) -> Self {
        j.to_string()
    }
}

impl fmt::Display for JitterStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            JitterStrategy::None => "none",
            JitterStrategy::Full => "full",
            JitterStrategy::Equal => "equal",
            JitterStrategy::Decorrelated => "decorrelated",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitive() {
        assert_eq!("FULL".parse::<JitterStrategy>().unwrap(), JitterStrategy::Full);
        assert_eq!(" equal ".parse::<JitterStrategy>().unwrap(), JitterStrategy::Equal);
        assert_eq!("".parse::<JitterStrategy>().unwrap(), JitterStrategy::None);
        assert_eq!(
            "Decorrelated".parse::<JitterStrategy>().unwrap(),
            JitterStrategy::Decorrelated
        );
    }

    #[test]
    fn rejects_unknown() {
        let err = "gaussian".parse::<JitterStrategy>().unwrap_err();
        assert!(matches!(err, ModelError::UnknownJitter(s) if s == "gaussian"));
    }

    #[test]
    fn default_is_none() {
        assert_eq!(JitterStrategy::default(), JitterStrategy::None);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&JitterStrategy::Full).unwrap(), r#""full""#);
        let parsed: JitterStrategy = serde_json::from_str(r#""decorrelated""#).unwrap();
        assert_eq!(parsed, JitterStrategy::Decorrelated);
    }

    #[test]
    fn serde_accepts_any_case_and_aliases() {
        let parsed: JitterStrategy = serde_json::from_str(r#""Full""#).unwrap();
        assert_eq!(parsed, JitterStrategy::Full);
        let parsed: JitterStrategy = serde_json::from_str(r#""EQUAL""#).unwrap();
        assert_eq!(parsed, JitterStrategy::Equal);
        let parsed: JitterStrategy = serde_json::from_str(r#""off""#).unwrap();
        assert_eq!(parsed, JitterStrategy::None);
        assert!(serde_json::from_str::<JitterStrategy>(r#""gaussian""#).is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for j in [
            JitterStrategy::None,
            JitterStrategy::Full,
            JitterStrategy::Equal,
            JitterStrategy::Decorrelated,
        ] {
            assert_eq!(j.to_string().parse::<JitterStrategy>().unwrap(), j);
        }
    }
}
