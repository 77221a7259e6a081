use serde::Deserialize;
use std::fmt::{Display, Formatter};

/// Clock basis exposed by an output's time reference radio buttons.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Deserialize)]
pub enum TimeReference {
    #[serde(rename = "UTC")]
    Utc,
    #[serde(rename = "LOCAL")]
    Local,
}

impl Display for TimeReference {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeReference::Utc => write!(f, "UTC"),
            TimeReference::Local => write!(f, "LOCAL"),
        }
    }
}

/// A signal type pattern, authored either as an exact code (`PPS`) or as a family ending in `*` (`IRIG-B*`).
#[derive(PartialEq, Eq, Debug, Clone)]
pub enum TimeReferencePattern {
    Exact(String),
    Prefix(String),
}

impl TimeReferencePattern {
    pub fn matches(&self, signal_type: &str) -> bool {
        match self {
            TimeReferencePattern::Exact(code) => signal_type == code,
            TimeReferencePattern::Prefix(prefix) => signal_type.starts_with(prefix.as_str()),
        }
    }
}

impl Display for TimeReferencePattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeReferencePattern::Exact(code) => write!(f, "{}", code),
            TimeReferencePattern::Prefix(prefix) => write!(f, "{}*", prefix),
        }
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Deserialize)]
pub struct TimeReferenceRule {
    pattern: TimeReferencePattern,
    references: Vec<TimeReference>,
}

impl TimeReferenceRule {
    pub fn new(pattern: TimeReferencePattern, references: Vec<TimeReference>) -> Self {
        TimeReferenceRule { pattern, references }
    }

    pub fn pattern(&self) -> &TimeReferencePattern {
        &self.pattern
    }

    pub fn references(&self) -> &[TimeReference] {
        &self.references
    }
}
