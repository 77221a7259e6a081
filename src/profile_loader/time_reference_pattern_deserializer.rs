use crate::domain::TimeReferencePattern;
use serde::de::Error;
use serde::{Deserialize, Deserializer};

const WILDCARD: char = '*';

impl<'de> Deserialize<'de> for TimeReferencePattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        if value.is_empty() {
            return Err(Error::custom("empty signal type pattern"));
        }

        match value.strip_suffix(WILDCARD) {
            Some(prefix) if prefix.contains(WILDCARD) => Err(Error::custom(format!(
                "invalid signal type pattern: '{}', a wildcard is only allowed at the end",
                value
            ))),
            Some(prefix) => Ok(TimeReferencePattern::Prefix(prefix.to_string())),
            None if value.contains(WILDCARD) => Err(Error::custom(format!(
                "invalid signal type pattern: '{}', a wildcard is only allowed at the end",
                value
            ))),
            None => Ok(TimeReferencePattern::Exact(value)),
        }
    }
}
