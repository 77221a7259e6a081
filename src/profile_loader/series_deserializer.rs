use crate::domain::Series;
use serde::{Deserialize, Deserializer};

impl<'de> Deserialize<'de> for Series {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = u64::deserialize(deserializer)?;

        Series::from_number(value).ok_or_else(|| serde::de::Error::custom(format!("invalid series: {}, must be 2 or 3", value)))
    }
}
