use crate::domain::Series::*;
use std::fmt::{Display, Formatter};

/// Coarse device generation. `Unknown` is the answer for models missing from the registry.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, Default)]
pub enum Series {
    #[default]
    Unknown,
    Two,
    Three,
}

impl Series {
    pub fn from_number(number: u64) -> Option<Series> {
        match number {
            2 => Some(Two),
            3 => Some(Three),
            _ => None,
        }
    }

    pub fn as_number(&self) -> u8 {
        match self {
            Unknown => 0,
            Two => 2,
            Three => 3,
        }
    }
}

impl Display for Series {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Unknown => write!(f, "unknown series"),
            series => write!(f, "Series {}", series.as_number()),
        }
    }
}
