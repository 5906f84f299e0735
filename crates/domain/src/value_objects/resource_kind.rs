use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// What a resource production room yields
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    #[default]
    Power,
    Water,
    Food,
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Power => write!(f, "Power"),
            Self::Water => write!(f, "Water"),
            Self::Food => write!(f, "Food"),
        }
    }
}

impl std::str::FromStr for ResourceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Power" => Ok(Self::Power),
            "Water" => Ok(Self::Water),
            "Food" => Ok(Self::Food),
            _ => Err(DomainError::validation(
                "kind",
                format!("invalid resource production type: {s}"),
            )),
        }
    }
}
