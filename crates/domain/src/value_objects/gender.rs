use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Villager gender
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    M,
    F,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::M => write!(f, "M"),
            Self::F => write!(f, "F"),
        }
    }
}

impl std::str::FromStr for Gender {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "M" | "m" => Ok(Self::M),
            "F" | "f" => Ok(Self::F),
            _ => Err(DomainError::validation("gender", format!("unknown gender: {s}"))),
        }
    }
}
