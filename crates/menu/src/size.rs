use core::str::FromStr;

use serde::{Deserialize, Serialize};

use pizzeria_core::{DomainError, DomainResult};

/// Pizza size: the closed set of catalog identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PizzaSize {
    Small,
    Medium,
    Large,
    Jumbo,
}

impl PizzaSize {
    /// Every valid size, in menu order.
    pub const ALL: [PizzaSize; 4] = [
        PizzaSize::Small,
        PizzaSize::Medium,
        PizzaSize::Large,
        PizzaSize::Jumbo,
    ];

    /// Catalog identifier of this size.
    pub fn name(self) -> &'static str {
        match self {
            PizzaSize::Small => "small",
            PizzaSize::Medium => "medium",
            PizzaSize::Large => "large",
            PizzaSize::Jumbo => "jumbo",
        }
    }

    /// Resolve a size identifier against the closed catalog.
    ///
    /// Anything outside the catalog is rejected here, at construction time,
    /// never at price computation.
    pub fn parse(name: &str) -> DomainResult<Self> {
        match name {
            "small" => Ok(PizzaSize::Small),
            "medium" => Ok(PizzaSize::Medium),
            "large" => Ok(PizzaSize::Large),
            "jumbo" => Ok(PizzaSize::Jumbo),
            other => Err(DomainError::invalid_size(other)),
        }
    }
}

impl core::fmt::Display for PizzaSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PizzaSize {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_every_catalog_identifier() {
        for size in PizzaSize::ALL {
            assert_eq!(PizzaSize::parse(size.name()).unwrap(), size);
        }
    }

    #[test]
    fn parse_rejects_unknown_identifiers() {
        for name in ["tiny", "family", "", "SMALL", " small"] {
            let err = PizzaSize::parse(name).unwrap_err();
            assert_eq!(err, DomainError::InvalidSize(name.to_string()));
        }
    }

    #[test]
    fn from_str_matches_parse() {
        let size: PizzaSize = "jumbo".parse().unwrap();
        assert_eq!(size, PizzaSize::Jumbo);
        assert!("extra-large".parse::<PizzaSize>().is_err());
    }

    #[test]
    fn serializes_to_the_catalog_identifier() {
        for size in PizzaSize::ALL {
            let value = serde_json::to_value(size).unwrap();
            assert_eq!(value, serde_json::json!(size.name()));
        }
    }
}
