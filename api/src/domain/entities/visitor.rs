//! Visitor domain entity
//!
//! One person on the visit. The price is always assigned by the pricing engine,
//! never trusted from the caller.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Pass tier, determines the base ticket price
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PassType {
    #[default]
    #[serde(alias = "regular", alias = "REGULAR")]
    Regular,
    #[serde(alias = "vip", alias = "VIP")]
    Vip,
}

impl std::fmt::Display for PassType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PassType::Regular => write!(f, "Regular"),
            PassType::Vip => write!(f, "Vip"),
        }
    }
}

impl std::str::FromStr for PassType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "regular" => Ok(PassType::Regular),
            "vip" => Ok(PassType::Vip),
            _ => Err(format!("Unknown pass type: {}", s)),
        }
    }
}

/// A person on the visit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Visitor {
    /// Signed so that a negative age reaches validation instead of failing to parse
    pub age: i32,
    #[serde(default)]
    pub pass_type: PassType,
    #[serde(default, with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl Visitor {
    #[cfg(test)]
    pub fn new(age: i32, pass_type: PassType) -> Self {
        Self {
            age,
            pass_type,
            price: Decimal::ZERO,
        }
    }

    /// Copy of this visitor carrying the given price
    pub fn priced(&self, price: Decimal) -> Self {
        Self {
            price,
            ..self.clone()
        }
    }

    pub fn age_bracket(&self) -> Option<AgeBracket> {
        AgeBracket::for_age(self.age)
    }
}

/// Age ranges with a fixed price multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeBracket {
    /// 0-3, free
    Infant,
    /// 4-15, half price
    Child,
    /// 16-59, full price
    Adult,
    /// 60+, half price
    Senior,
}

impl AgeBracket {
    pub const ALL: [AgeBracket; 4] = [
        AgeBracket::Infant,
        AgeBracket::Child,
        AgeBracket::Adult,
        AgeBracket::Senior,
    ];

    /// Negative ages have no bracket
    pub fn for_age(age: i32) -> Option<Self> {
        match age {
            0..=3 => Some(AgeBracket::Infant),
            4..=15 => Some(AgeBracket::Child),
            16..=59 => Some(AgeBracket::Adult),
            60..=i32::MAX => Some(AgeBracket::Senior),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AgeBracket::Infant => "Menores (0-3 años)",
            AgeBracket::Child => "Menores (4-15 años)",
            AgeBracket::Adult => "Adultos (16-59 años)",
            AgeBracket::Senior => "Mayores (60+ años)",
        }
    }

    pub fn payment_rule(&self) -> &'static str {
        match self {
            AgeBracket::Infant => "No pagan",
            AgeBracket::Child | AgeBracket::Senior => "Pagan 50%",
            AgeBracket::Adult => "Pagan 100%",
        }
    }
}
