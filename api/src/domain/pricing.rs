//! Ticket pricing
//!
//! Price depends on pass type and age bracket only. Halved prices are rounded
//! to the nearest whole unit with banker's rounding (`Decimal::round`).

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::domain::entities::{AgeBracket, PassType, Visitor};

/// Base price of a Regular pass
pub const REGULAR_PRICE: Decimal = dec!(5000);

/// Base price of a Vip pass
pub const VIP_PRICE: Decimal = dec!(10000);

pub fn base_price(pass_type: PassType) -> Decimal {
    match pass_type {
        PassType::Regular => REGULAR_PRICE,
        PassType::Vip => VIP_PRICE,
    }
}

/// Price charged for a single visitor
pub fn price_for(visitor: &Visitor) -> Decimal {
    let base = base_price(visitor.pass_type);

    match visitor.age_bracket() {
        Some(AgeBracket::Infant) => Decimal::ZERO,
        Some(AgeBracket::Child) | Some(AgeBracket::Senior) => (base / dec!(2)).round(),
        Some(AgeBracket::Adult) => base,
        // Negative ages are rejected before pricing
        None => base,
    }
}

/// Priced copies of the visitors, in the same order
pub fn price_visitors(visitors: &[Visitor]) -> Vec<Visitor> {
    visitors.iter().map(|v| v.priced(price_for(v))).collect()
}

/// Sum of the prices already assigned to the visitors
pub fn total_for(priced: &[Visitor]) -> Decimal {
    priced.iter().map(|v| v.price).sum()
}
