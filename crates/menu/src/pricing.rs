use serde::{Deserialize, Serialize};

use pizzeria_core::ValueObject;

use crate::size::PizzaSize;

/// Flat per-topping price used by sizes without an override of their own.
pub const DEFAULT_TOPPING_PRICE: u64 = 20;

/// Pricing rule for one catalog size.
///
/// Prices are in the smallest currency unit (e.g., cents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizePricing {
    pub base_price: u64,
    pub topping_price: u64,
}

impl SizePricing {
    pub fn new(base_price: u64, topping_price: u64) -> Self {
        Self {
            base_price,
            topping_price,
        }
    }

    /// Pricing with the flat default topping price.
    pub fn flat(base_price: u64) -> Self {
        Self::new(base_price, DEFAULT_TOPPING_PRICE)
    }

    /// Total price for a pizza of this size carrying `topping_count` toppings.
    pub fn total(&self, topping_count: usize) -> u64 {
        self.base_price + self.topping_price * topping_count as u64
    }
}

impl ValueObject for SizePricing {}

impl PizzaSize {
    /// Pricing rule for this size.
    ///
    /// The lookup is total over the closed set; there is no size without a
    /// price.
    pub fn pricing(self) -> SizePricing {
        match self {
            PizzaSize::Small => SizePricing::flat(120),
            PizzaSize::Medium => SizePricing::flat(200),
            PizzaSize::Large => SizePricing::flat(280),
            // Jumbo charges a premium per topping.
            PizzaSize::Jumbo => SizePricing::new(360, 30),
        }
    }

    pub fn base_price(self) -> u64 {
        self.pricing().base_price
    }

    pub fn topping_price(self) -> u64 {
        self.pricing().topping_price
    }
}
