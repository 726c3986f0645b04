//! Menu domain module: the closed pizza size catalog and its pricing rules.
//!
//! This crate contains the catalog business rules as pure, deterministic
//! domain logic (no IO, no storage).

pub mod pricing;
pub mod size;

pub use pricing::{DEFAULT_TOPPING_PRICE, SizePricing};
pub use size::PizzaSize;
