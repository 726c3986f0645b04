//! Orders domain module: the pizza being assembled for a customer.
//!
//! Business rules are pure and deterministic (no IO, no storage): price and
//! description are functions of the pizza's current state.

pub mod pizza;

pub use pizza::{Pizza, PizzaId};
