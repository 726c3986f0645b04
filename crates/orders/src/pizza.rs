use serde::{Deserialize, Serialize};

use pizzeria_core::{Entity, EntityId};
use pizzeria_menu::PizzaSize;

/// Pizza identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PizzaId(pub EntityId);

impl PizzaId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for PizzaId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Entity: a pizza under assembly.
///
/// The size is fixed at construction. Toppings accumulate one at a time,
/// duplicates silently ignored, insertion order preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pizza {
    id: PizzaId,
    size: PizzaSize,
    toppings: Vec<String>,
}

impl Pizza {
    /// Create a pizza of the given size with a fresh id and no toppings.
    pub fn new(size: PizzaSize) -> Self {
        Self::with_id(PizzaId::new(EntityId::new()), size)
    }

    /// Create a pizza with an explicit id (deterministic tests).
    pub fn with_id(id: PizzaId, size: PizzaSize) -> Self {
        Self {
            id,
            size,
            toppings: Vec::new(),
        }
    }

    pub fn id_typed(&self) -> PizzaId {
        self.id
    }

    pub fn size(&self) -> PizzaSize {
        self.size
    }

    pub fn toppings(&self) -> &[String] {
        &self.toppings
    }

    /// Add a topping unless it is already on the pizza.
    ///
    /// Re-adding a topping is a silent no-op; `describe` prints toppings in
    /// first-addition order.
    pub fn add_topping(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.toppings.contains(&name) {
            self.toppings.push(name);
        }
    }

    /// Total price: the size's base price plus its per-topping price for each
    /// distinct topping. Pure function of current state.
    pub fn price(&self) -> u64 {
        self.size.pricing().total(self.toppings.len())
    }

    /// Printable description, e.g. "small pizza with mushroom" or
    /// "medium plain cheese pizza".
    pub fn describe(&self) -> String {
        if self.toppings.is_empty() {
            format!("{} plain cheese pizza", self.size)
        } else {
            format!("{} pizza with {}", self.size, self.toppings.join(", "))
        }
    }
}

impl core::fmt::Display for Pizza {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.describe())
    }
}

impl Entity for Pizza {
    type Id = PizzaId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
