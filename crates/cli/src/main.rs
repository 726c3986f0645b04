use anyhow::Result;

use pizzeria_menu::PizzaSize;
use pizzeria_orders::Pizza;

/// Sample orders: size identifier plus toppings, as a customer would phrase
/// them. Size names go through the catalog parser, so an unknown size fails
/// before any pizza is assembled.
const SAMPLE_ORDERS: &[(&str, &[&str])] = &[
    ("small", &["mushroom", "tomato", "pinapple"]),
    ("medium", &[]),
    ("large", &["seafood"]),
    ("jumbo", &["veggie"]),
];

/// Print a description of a pizza, along with its price.
fn order_pizza(pizza: &Pizza) {
    println!("A {pizza}");
    println!("Price: {}", pizza.price());
}

fn main() -> Result<()> {
    pizzeria_observability::init();

    for (size_name, toppings) in SAMPLE_ORDERS {
        let size = PizzaSize::parse(size_name)?;
        let mut pizza = Pizza::new(size);
        for topping in *toppings {
            pizza.add_topping(*topping);
        }

        tracing::info!(
            pizza_id = %pizza.id_typed(),
            size = %pizza.size(),
            toppings = pizza.toppings().len(),
            "pizza prepared"
        );
        order_pizza(&pizza);
    }

    Ok(())
}
