//! Black-box test: the sample order flow, size parsed from an untrusted name
//! through to price and description.

use pizzeria_core::DomainError;
use pizzeria_menu::PizzaSize;
use pizzeria_orders::Pizza;

fn prepare(size_name: &str, toppings: &[&str]) -> Pizza {
    let size = PizzaSize::parse(size_name).expect("sample sizes are on the menu");
    let mut pizza = Pizza::new(size);
    for topping in toppings {
        pizza.add_topping(*topping);
    }
    pizza
}

#[test]
fn sample_orders_price_and_describe() {
    let pizza = prepare("small", &["mushroom", "tomato", "pineapple"]);
    assert_eq!(
        pizza.describe(),
        "small pizza with mushroom, tomato, pineapple"
    );
    assert_eq!(pizza.price(), 180);

    let pizza = prepare("medium", &[]);
    assert_eq!(pizza.describe(), "medium plain cheese pizza");
    assert_eq!(pizza.price(), 200);

    let pizza = prepare("large", &["seafood"]);
    assert_eq!(pizza.describe(), "large pizza with seafood");
    assert_eq!(pizza.price(), 300);

    let pizza = prepare("jumbo", &["veggie"]);
    assert_eq!(pizza.describe(), "jumbo pizza with veggie");
    assert_eq!(pizza.price(), 390);
}

#[test]
fn unknown_size_fails_before_any_pizza_exists() {
    let err = PizzaSize::parse("family").unwrap_err();
    assert_eq!(err, DomainError::InvalidSize("family".to_string()));
}
