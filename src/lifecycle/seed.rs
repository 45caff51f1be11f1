//! Built-in menu and orders loaded when the system starts.
//!
//! Seed ids are 32-character hex strings, so they never collide with the
//! decimal ids handed out by [`IdGenerator`](crate::framework::IdGenerator).

use crate::model::{Dish, Order, OrderLineItem, OrderStatus};
use serde_json::Value;

pub fn seed_dishes() -> Vec<Dish> {
    vec![
        Dish::new(
            "d351db2b49b69679504652ea1cf38241",
            "Dolcelatte and chickpea spaghetti",
            "Spaghetti topped with a blend of dolcelatte and fresh chickpeas",
            19,
            "https://images.pexels.com/photos/1279330/pexels-photo-1279330.jpeg?h=530&w=350",
        ),
        Dish::new(
            "3c637d011d844ebab1205fef8a7e36ea",
            "Broccoli and beetroot stir fry",
            "Crunchy stir fry featuring fresh broccoli and beetroot",
            15,
            "https://images.pexels.com/photos/4144234/pexels-photo-4144234.jpeg?h=530&w=350",
        ),
        Dish::new(
            "90c3d873684bf381dfab29034b5bba73",
            "Falafel and tahini bagel",
            "A warm bagel filled with falafel and tahini",
            6,
            "https://images.pexels.com/photos/4560606/pexels-photo-4560606.jpeg?h=530&w=350",
        ),
    ]
}

pub fn seed_orders() -> Vec<Order> {
    vec![
        Order::new(
            "f6069a542257054114138301947672ba",
            "1600 Pennsylvania Avenue NW, Washington, DC 20500",
            "(202) 456-1111",
            OrderStatus::OutForDelivery,
            vec![seed_line_item(&seed_dishes()[2], 1)],
        ),
        Order::new(
            "5a887d326e83d3c5bdcbee398ea32aff",
            "308 Negra Arroyo Lane, Albuquerque, NM",
            "(505) 143-3369",
            OrderStatus::Delivered,
            vec![seed_line_item(&seed_dishes()[0], 2)],
        ),
        Order::new(
            "8b4eb1c6ef0e4b8ba1f5a0bd10c4bd0e",
            "221B Baker Street, London",
            "(020) 7224-3688",
            OrderStatus::Pending,
            vec![
                seed_line_item(&seed_dishes()[1], 1),
                seed_line_item(&seed_dishes()[2], 3),
            ],
        ),
    ]
}

// Line items carry a copy of the dish as it was when ordered.
fn seed_line_item(dish: &Dish, quantity: i64) -> OrderLineItem {
    let mut item = OrderLineItem::new(dish.id.clone(), quantity);
    item.details
        .insert("name".to_string(), Value::String(dish.name.clone()));
    item.details
        .insert("description".to_string(), Value::String(dish.description.clone()));
    item.details.insert("price".to_string(), Value::from(dish.price));
    item.details
        .insert("image_url".to_string(), Value::String(dish.image_url.clone()));
    item
}
