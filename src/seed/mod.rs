//! The fixed collections served by the API.

use crate::models::{Order, Product, User};

/// Immutable snapshot of every collection, built once and shared by handlers.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub users: Vec<User>,
    pub products: Vec<Product>,
    pub orders: Vec<Order>,
}

impl Catalog {
    /// The three-record collections the service ships with.
    pub fn seeded() -> Self {
        Self {
            users: seed_users(),
            products: seed_products(),
            orders: seed_orders(),
        }
    }
}

fn user(id: i64, name: &str, age: i64) -> User {
    User {
        id,
        name: name.to_string(),
        age,
    }
}

fn product(id: i64, name: &str, price: f64) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
    }
}

fn order(id: i64, user_id: i64, product_id: i64, quantity: i64) -> Order {
    Order {
        id,
        user_id,
        product_id,
        quantity,
    }
}

pub fn seed_users() -> Vec<User> {
    vec![
        user(1, "Alice", 30),
        user(2, "Bob", 25),
        user(3, "Charlie", 35),
    ]
}

pub fn seed_products() -> Vec<Product> {
    vec![
        product(101, "Laptop", 999.99),
        product(102, "Phone", 499.99),
        product(103, "Headphones", 199.99),
    ]
}

pub fn seed_orders() -> Vec<Order> {
    vec![
        order(1001, 1, 101, 1),
        order(1002, 2, 103, 2),
        order(1003, 3, 102, 1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_users_in_order() {
        let users = seed_users();
        let rows: Vec<(i64, &str, i64)> = users
            .iter()
            .map(|u| (u.id, u.name.as_str(), u.age))
            .collect();
        assert_eq!(rows, vec![(1, "Alice", 30), (2, "Bob", 25), (3, "Charlie", 35)]);
    }

    #[test]
    fn seeded_products_in_order() {
        let products = seed_products();
        let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![101, 102, 103]);
        assert_eq!(products[2].name, "Headphones");
        assert!((products[0].price - 999.99).abs() < f64::EPSILON);
    }

    #[test]
    fn orders_reference_seeded_users_and_products() {
        let catalog = Catalog::seeded();
        for order in &catalog.orders {
            assert!(catalog.users.iter().any(|u| u.id == order.user_id));
            assert!(catalog.products.iter().any(|p| p.id == order.product_id));
        }
        assert_eq!(catalog.orders[1], order(1002, 2, 103, 2));
    }
}
