use serde::{Deserialize, Serialize};

/// Catalog product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    /// Price in dollars, serialised as a plain JSON number (e.g. 999.99)
    pub price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn make(id: i64, name: &str, price: f64) -> Product {
        Product {
            id,
            name: name.to_string(),
            price,
        }
    }

    #[test]
    fn same_id_with_different_fields_is_not_equal() {
        assert_ne!(make(101, "Laptop", 999.99), make(101, "Phone", 1.0));
        assert_ne!(make(101, "Laptop", 999.99), make(101, "Laptop", 10.0));
        assert_eq!(make(101, "Laptop", 999.99), make(101, "Laptop", 999.99));
    }

    #[test]
    fn price_serialises_as_decimal_number() {
        let value = serde_json::to_value(make(101, "Laptop", 999.99)).unwrap();
        assert_eq!(value, json!({ "id": 101, "name": "Laptop", "price": 999.99 }));
    }
}
