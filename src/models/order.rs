use serde::{Deserialize, Serialize};

/// A purchase linking a [`User`](super::User) to a [`Product`](super::Product).
/// The ids are not checked against the other collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}
