mod order;
mod product;
mod user;

pub use order::Order;
pub use product::Product;
pub use user::User;

use serde::{Deserialize, Serialize};

/// Body of `GET /status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}
