pub mod client;
pub mod counter;
pub mod paginator;

pub use crate::domain::model::{Order, OrdersPage};
pub use crate::domain::ports::ShopifyApi;
pub use crate::utils::error::Result;
