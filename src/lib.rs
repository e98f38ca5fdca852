pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

pub use config::{CliConfig, StoreConfig};
pub use core::client::ShopifyClient;
pub use server::{app, AppState};
pub use utils::error::{QueueError, Result};
