use crate::domain::model::OrdersPage;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Transport seam for the upstream Admin API. The aggregation logic only
/// ever talks to this trait, so tests can swap in an in-memory fake.
#[async_trait]
pub trait ShopifyApi: Send + Sync {
    /// Fetch one page of open orders. `None` requests the first page;
    /// `Some(url)` follows a pagination link verbatim.
    async fn fetch_orders_page(&self, page_url: Option<&str>) -> Result<OrdersPage>;

    /// Fetch the raw tag string for one product.
    async fn fetch_product_tags(&self, product_id: u64) -> Result<String>;
}
