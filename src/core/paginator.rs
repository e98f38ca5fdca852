use crate::domain::model::Order;
use crate::domain::ports::ShopifyApi;
use crate::utils::error::Result;

/// Lazy, finite, non-restartable sequence of open-order pages. Each call to
/// [`next_page`](OrderPaginator::next_page) performs at most one upstream
/// fetch; once the upstream stops supplying a `rel="next"` link the
/// paginator is exhausted for good.
pub struct OrderPaginator<'a, A: ShopifyApi + ?Sized> {
    api: &'a A,
    next: Option<String>,
    done: bool,
}

impl<'a, A: ShopifyApi + ?Sized> OrderPaginator<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self {
            api,
            next: None,
            done: false,
        }
    }

    pub async fn next_page(&mut self) -> Result<Option<Vec<Order>>> {
        if self.done {
            return Ok(None);
        }

        let page = self.api.fetch_orders_page(self.next.as_deref()).await?;
        self.next = page.next;
        if self.next.is_none() {
            self.done = true;
        }

        tracing::debug!(
            "Fetched page with {} orders (more: {})",
            page.orders.len(),
            !self.done
        );
        Ok(Some(page.orders))
    }

    /// Drain the paginator, materializing every open order before any
    /// aggregation runs. A failure on any page aborts the whole sequence.
    pub async fn collect_orders(mut self) -> Result<Vec<Order>> {
        let mut orders = Vec::new();
        while let Some(page) = self.next_page().await? {
            orders.extend(page);
        }
        tracing::info!("Fetched {} open orders", orders.len());
        Ok(orders)
    }
}
