use crate::core::paginator::OrderPaginator;
use crate::domain::model::Order;
use crate::domain::ports::ShopifyApi;
use crate::utils::error::Result;
use std::collections::HashMap;

/// Tag marking a product as live; orders containing one count toward the queue.
pub const LIVE_TAG: &str = "live";

/// Per-invocation memo of product id to raw tag string. Each distinct
/// product is fetched from the upstream at most once per invocation.
type TagCache = HashMap<u64, String>;

/// Exact-token membership test. Tag strings are split on the literal
/// `", "` delimiter with no trimming and no case folding, so
/// `"sale, Live"` does not contain `"live"`.
fn tags_contain(tags: &str, tag: &str) -> bool {
    tags.split(", ").any(|candidate| candidate == tag)
}

async fn resolve_tags<'c, A: ShopifyApi + ?Sized>(
    api: &A,
    cache: &'c mut TagCache,
    product_id: u64,
) -> Result<&'c str> {
    if !cache.contains_key(&product_id) {
        let tags = api.fetch_product_tags(product_id).await?;
        tracing::debug!("Resolved tags for product {}: {:?}", product_id, tags);
        cache.insert(product_id, tags);
    }
    Ok(cache
        .get(&product_id)
        .map(String::as_str)
        .unwrap_or_default())
}

async fn order_contains_tag<A: ShopifyApi + ?Sized>(
    api: &A,
    cache: &mut TagCache,
    order: &Order,
    tag: &str,
) -> Result<bool> {
    for item in &order.line_items {
        let product_id = match item.product_id {
            Some(id) => id,
            None => continue,
        };

        let tags = resolve_tags(api, cache, product_id).await?;
        if tags_contain(tags, tag) {
            // Stop scanning this order's remaining line items.
            return Ok(true);
        }
    }
    Ok(false)
}

/// Count open orders containing at least one line item whose product
/// carries `tag`. All pages are materialized before aggregation; any
/// upstream failure aborts the whole computation, never yielding a
/// partial count.
pub async fn count_tagged_orders<A: ShopifyApi + ?Sized>(api: &A, tag: &str) -> Result<u64> {
    let orders = OrderPaginator::new(api).collect_orders().await?;

    let mut cache = TagCache::new();
    let mut count = 0;
    for order in &orders {
        if order_contains_tag(api, &mut cache, order, tag).await? {
            count += 1;
        }
    }

    tracing::info!(
        "✅ {} of {} open orders contain a '{}'-tagged product",
        count,
        orders.len(),
        tag
    );
    Ok(count)
}
