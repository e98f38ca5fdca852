use serde::{Deserialize, Serialize};

/// One open order as returned by `orders.json` with `fields=id,line_items`.
#[derive(Debug, Clone, Deserialize)]
pub struct Order {
    pub id: u64,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LineItem {
    /// Absent when the line item has no associated product.
    pub product_id: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct OrdersEnvelope {
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// One fetched page of orders plus the `rel="next"` URL from the
/// `Link` response header, if any.
#[derive(Debug)]
pub struct OrdersPage {
    pub orders: Vec<Order>,
    pub next: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ProductEnvelope {
    #[serde(default)]
    pub product: Option<ProductBody>,
}

#[derive(Debug, Deserialize)]
pub struct ProductBody {
    /// Comma/space-delimited tag string, e.g. `"sale, live, new"`.
    #[serde(default)]
    pub tags: String,
}

impl ProductEnvelope {
    /// A missing product object or missing tags field both mean "no tags".
    pub fn into_tags(self) -> String {
        self.product.map(|p| p.tags).unwrap_or_default()
    }
}

#[derive(Debug, Serialize)]
pub struct QueueResponse {
    #[serde(rename = "queueLength")]
    pub queue_length: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_without_line_items_deserializes() {
        let order: Order = serde_json::from_str(r#"{"id": 42}"#).unwrap();
        assert_eq!(order.id, 42);
        assert!(order.line_items.is_empty());
    }

    #[test]
    fn test_line_item_with_null_product() {
        let item: LineItem = serde_json::from_str(r#"{"product_id": null}"#).unwrap();
        assert!(item.product_id.is_none());
    }

    #[test]
    fn test_product_envelope_missing_product_means_no_tags() {
        let envelope: ProductEnvelope = serde_json::from_str("{}").unwrap();
        assert_eq!(envelope.into_tags(), "");

        let envelope: ProductEnvelope =
            serde_json::from_str(r#"{"product": {"tags": "sale, live"}}"#).unwrap();
        assert_eq!(envelope.into_tags(), "sale, live");
    }

    #[test]
    fn test_queue_response_serializes_camel_case() {
        let body = serde_json::to_string(&QueueResponse { queue_length: 7 }).unwrap();
        assert_eq!(body, r#"{"queueLength":7}"#);
    }
}
