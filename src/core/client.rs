use crate::config::StoreConfig;
use crate::domain::model::{OrdersEnvelope, OrdersPage, ProductEnvelope};
use crate::domain::ports::ShopifyApi;
use crate::utils::error::{QueueError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;

const ACCESS_TOKEN_HEADER: &str = "X-Shopify-Access-Token";
const API_VERSION: &str = "2024-04";
const PAGE_SIZE: u32 = 250;

/// Reqwest-backed transport against one store's Admin REST API.
pub struct ShopifyClient {
    client: Client,
    base_url: String,
    access_token: String,
}

impl ShopifyClient {
    pub fn new(config: &StoreConfig) -> Self {
        let base_url = format!(
            "https://{}.myshopify.com/admin/api/{}",
            config.store, API_VERSION
        );
        Self::with_base_url(base_url, config.access_token.clone())
    }

    /// Point the client at an arbitrary base URL, e.g. a mock server.
    pub fn with_base_url(base_url: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            access_token: access_token.into(),
        }
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        tracing::debug!("📡 GET {}", url);
        let response = self
            .client
            .get(url)
            .header(ACCESS_TOKEN_HEADER, &self.access_token)
            .send()
            .await?;

        tracing::debug!("API response status: {}", response.status());
        if !response.status().is_success() {
            return Err(QueueError::UpstreamStatusError {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ShopifyApi for ShopifyClient {
    async fn fetch_orders_page(&self, page_url: Option<&str>) -> Result<OrdersPage> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => format!(
                "{}/orders.json?status=open&fields=id,line_items&limit={}",
                self.base_url, PAGE_SIZE
            ),
        };

        let response = self.get(&url).await?;

        let next = response
            .headers()
            .get(reqwest::header::LINK)
            .and_then(|value| value.to_str().ok())
            .and_then(next_page_url);
        if let Some(next_url) = &next {
            validate_url("next_page", next_url)?;
        }

        let envelope: OrdersEnvelope = response.json().await?;
        Ok(OrdersPage {
            orders: envelope.orders,
            next,
        })
    }

    async fn fetch_product_tags(&self, product_id: u64) -> Result<String> {
        let url = format!("{}/products/{}.json?fields=tags", self.base_url, product_id);
        let response = self.get(&url).await?;
        let envelope: ProductEnvelope = response.json().await?;
        Ok(envelope.into_tags())
    }
}

/// Extract the `rel="next"` URL from a `Link` response header.
fn next_page_url(link: &str) -> Option<String> {
    let re = Regex::new(r#"<([^>]+)>;\s*rel="next""#).unwrap();
    re.captures(link).map(|caps| caps[1].to_string())
}
