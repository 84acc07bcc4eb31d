use super::EntitySource;
use crate::config::DexConfig;
use crate::error::{DexError, Result};
use crate::model::{sprite_url, DetailPayload, EntityDetail, EntitySummary, ListingPayload};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Entity source backed by the REST API.
pub struct HttpSource {
    http: Client,
    base_url: String,
    sprite_base: String,
    page_limit: Option<u32>,
}

impl HttpSource {
    pub fn new(config: &DexConfig) -> Result<Self> {
        let mut builder =
            Client::builder().user_agent(concat!("dexview/", env!("CARGO_PKG_VERSION")));
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            sprite_base: config.sprite_url.clone(),
            page_limit: config.page_limit,
        })
    }

    pub fn listing_url(&self) -> &str {
        &self.base_url
    }

    pub fn detail_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }

    async fn get_json<T: DeserializeOwned>(&self, request: RequestBuilder, url: &str) -> Result<T> {
        debug!(url, "request issued");
        let response = request.send().await?;
        let status = response.status();
        debug!(url, status = status.as_u16(), "response received");

        if !status.is_success() {
            return Err(DexError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl EntitySource for HttpSource {
    async fn fetch_listing(&self) -> Result<Vec<EntitySummary>> {
        let url = self.listing_url();
        let mut request = self.http.get(url);
        if let Some(limit) = self.page_limit {
            request = request.query(&[("limit", limit)]);
        }
        let payload: ListingPayload = self.get_json(request, url).await?;
        Ok(payload.results)
    }

    async fn fetch_detail(&self, id: &str) -> Result<EntityDetail> {
        let url = self.detail_url(id);
        let payload: DetailPayload = self.get_json(self.http.get(&url), &url).await?;
        Ok(payload.into_detail(sprite_url(&self.sprite_base, id)))
    }
}
