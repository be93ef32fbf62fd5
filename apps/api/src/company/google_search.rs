use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::company::{NewsSearch, SearchResponse, SearchResult};
use crate::upstream::{read_json, UpstreamError};

const CUSTOM_SEARCH_URL: &str = "https://www.googleapis.com/customsearch/v1";

/// Google Programmable Search (Custom Search JSON API) client.
#[derive(Clone)]
pub struct GoogleSearchClient {
    client: Client,
    api_key: String,
    engine_id: String,
}

impl GoogleSearchClient {
    pub fn new(client: Client, api_key: String, engine_id: String) -> Self {
        Self {
            client,
            api_key,
            engine_id,
        }
    }
}

pub fn news_query(company: &str) -> String {
    format!("{company} news")
}

#[async_trait]
impl NewsSearch for GoogleSearchClient {
    async fn company_news(&self, company: &str) -> Result<Vec<SearchResult>, UpstreamError> {
        let query = news_query(company);
        let response = self
            .client
            .get(CUSTOM_SEARCH_URL)
            .query(&[
                ("q", query.as_str()),
                ("key", self.api_key.as_str()),
                ("cx", self.engine_id.as_str()),
            ])
            .send()
            .await?;

        let body: SearchResponse = read_json(response).await?;
        debug!("Custom Search returned {} items for '{}'", body.items.len(), query);

        Ok(body.items)
    }
}
