// Company data: news search via Google Custom Search, then a short summary from the LLM.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::upstream::UpstreamError;

pub mod google_search;
pub mod handlers;
pub mod prompts;

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub link: String,
    #[serde(default)]
    pub snippet: String,
}

/// Custom Search response. `items` is absent when nothing matched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchResult>,
}

#[async_trait]
pub trait NewsSearch: Send + Sync {
    /// Recent news hits for `company`, in upstream relevance order.
    async fn company_news(&self, company: &str) -> Result<Vec<SearchResult>, UpstreamError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_without_items_is_empty() {
        let json = r#"{"kind": "customsearch#search", "searchInformation": {"totalResults": "0"}}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_search_response_items() {
        let json = r#"{"items": [
            {"title": "Acme raises Series B", "link": "https://news.example/acme", "snippet": "Acme said..."},
            {"title": "Acme opens office", "link": "https://news.example/acme-2"}
        ]}"#;
        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[1].snippet, "");
    }
}
