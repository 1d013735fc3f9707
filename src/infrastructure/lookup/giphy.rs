//! Giphy search client

use async_trait::async_trait;
use serde::Deserialize;

use super::http::HttpClient;
use crate::application::errors::FetchError;
use crate::domain::traits::MediaSearch;

/// Giphy API endpoint
const API_BASE: &str = "https://api.giphy.com";

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    data: Vec<Gif>,
}

#[derive(Deserialize)]
struct Gif {
    url: String,
}

/// Finds the top GIF for a search phrase
pub struct GiphySearch {
    api_key: String,
    http: HttpClient,
    base_url: String,
}

impl GiphySearch {
    pub fn new(api_key: impl Into<String>, http: HttpClient) -> Self {
        Self {
            api_key: api_key.into(),
            http,
            base_url: API_BASE.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl MediaSearch for GiphySearch {
    async fn search_media(&self, query: &str) -> Result<Option<String>, FetchError> {
        let url = format!("{}/v1/gifs/search", self.base_url);
        let request = self.http.get(&url).query(&[
            ("api_key", self.api_key.as_str()),
            ("q", query),
            ("limit", "1"),
            ("offset", "0"),
            ("rating", "R"),
            ("lang", "en"),
        ]);

        let data: SearchResponse = self.http.json(request).await?;
        Ok(data.data.into_iter().next().map(|gif| gif.url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn giphy(server: &MockServer) -> GiphySearch {
        let http = HttpClient::new(Duration::from_secs(5)).unwrap();
        GiphySearch::new("giphy-key", http).with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_search_returns_first_url() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/gifs/search"))
            .and(query_param("api_key", "giphy-key"))
            .and(query_param("q", "happy corgi"))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [
                    { "url": "https://giphy.com/gifs/first" },
                    { "url": "https://giphy.com/gifs/second" }
                ]
            })))
            .mount(&server)
            .await;

        let url = giphy(&server).search_media("happy corgi").await.unwrap();

        assert_eq!(url.as_deref(), Some("https://giphy.com/gifs/first"));
    }

    #[tokio::test]
    async fn test_search_without_hits() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
            .mount(&server)
            .await;

        assert_eq!(giphy(&server).search_media("qwxz").await, Ok(None));
    }

    #[tokio::test]
    async fn test_slow_server_times_out() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "data": [] }))
                    .set_delay(Duration::from_secs(2)),
            )
            .mount(&server)
            .await;

        let http = HttpClient::new(Duration::from_millis(200)).unwrap();
        let giphy = GiphySearch::new("giphy-key", http).with_base_url(server.uri());

        assert_eq!(
            giphy.search_media("corgi").await,
            Err(FetchError::Timeout(Duration::from_millis(200)))
        );
    }
}
