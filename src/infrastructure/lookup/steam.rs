//! Steam app list client

use async_trait::async_trait;
use serde::Deserialize;

use super::http::HttpClient;
use crate::application::errors::FetchError;
use crate::domain::entities::CatalogEntry;
use crate::domain::traits::CatalogSource;

/// Steam Web API endpoint
const API_BASE: &str = "http://api.steampowered.com";

#[derive(Deserialize)]
struct AppListResponse {
    applist: AppList,
}

#[derive(Deserialize)]
struct AppList {
    apps: Vec<CatalogEntry>,
}

/// Fetches the full list of Steam apps
pub struct SteamCatalog {
    api_key: String,
    http: HttpClient,
    base_url: String,
}

impl SteamCatalog {
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

    fn url(&self) -> String {
        format!("{}/ISteamApps/GetAppList/v0002/", self.base_url)
    }
}

#[async_trait]
impl CatalogSource for SteamCatalog {
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, FetchError> {
        let request = self
            .http
            .get(&self.url())
            .query(&[("key", self.api_key.as_str()), ("format", "json")]);

        let data: AppListResponse = self.http.json(request).await?;
        Ok(data.applist.apps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn catalog(server: &MockServer) -> SteamCatalog {
        let http = HttpClient::new(Duration::from_secs(5)).unwrap();
        SteamCatalog::new("steam-key", http).with_base_url(server.uri())
    }

    #[tokio::test]
    async fn test_fetch_catalog_parses_app_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ISteamApps/GetAppList/v0002/"))
            .and(query_param("key", "steam-key"))
            .and(query_param("format", "json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "applist": { "apps": [
                    { "appid": 10, "name": "Counter-Strike" },
                    { "appid": 400, "name": "Portal" }
                ]}
            })))
            .mount(&server)
            .await;

        let entries = catalog(&server).fetch_catalog().await.unwrap();

        assert_eq!(
            entries,
            vec![CatalogEntry::new(10, "Counter-Strike"), CatalogEntry::new(400, "Portal")]
        );
    }

    #[tokio::test]
    async fn test_fetch_catalog_reports_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        assert_eq!(catalog(&server).fetch_catalog().await, Err(FetchError::Status(403)));
    }

    #[tokio::test]
    async fn test_fetch_catalog_rejects_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        assert!(matches!(catalog(&server).fetch_catalog().await, Err(FetchError::Parse(_))));
    }
}
