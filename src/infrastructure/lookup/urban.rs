//! Urban Dictionary client

use async_trait::async_trait;
use serde::Deserialize;

use super::http::HttpClient;
use crate::application::errors::FetchError;
use crate::domain::traits::{Definition, DefinitionSource};

/// Urban Dictionary API endpoint
const API_BASE: &str = "https://api.urbandictionary.com";

#[derive(Deserialize)]
struct DefineResponse {
    #[serde(default)]
    list: Vec<Entry>,
}

#[derive(Deserialize)]
struct Entry {
    definition: String,
    #[serde(default)]
    example: String,
}

/// Looks up slang definitions. Needs no credentials.
pub struct UrbanDictionary {
    http: HttpClient,
    base_url: String,
}

impl UrbanDictionary {
    pub fn new(http: HttpClient) -> Self {
        Self {
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
impl DefinitionSource for UrbanDictionary {
    async fn search_definition(&self, term: &str) -> Result<Option<Definition>, FetchError> {
        let url = format!("{}/v0/define", self.base_url);
        let request = self.http.get(&url).query(&[("term", term)]);

        let data: DefineResponse = self.http.json(request).await?;
        Ok(data.list.into_iter().next().map(|entry| Definition {
            definition: entry.definition,
            example: entry.example,
        }))
    }
}
