//! Google Custom Search adapter

use crate::config::FileGoogleSearchConfig;
use crate::credentials::resolve_secret;
use async_trait::async_trait;
use serde::Deserialize;
use station_application::ports::search::SearchGateway;
use station_domain::{Keyword, SearchResult};
use tracing::{debug, info, warn};

#[derive(Deserialize, Default)]
#[serde(default)]
struct SearchResponse {
    items: Vec<Item>,
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct Item {
    title: String,
    snippet: String,
    link: String,
}

/// Recent-news search through the Custom Search JSON API
pub struct GoogleSearchGateway {
    client: reqwest::Client,
    credentials: Option<(String, String)>,
    base_url: String,
    date_restrict: String,
    num: u32,
    language: String,
}

impl GoogleSearchGateway {
    pub fn new(client: reqwest::Client, config: &FileGoogleSearchConfig) -> Self {
        let api_key = resolve_secret(config.api_key.as_deref(), &config.api_key_env);
        let cx = resolve_secret(config.cx.as_deref(), &config.cx_env);
        let credentials = api_key.zip(cx);
        if credentials.is_none() {
            info!("Google search not configured, forecasts will rely on model knowledge");
        }

        Self {
            client,
            credentials,
            base_url: config.base_url.clone(),
            date_restrict: config.date_restrict.clone(),
            num: config.num,
            language: config.language.clone(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials.is_some()
    }

    async fn fetch(&self, key: &str, cx: &str, query: &str) -> Result<Vec<Item>, reqwest::Error> {
        let num = self.num.to_string();
        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("key", key),
                ("cx", cx),
                ("q", query),
                ("dateRestrict", self.date_restrict.as_str()),
                ("num", num.as_str()),
                ("lr", self.language.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<SearchResponse>().await?.items)
    }
}

#[async_trait]
impl SearchGateway for GoogleSearchGateway {
    async fn search(&self, keyword: &Keyword) -> Vec<SearchResult> {
        let Some((key, cx)) = &self.credentials else {
            return Vec::new();
        };

        match self.fetch(key, cx, keyword.as_str()).await {
            Ok(items) => {
                debug!(keyword = %keyword, count = items.len(), "Search complete");
                items
                    .into_iter()
                    .map(|item| SearchResult::new(item.title, item.snippet, item.link))
                    .collect()
            }
            Err(e) => {
                warn!(keyword = %keyword, "Google search failed: {}", e.without_url());
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn config(base_url: &str) -> FileGoogleSearchConfig {
        FileGoogleSearchConfig {
            api_key: Some("search-key".into()),
            cx: Some("engine-id".into()),
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    fn keyword() -> Keyword {
        Keyword::try_new("ラーメン").unwrap()
    }

    #[tokio::test]
    async fn test_search_maps_items_and_sends_restrictions() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/customsearch")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("key".into(), "search-key".into()),
                Matcher::UrlEncoded("cx".into(), "engine-id".into()),
                Matcher::UrlEncoded("q".into(), "ラーメン".into()),
                Matcher::UrlEncoded("dateRestrict".into(), "d1".into()),
                Matcher::UrlEncoded("num".into(), "10".into()),
                Matcher::UrlEncoded("lr".into(), "lang_ja".into()),
            ]))
            .with_status(200)
            .with_body(
                r#"{"items":[
                    {"title":"A","snippet":"first","link":"https://a.example"},
                    {"title":"B","link":"https://b.example"}
                ]}"#,
            )
            .create_async()
            .await;

        let gateway = GoogleSearchGateway::new(
            reqwest::Client::new(),
            &config(&format!("{}/customsearch", server.url())),
        );
        assert!(gateway.is_configured());
        let results = gateway.search(&keyword()).await;

        mock.assert_async().await;
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "A");
        assert_eq!(results[0].snippet, "first");
        assert_eq!(results[0].link, "https://a.example");
        assert_eq!(results[1].snippet, "");
    }

    #[tokio::test]
    async fn test_missing_items_is_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/customsearch")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"searchInformation":{"totalResults":"0"}}"#)
            .create_async()
            .await;

        let gateway = GoogleSearchGateway::new(
            reqwest::Client::new(),
            &config(&format!("{}/customsearch", server.url())),
        );
        assert!(gateway.search(&keyword()).await.is_empty());
    }

    #[tokio::test]
    async fn test_error_status_is_empty() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("GET", "/customsearch")
            .match_query(Matcher::Any)
            .with_status(403)
            .with_body("forbidden")
            .create_async()
            .await;

        let gateway = GoogleSearchGateway::new(
            reqwest::Client::new(),
            &config(&format!("{}/customsearch", server.url())),
        );
        assert!(gateway.search(&keyword()).await.is_empty());
    }

    #[tokio::test]
    async fn test_unconfigured_gateway_does_not_call_out() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let gateway = GoogleSearchGateway::new(
            reqwest::Client::new(),
            &FileGoogleSearchConfig {
                api_key: Some("your_google_search_api_key_here".into()),
                cx: Some("engine-id".into()),
                base_url: server.url(),
                ..Default::default()
            },
        );

        assert!(!gateway.is_configured());
        assert!(gateway.search(&keyword()).await.is_empty());
        mock.assert_async().await;
    }
}
