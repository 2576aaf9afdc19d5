use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::traits::ArticleSource;
use crate::types::{FetchOutcome, HarvesterError, Result};

/// Prefixes marking a redirect page when the extract is requested without
/// redirect resolution.
const REDIRECT_MARKERS: &[&str] = &["#REDIRECT", "#redirect", "#पुनर्निर्देशन"];

#[derive(Debug, Deserialize)]
struct ApiResponse {
    error: Option<ApiError>,
    query: Option<ApiQuery>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    info: String,
}

#[derive(Debug, Deserialize)]
struct ApiQuery {
    #[serde(default)]
    random: Vec<RandomTitle>,
    #[serde(default)]
    pages: Vec<PageInfo>,
}

#[derive(Debug, Deserialize)]
struct RandomTitle {
    title: String,
}

#[derive(Debug, Deserialize)]
struct PageInfo {
    #[serde(default)]
    missing: bool,
    extract: Option<String>,
    pageprops: Option<serde_json::Map<String, serde_json::Value>>,
}

/// MediaWiki Action API client for a single wiki.
pub struct WikipediaSource {
    client: Client,
    endpoint: Url,
}

impl WikipediaSource {
    pub fn new(language: &str, user_agent: &str, timeout: Duration) -> Result<Self> {
        Self::with_endpoint(
            &format!("https://{}.wikipedia.org/w/api.php", language),
            user_agent,
            timeout,
        )
    }

    /// Points the client at an explicit API endpoint (used by tests).
    pub fn with_endpoint(endpoint: &str, user_agent: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        let client = Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()
            .expect("Failed to create HTTP client");
        Ok(Self { client, endpoint })
    }

    async fn api_get(&self, params: &[(&str, &str)]) -> Result<ApiResponse> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(params)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HarvesterError::Status {
                status: status.as_u16(),
            });
        }
        let body: ApiResponse = response.json().await?;
        if let Some(err) = body.error {
            return Err(HarvesterError::Api {
                code: err.code,
                info: err.info,
            });
        }
        Ok(body)
    }
}

#[async_trait]
impl ArticleSource for WikipediaSource {
    async fn random_titles(&self, count: usize) -> Result<Vec<String>> {
        let limit = count.to_string();
        let body = self
            .api_get(&[
                ("action", "query"),
                ("format", "json"),
                ("formatversion", "2"),
                ("list", "random"),
                ("rnnamespace", "0"),
                ("rnlimit", limit.as_str()),
            ])
            .await?;
        let titles = body
            .query
            .map(|q| q.random.into_iter().map(|r| r.title).collect())
            .unwrap_or_default();
        Ok(titles)
    }

    async fn fetch_extract(&self, title: &str) -> Result<FetchOutcome> {
        let body = self
            .api_get(&[
                ("action", "query"),
                ("format", "json"),
                ("formatversion", "2"),
                ("prop", "extracts|pageprops"),
                ("explaintext", "1"),
                ("exlimit", "1"),
                ("redirects", "0"),
                ("titles", title),
            ])
            .await?;

        let page = match body.query.and_then(|q| q.pages.into_iter().next()) {
            Some(page) => page,
            None => return Ok(FetchOutcome::NotFound),
        };
        if page.missing {
            return Ok(FetchOutcome::NotFound);
        }
        if page
            .pageprops
            .as_ref()
            .is_some_and(|props| props.contains_key("disambiguation"))
        {
            return Ok(FetchOutcome::Disambiguation);
        }

        let extract = page.extract.unwrap_or_default();
        let trimmed = extract.trim_start();
        if trimmed.is_empty()
            || REDIRECT_MARKERS
                .iter()
                .any(|marker| trimmed.starts_with(marker))
        {
            debug!("Title resolved to a redirect page: {}", title);
            return Ok(FetchOutcome::Redirect);
        }
        Ok(FetchOutcome::Content(extract))
    }
}
