//! Web search through the Brave Search API.
//!
//! The tool never fails towards its caller: every outcome, including a
//! missing credential or a broken upstream response, is folded into a
//! [`SearchResponse`] envelope the model can read.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use super::Tool;
use crate::config::{ConfigError, SearchConfig};

/// Result count requested when the caller gives none.
pub const DEFAULT_NUM_RESULTS: u32 = 5;

const NO_TITLE: &str = "No Title";
const NO_URL: &str = "No URL";
const NO_DESCRIPTION: &str = "No Description";
const NO_RESULTS_MESSAGE: &str = "No results found.";

/// A single search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub text: String,
    pub desired_count: u32,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            desired_count: DEFAULT_NUM_RESULTS,
        }
    }

    pub fn with_count(mut self, desired_count: u32) -> Self {
        self.desired_count = desired_count;
        self
    }
}

/// One web result, reduced to what the model needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultItem {
    pub title: String,
    pub url: String,
    pub description: String,
}

/// Envelope returned to the agent runtime, tagged by `status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchResponse {
    Success {
        results: Vec<SearchResultItem>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        message: Option<String>,
    },
    Error {
        message: String,
    },
}

impl SearchResponse {
    pub fn is_success(&self) -> bool {
        matches!(self, SearchResponse::Success { .. })
    }

    pub fn results(&self) -> &[SearchResultItem] {
        match self {
            SearchResponse::Success { results, .. } => results,
            SearchResponse::Error { .. } => &[],
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            SearchResponse::Success { message, .. } => message.as_deref(),
            SearchResponse::Error { message } => Some(message),
        }
    }
}

impl From<SearchError> for SearchResponse {
    fn from(err: SearchError) -> Self {
        SearchResponse::Error {
            message: err.to_string(),
        }
    }
}

/// Why a search could not produce results.
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("Brave API key is missing. Cannot perform search.")]
    MissingApiKey,

    #[error("Invalid search configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Search query is empty.")]
    EmptyQuery,

    #[error("Error during web search: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("An unexpected error occurred: {0}")]
    UnexpectedPayload(#[from] serde_json::Error),

    #[error("An unexpected error occurred: {0}")]
    UnexpectedShape(String),
}

// Upstream payload: `{ "web": { "results": [ { "title", "url", "description", ... } ] } }`.
// Anything beyond these fields is ignored.

#[derive(Debug, Deserialize)]
struct BravePayload {
    // Absent is empty; an explicit `null` is malformed.
    #[serde(default)]
    web: BraveWebResults,
}

#[derive(Debug, Default, Deserialize)]
struct BraveWebResults {
    #[serde(default)]
    results: Option<Vec<BraveWebResult>>,
}

#[derive(Debug, Deserialize)]
struct BraveWebResult {
    title: Option<String>,
    url: Option<String>,
    description: Option<String>,
}

impl From<BraveWebResult> for SearchResultItem {
    fn from(result: BraveWebResult) -> Self {
        Self {
            title: result.title.unwrap_or_else(|| NO_TITLE.to_string()),
            url: result.url.unwrap_or_else(|| NO_URL.to_string()),
            description: result
                .description
                .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        }
    }
}

fn parse_results(body: &str) -> Result<Vec<SearchResultItem>, SearchError> {
    let value: Value = serde_json::from_str(body)?;
    if !value.is_object() {
        return Err(SearchError::UnexpectedShape(
            "response body is not a JSON object".to_string(),
        ));
    }

    let payload: BravePayload = serde_json::from_value(value)?;
    Ok(payload
        .web
        .results
        .unwrap_or_default()
        .into_iter()
        .map(SearchResultItem::from)
        .collect())
}

#[derive(Debug, Clone)]
enum ConfigSource {
    /// Re-read the environment on every call.
    Env,
    Fixed(SearchConfig),
}

/// Search the web with Brave.
#[derive(Debug, Clone)]
pub struct BraveSearch {
    source: ConfigSource,
}

impl BraveSearch {
    /// Tool that resolves its credential from the environment at call time.
    pub fn from_env() -> Self {
        Self {
            source: ConfigSource::Env,
        }
    }

    pub fn new(config: SearchConfig) -> Self {
        Self {
            source: ConfigSource::Fixed(config),
        }
    }

    /// Run one search. Always returns an envelope.
    pub async fn search(&self, query: &SearchQuery) -> SearchResponse {
        tracing::info!("Performing Brave search for query: '{}'", query.text);

        match self.run(query).await {
            Ok(results) if results.is_empty() => {
                tracing::warn!("No web results found for query: '{}'", query.text);
                SearchResponse::Success {
                    results,
                    message: Some(NO_RESULTS_MESSAGE.to_string()),
                }
            }
            Ok(results) => {
                tracing::info!(
                    "Found {} results for query: '{}'",
                    results.len(),
                    query.text
                );
                SearchResponse::Success {
                    results,
                    message: None,
                }
            }
            Err(err) => {
                match &err {
                    SearchError::MissingApiKey => {
                        tracing::error!("Brave API key not found in environment variables.")
                    }
                    SearchError::Config(e) => {
                        tracing::error!("Invalid search configuration: {}", e)
                    }
                    SearchError::EmptyQuery => {
                        tracing::error!("Refusing to search for an empty query")
                    }
                    SearchError::Transport(e) => {
                        tracing::error!("Error calling Brave Search API: {}", e)
                    }
                    SearchError::UnexpectedPayload(e) => {
                        tracing::error!("An unexpected error occurred during Brave search: {}", e)
                    }
                    SearchError::UnexpectedShape(e) => {
                        tracing::error!("An unexpected error occurred during Brave search: {}", e)
                    }
                }
                err.into()
            }
        }
    }

    fn config(&self) -> Result<SearchConfig, SearchError> {
        match &self.source {
            ConfigSource::Env => Ok(SearchConfig::from_env()?),
            ConfigSource::Fixed(config) => Ok(config.clone()),
        }
    }

    async fn run(&self, query: &SearchQuery) -> Result<Vec<SearchResultItem>, SearchError> {
        let config = self.config()?;
        let api_key = config.api_key().map_err(|_| SearchError::MissingApiKey)?;

        if query.text.is_empty() {
            return Err(SearchError::EmptyQuery);
        }

        let client = reqwest::Client::builder().timeout(config.timeout).build()?;

        let count = query.desired_count.to_string();
        let response = client
            .get(config.endpoint.clone())
            .header("Accept", "application/json")
            .header("Accept-Encoding", "gzip")
            .header("X-Subscription-Token", api_key)
            .query(&[
                ("q", query.text.as_str()),
                ("count", count.as_str()),
                ("text_decorations", "false"),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body = response.text().await?;
        parse_results(&body)
    }
}

#[async_trait]
impl Tool for BraveSearch {
    fn name(&self) -> &str {
        "brave_search"
    }

    fn description(&self) -> &str {
        "Performs a web search using the Brave Search API. Use this tool when the user asks a question that requires searching the internet for up-to-date information or general knowledge, e.g. 'Search the web for recent AI advancements' or 'Find news about the stock market'. Returns {status: 'success', results: [{title, url, description}]} or {status: 'error', message}."
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string",
                    "description": "The search query"
                },
                "num_results": {
                    "type": "integer",
                    "description": "The desired number of search results (default: 5)"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<Value> {
        let response = match args["query"].as_str() {
            Some(query) => {
                let num_results = args["num_results"]
                    .as_u64()
                    .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
                    .unwrap_or(DEFAULT_NUM_RESULTS);
                self.search(&SearchQuery::new(query).with_count(num_results))
                    .await
            }
            None => {
                tracing::error!("brave_search called without a 'query' argument");
                SearchResponse::Error {
                    message: "Missing 'query' argument".to_string(),
                }
            }
        };

        Ok(serde_json::to_value(response)?)
    }
}

/// Search using the credential and endpoint found in the environment.
pub async fn brave_search(query: &str, num_results: u32) -> SearchResponse {
    BraveSearch::from_env()
        .search(&SearchQuery::new(query).with_count(num_results))
        .await
}
