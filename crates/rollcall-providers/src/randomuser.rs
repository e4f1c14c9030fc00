use rollcall_types::{PageResult, PageToken, User};
use serde::{Deserialize, Serialize};

use crate::{FetchError, PageSource, Result};

pub const DEFAULT_ENDPOINT: &str = "https://randomuser.me/api/";
pub const DEFAULT_RESULTS_PER_PAGE: u32 = 10;
pub const DEFAULT_SEED: &str = "test";

/// Highest page index that may still advertise a successor.
///
/// The source pages forever; the stream is cut after page 4 so accumulation
/// stays bounded no matter what the source reports.
pub const LAST_PAGE_INDEX: u32 = 3;

/// Request parameters sent with every page request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientOptions {
    pub endpoint: String,
    pub results_per_page: u32,
    /// Fixed seed so every run sees the same demo data
    pub seed: String,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            results_per_page: DEFAULT_RESULTS_PER_PAGE,
            seed: DEFAULT_SEED.to_string(),
        }
    }
}

/// Envelope returned by randomuser.me.
#[derive(Debug, Deserialize)]
pub struct RawPage {
    pub results: Vec<User>,
    pub info: RawPageInfo,
}

#[derive(Debug, Deserialize)]
pub struct RawPageInfo {
    pub page: u32,
}

/// Turn the remote envelope into a `PageResult`, applying the page cap.
pub fn normalize_page(raw: RawPage) -> PageResult {
    let page = raw.info.page;
    let next_page_token = if page > LAST_PAGE_INDEX {
        None
    } else {
        Some(PageToken::new(page).next())
    };

    PageResult::new(raw.results, next_page_token)
}

/// Page fetcher backed by the randomuser.me HTTP API.
#[derive(Debug, Clone)]
pub struct RandomUserClient {
    http: reqwest::Client,
    options: ClientOptions,
}

impl RandomUserClient {
    pub fn new(options: ClientOptions) -> Self {
        Self {
            http: reqwest::Client::new(),
            options,
        }
    }

    fn page_url(&self, token: PageToken) -> Result<reqwest::Url> {
        let results = self.options.results_per_page.to_string();
        let page = token.to_string();
        reqwest::Url::parse_with_params(
            &self.options.endpoint,
            &[
                ("results", results.as_str()),
                ("seed", self.options.seed.as_str()),
                ("page", page.as_str()),
            ],
        )
        .map_err(|e| FetchError::InvalidEndpoint(format!("'{}': {}", self.options.endpoint, e)))
    }

    async fn request_page(&self, token: PageToken) -> Result<PageResult> {
        let url = self.page_url(token)?;
        tracing::debug!(page = %token, url = %url, "fetching page");

        let response = self.http.get(url.clone()).send().await?;

        if !response.status().is_success() {
            tracing::warn!(page = %token, status = %response.status(), "page request failed");
            return Err(FetchError::Status {
                status: response.status().as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let raw: RawPage = serde_json::from_str(&body)?;
        let page = normalize_page(raw);

        tracing::debug!(
            page = %token,
            records = page.records.len(),
            last = page.is_last(),
            "page received"
        );

        Ok(page)
    }
}

impl Default for RandomUserClient {
    fn default() -> Self {
        Self::new(ClientOptions::default())
    }
}

impl PageSource for RandomUserClient {
    async fn fetch_page(&self, token: PageToken) -> Result<PageResult> {
        self.request_page(token).await
    }
}
