//! Public client surface + builder.
//! Defaults live in `constants` (UA + source page URLs + tuning knobs).

mod constants;

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::core::cache::{CacheTag, MemoStore};
use crate::core::error::IpoError;
use constants::{
    DEFAULT_CACHE_TTL, DEFAULT_CALENDAR_URL, DEFAULT_DETAIL_CONCURRENCY, DEFAULT_GMP_URL,
    DEFAULT_TIMEOUT, USER_AGENT,
};

/// Shared HTTP + cache handle used by every pipeline entry point.
///
/// Cloning is cheap and clones share the same memo store, so one client
/// per process is the intended shape.
#[derive(Debug, Clone)]
pub struct IpoClient {
    http: Client,
    calendar_url: Url,
    gmp_url: Url,
    detail_concurrency: usize,
    cache_ttl: Duration,
    memo: Arc<MemoStore>,
}

impl Default for IpoClient {
    fn default() -> Self {
        Self::builder().build().expect("default client")
    }
}

impl IpoClient {
    /// Create a new builder.
    pub fn builder() -> IpoClientBuilder {
        IpoClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn calendar_url(&self) -> &Url {
        &self.calendar_url
    }
    pub(crate) fn gmp_url(&self) -> &Url {
        &self.gmp_url
    }
    pub(crate) fn detail_concurrency(&self) -> usize {
        self.detail_concurrency
    }
    pub(crate) fn cache_ttl(&self) -> Duration {
        self.cache_ttl
    }
    pub(crate) fn memo(&self) -> &MemoStore {
        &self.memo
    }

    /* -------- cache control -------- */

    /// Drop the memoized results behind `tag`. The next call to the
    /// corresponding operation recomputes from live pages.
    pub async fn invalidate(&self, tag: CacheTag) {
        self.memo.invalidate(tag).await;
    }

    /// Drop every memoized result.
    pub async fn flush_cache(&self) {
        self.memo.flush().await;
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct IpoClientBuilder {
    user_agent: Option<String>,
    calendar_url: Option<Url>,
    gmp_url: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    cache_ttl: Option<Duration>,
    detail_concurrency: Option<usize>,
}

impl IpoClientBuilder {
    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the IPO calendar page URL.
    pub fn calendar_url(mut self, url: Url) -> Self {
        self.calendar_url = Some(url);
        self
    }

    /// Override the grey-market premium page URL.
    pub fn gmp_url(mut self, url: Url) -> Self {
        self.gmp_url = Some(url);
        self
    }

    /// Set a global request timeout (overall). Default: 10s.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// TTL for memoized results. Default: 1 hour. Zero recomputes on
    /// every call.
    pub fn cache_ttl(mut self, dur: Duration) -> Self {
        self.cache_ttl = Some(dur);
        self
    }

    /// How many detail pages to fetch concurrently. Default: 8,
    /// clamped to at least 1.
    pub fn detail_concurrency(mut self, limit: usize) -> Self {
        self.detail_concurrency = Some(limit);
        self
    }

    pub fn build(self) -> Result<IpoClient, IpoError> {
        let calendar_url = self
            .calendar_url
            .map_or_else(|| Url::parse(DEFAULT_CALENDAR_URL), Ok)?;
        let gmp_url = self.gmp_url.map_or_else(|| Url::parse(DEFAULT_GMP_URL), Ok)?;

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT))
            .timeout(self.timeout.unwrap_or(DEFAULT_TIMEOUT));

        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(IpoClient {
            http,
            calendar_url,
            gmp_url,
            detail_concurrency: self.detail_concurrency.unwrap_or(DEFAULT_DETAIL_CONCURRENCY).max(1),
            cache_ttl: self.cache_ttl.unwrap_or(DEFAULT_CACHE_TTL),
            memo: Arc::new(MemoStore::default()),
        })
    }
}
