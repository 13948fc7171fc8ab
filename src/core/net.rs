//! Page fetching.
//!
//! One GET per page, no retries and no backoff. Upstream is a public
//! site with aggressive anti-bot behavior; hammering it on failure only
//! gets the address blocked, so errors surface immediately and the
//! caller decides whether the pipeline degrades or fails.

use tracing::debug;
use url::Url;

use crate::core::error::IpoError;

/// Fetch `url` and return the response body as text.
///
/// Non-success statuses become [`IpoError::Status`] without reading the
/// body.
pub(crate) async fn fetch_html(http: &reqwest::Client, url: &Url) -> Result<String, IpoError> {
    debug!(%url, "fetching page");
    let resp = http.get(url.clone()).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(IpoError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    Ok(resp.text().await?)
}
