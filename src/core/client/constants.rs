//! Centralized constants for default endpoints, UA, and pipeline knobs.

use std::time::Duration;

/// Default desktop UA to avoid trivial bot blocking; the source sites reject
/// unidentified clients.
pub(crate) const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (X11; Linux x86_64) ",
    "AppleWebKit/537.36 (KHTML, like Gecko) ",
    "Chrome/122.0.0.0 Safari/537.36"
);

/// Upcoming-IPO calendar page (two tables: Mainboard first, SME second).
pub(crate) const DEFAULT_CALENDAR_URL: &str =
    "https://ipowatch.in/upcoming-ipo-calendar-ipo-list/";

/// Grey-market-premium table page.
pub(crate) const DEFAULT_GMP_URL: &str =
    "https://ipowatch.in/ipo-grey-market-premium-latest-ipo-gmp/";

/// Overall per-request timeout. Bounds every fetch in the pipeline,
/// including each fanned-out detail fetch.
pub(crate) const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// How long a memoized aggregation is served before the next call
/// recomputes it.
pub(crate) const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// How many detail pages are fetched concurrently during row fan-out.
pub(crate) const DEFAULT_DETAIL_CONCURRENCY: usize = 8;
