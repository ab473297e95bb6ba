//! Named-site scraping: registry lookup, one fetch, then extraction.

use chrono::{DateTime, TimeZone};
use wxscrape_core::{Error, HourlyForecastEntry, SiteRegistry, TenDayForecastEntry, site_url};

use crate::fetch::{FetchResponse, Fetcher};
use crate::forecast::{self, Document};

/// Scrapes registered sites through a [`Fetcher`].
pub struct SiteScraper<F: Fetcher> {
    sites: SiteRegistry,
    fetcher: F,
}

impl<F: Fetcher> SiteScraper<F> {
    pub fn new(sites: SiteRegistry, fetcher: F) -> Self {
        Self { sites, fetcher }
    }

    /// Fetch the page registered under `site_name`.
    ///
    /// The response is returned whatever its status.
    ///
    /// # Errors
    ///
    /// `UnknownSite` for unregistered names, `InvalidUrl` for a registry entry that is
    /// not an absolute http(s) URL, and whatever the fetcher reports.
    pub async fn scrape(&self, site_name: &str) -> Result<FetchResponse, Error> {
        let raw = self.sites.url(site_name).ok_or_else(|| Error::UnknownSite(site_name.to_string()))?;
        let url = site_url(raw).map_err(|e| Error::InvalidUrl(format!("{site_name}: {e}")))?;

        tracing::debug!(site = site_name, %url, "scraping site");
        self.fetcher.fetch(&url).await
    }

    /// Hourly listing for `site_name`, captured at `recorded_time`.
    pub async fn hourly<Z: TimeZone>(
        &self, site_name: &str, recorded_time: &DateTime<Z>,
    ) -> Result<Vec<HourlyForecastEntry>, Error> {
        let document = self.page(site_name).await?;
        forecast::hourly_from_document(&document, recorded_time)
    }

    /// Ten-day listing for `site_name`, captured at `recorded_time`.
    pub async fn ten_day<Z: TimeZone>(
        &self, site_name: &str, recorded_time: &DateTime<Z>,
    ) -> Result<Vec<TenDayForecastEntry>, Error> {
        let document = self.page(site_name).await?;
        forecast::ten_day_from_document(&document, recorded_time)
    }

    async fn page(&self, site_name: &str) -> Result<Document, Error> {
        let response = self.scrape(site_name).await?;
        response.require_success()?;
        Document::from_bytes(&response.bytes)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use bytes::Bytes;
    use chrono::Utc;
    use reqwest::{StatusCode, Url};

    use super::*;
    use crate::forecast::{PROVIDER_TZ, fixtures};

    struct StubFetcher {
        status: StatusCode,
        body: String,
        calls: AtomicUsize,
    }

    impl StubFetcher {
        fn ok(body: String) -> Self {
            Self { status: StatusCode::OK, body, calls: AtomicUsize::new(0) }
        }

        fn with_status(status: StatusCode) -> Self {
            Self { status, body: "<html><body>down</body></html>".into(), calls: AtomicUsize::new(0) }
        }
    }

    #[async_trait]
    impl Fetcher for StubFetcher {
        async fn fetch(&self, url: &Url) -> Result<FetchResponse, Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(FetchResponse {
                url: url.clone(),
                final_url: url.clone(),
                status: self.status,
                content_type: Some("text/html".into()),
                bytes: Bytes::from(self.body.clone()),
                fetch_ms: 0,
            })
        }
    }

    struct TimeoutFetcher;

    #[async_trait]
    impl Fetcher for TimeoutFetcher {
        async fn fetch(&self, url: &Url) -> Result<FetchResponse, Error> {
            Err(Error::FetchTimeout(url.to_string()))
        }
    }

    fn recorded() -> DateTime<chrono_tz::Tz> {
        PROVIDER_TZ.with_ymd_and_hms(2022, 7, 10, 15, 30, 0).unwrap()
    }

    #[tokio::test]
    async fn test_hourly_from_registered_site() {
        let scraper = SiteScraper::new(SiteRegistry::default(), StubFetcher::ok(fixtures::hourly_page(fixtures::HOURLY)));
        let entries = scraper.hourly("wowt", &recorded()).await.unwrap();

        assert_eq!(entries.len(), 12);
        assert_eq!(entries[0].valid_time, 1657486800);
        assert_eq!(entries[0].recorded_time, recorded().timestamp());
        assert_eq!(scraper.fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_ten_day_from_registered_site() {
        let scraper =
            SiteScraper::new(SiteRegistry::default(), StubFetcher::ok(fixtures::ten_day_page(fixtures::TEN_DAY)));
        let entries = scraper.ten_day("wowt", &recorded()).await.unwrap();

        assert_eq!(entries.len(), 10);
        assert_eq!(entries[0].reported_high_temp(), None);
        assert_eq!(entries[1].high_temp, 86);
    }

    #[tokio::test]
    async fn test_unknown_site() {
        let scraper = SiteScraper::new(SiteRegistry::default(), StubFetcher::ok(String::new()));
        let result = scraper.scrape("kwwl").await;

        assert!(matches!(result, Err(Error::UnknownSite(name)) if name == "kwwl"));
        assert_eq!(scraper.fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_registry_entry_with_bad_url() {
        let sites: SiteRegistry = [("local", "file:///tmp/weather.html")].into_iter().collect();
        let scraper = SiteScraper::new(sites, StubFetcher::ok(String::new()));

        assert!(matches!(scraper.scrape("local").await, Err(Error::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_scrape_returns_error_statuses() {
        let scraper = SiteScraper::new(SiteRegistry::default(), StubFetcher::with_status(StatusCode::BAD_GATEWAY));
        let response = scraper.scrape("wowt").await.unwrap();
        assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_extraction_requires_success_status() {
        let scraper = SiteScraper::new(SiteRegistry::default(), StubFetcher::with_status(StatusCode::BAD_GATEWAY));
        let result = scraper.hourly("wowt", &Utc::now()).await;

        assert!(matches!(result, Err(Error::HttpError(msg)) if msg.contains("502")));
        assert_eq!(scraper.fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_fetch_failure_is_not_retried() {
        let scraper = SiteScraper::new(SiteRegistry::default(), TimeoutFetcher);
        assert!(matches!(scraper.ten_day("wowt", &recorded()).await, Err(Error::FetchTimeout(_))));
    }

    #[tokio::test]
    async fn test_non_html_body() {
        let scraper = SiteScraper::new(SiteRegistry::default(), StubFetcher::ok("{\"forecast\": []}".into()));
        assert!(matches!(scraper.hourly("wowt", &recorded()).await, Err(Error::MalformedDocument(_))));
    }
}
