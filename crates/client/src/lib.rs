//! Forecast scraping for wxscrape.
//!
//! This crate holds the fetch collaborator, the HTML extraction pipeline and the
//! site scraper that ties them to the configured registry.

pub mod fetch;
pub mod forecast;
pub mod scrape;

pub use fetch::{FetchClient, FetchConfig, FetchResponse, Fetcher};
pub use forecast::{Document, PROVIDER_TZ, parse_hourly, parse_ten_day};
pub use scrape::SiteScraper;
