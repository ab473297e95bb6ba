//! Core types and shared functionality for wxscrape.
//!
//! This crate provides:
//! - Forecast record types produced by the extractors
//! - Unified error types
//! - Configuration structures, including the site registry

pub mod config;
pub mod error;
pub mod forecast;

pub use config::{AppConfig, ConfigError, SiteConfig, SiteRegistry, UrlError, site_url};
pub use error::Error;
pub use forecast::{Field, ForecastKind, HourlyForecastEntry, MISSING_VALUE, TenDayForecastEntry};
