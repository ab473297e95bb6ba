//! Site registry: logical site name to page URL.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single scrape target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub url: String,
}

/// Explicit name → site mapping handed to the scraper at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SiteRegistry(BTreeMap<String, SiteConfig>);

impl Default for SiteRegistry {
    fn default() -> Self {
        Self::from_iter([("wowt", "https://www.wowt.com/weather")])
    }
}

impl SiteRegistry {
    pub fn get(&self, name: &str) -> Option<&SiteConfig> {
        self.0.get(name)
    }

    pub fn url(&self, name: &str) -> Option<&str> {
        self.get(name).map(|site| site.url.as_str())
    }

    pub fn insert(&mut self, name: impl Into<String>, url: impl Into<String>) {
        self.0.insert(name.into(), SiteConfig { url: url.into() });
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SiteConfig)> {
        self.0.iter().map(|(name, site)| (name.as_str(), site))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>, U: Into<String>> FromIterator<(N, U)> for SiteRegistry {
    fn from_iter<I: IntoIterator<Item = (N, U)>>(iter: I) -> Self {
        let mut registry = SiteRegistry(BTreeMap::new());
        for (name, url) in iter {
            registry.insert(name, url);
        }
        registry
    }
}
