// src/config/models.rs
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_UPSTREAM_NAME: &str = "Xray";
pub const DEFAULT_UPSTREAM_HOST: &str = "127.0.0.1";
pub const DEFAULT_UPSTREAM_PORT: u16 = 7001;

pub const DEFAULT_BASE_URL: &str = "http://ip地址";
pub const DEFAULT_DOCUMENT_EXTENSION: &str = ".md";
pub const DEFAULT_EXCLUDED_FILES: &[&str] = &["_navbar.md", "_sidebar.md"];
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[];

/// Which hosts get rerouted, and where to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectorConfig {
    #[serde(default)]
    pub target_hosts: Vec<String>,

    #[serde(default)]
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Label used in log records, e.g. `Xray@127.0.0.1:7001`.
    #[serde(default = "default_upstream_name")]
    pub name: String,

    #[serde(default = "default_upstream_host")]
    pub host: String,

    #[serde(default = "default_upstream_port")]
    pub port: u16,
}

fn default_upstream_name() -> String {
    DEFAULT_UPSTREAM_NAME.to_string()
}

fn default_upstream_host() -> String {
    DEFAULT_UPSTREAM_HOST.to_string()
}

fn default_upstream_port() -> u16 {
    DEFAULT_UPSTREAM_PORT
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            name: default_upstream_name(),
            host: default_upstream_host(),
            port: default_upstream_port(),
        }
    }
}

impl RedirectorConfig {
    pub fn new(target_hosts: Vec<String>, upstream: UpstreamConfig) -> Self {
        Self {
            target_hosts,
            upstream,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.upstream.host.trim().is_empty() {
            bail!("upstream host must not be empty");
        }

        if self.upstream.port == 0 {
            bail!("upstream port must be non-zero");
        }

        let mut seen = HashSet::new();
        for host in &self.target_hosts {
            if host.trim().is_empty() {
                bail!("target host entries must not be blank");
            }
            if !seen.insert(host.as_str()) {
                tracing::warn!("Duplicate target host in config: {}", host);
            }
        }

        Ok(())
    }

    pub fn is_target(&self, host: &str) -> bool {
        self.target_hosts.iter().any(|target| target == host)
    }
}

/// Fixed inputs of the sitemap generator. Built in code, never read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapConfig {
    pub base_url: String,
    pub extension: String,
    pub excluded_files: Vec<String>,
    pub excluded_dirs: Vec<String>,
}

impl SitemapConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn excluding_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    pub fn excluding_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_files = files.into_iter().map(Into::into).collect();
        self
    }
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            extension: DEFAULT_DOCUMENT_EXTENSION.to_string(),
            excluded_files: DEFAULT_EXCLUDED_FILES.iter().map(|s| s.to_string()).collect(),
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_defaults() {
        let upstream = UpstreamConfig::default();
        assert_eq!(upstream.name, "Xray");
        assert_eq!(upstream.host, "127.0.0.1");
        assert_eq!(upstream.port, 7001);
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let config = RedirectorConfig::new(
            vec!["example.com".into()],
            UpstreamConfig {
                port: 0,
                ..UpstreamConfig::default()
            },
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_target() {
        let config = RedirectorConfig::new(vec!["  ".into()], UpstreamConfig::default());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_target_set_is_valid() {
        let config = RedirectorConfig::default();
        assert!(config.validate().is_ok());
        assert!(!config.is_target("10.211.55.39"));
    }

    #[test]
    fn test_target_match_is_case_sensitive() {
        let config = RedirectorConfig::new(vec!["Example.com".into()], UpstreamConfig::default());
        assert!(config.is_target("Example.com"));
        assert!(!config.is_target("example.com"));
    }

    #[test]
    fn test_sitemap_defaults() {
        let config = SitemapConfig::default();
        assert_eq!(config.base_url, "http://ip地址");
        assert_eq!(config.extension, ".md");
        assert_eq!(config.excluded_files, vec!["_navbar.md", "_sidebar.md"]);
        assert!(config.excluded_dirs.is_empty());
    }
}
