// src/lib.rs
pub mod config;
pub mod error;
pub mod logging;
pub mod redirect;
pub mod sitemap;

pub use config::{RedirectorConfig, SitemapConfig, UpstreamConfig};
pub use error::SitemapError;
pub use redirect::{create_hooks, Address, ConnectionHook, ConnectionIntent, HookChain, HostRedirector, ServerConnection};
pub use sitemap::{SitemapBuilder, SitemapEntry};
