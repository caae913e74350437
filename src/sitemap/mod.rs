// src/sitemap/mod.rs
mod builder;
mod url;
mod walker;
pub mod xml;

pub use builder::{summary, SitemapBuilder, SitemapEntry};
pub use url::UrlMapper;
pub use walker::{collect_documents, is_document, should_include, DocumentPath};
pub use xml::{escape_xml, render_sitemap};
