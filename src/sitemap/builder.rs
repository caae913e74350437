// src/sitemap/builder.rs
use crate::config::SitemapConfig;
use crate::error::{Result, SitemapError};
use crate::sitemap::walker::{collect_documents, DocumentPath};
use crate::sitemap::{render_sitemap, xml, UrlMapper};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// One sitemap row: the source document and the URL it is published under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub source: PathBuf,
    pub url: String,
}

impl SitemapEntry {
    /// Escaped `<loc>` value as written to the document.
    pub fn loc(&self) -> String {
        xml::loc(&self.url)
    }
}

pub struct SitemapBuilder {
    config: SitemapConfig,
    mapper: UrlMapper,
}

impl SitemapBuilder {
    pub fn new(config: SitemapConfig) -> Self {
        let mapper = UrlMapper::new(config.base_url.clone(), config.extension.clone());
        Self { config, mapper }
    }

    pub fn entry_for(&self, document: &DocumentPath) -> SitemapEntry {
        SitemapEntry {
            url: self.mapper.path_to_url(&document.as_str_lossy()),
            source: document.relative.clone(),
        }
    }

    /// Walks `root` and returns its entries sorted by URL.
    pub fn entries<P: AsRef<Path>>(&self, root: P) -> Result<Vec<SitemapEntry>> {
        let root = root.as_ref();
        if !root.exists() {
            return Err(SitemapError::RootNotFound(root.to_path_buf()));
        }

        let mut entries: Vec<SitemapEntry> = collect_documents(root, &self.config)?
            .iter()
            .map(|doc| self.entry_for(doc))
            .collect();
        entries.sort_by(|a, b| a.url.cmp(&b.url));

        debug!("Collected {} sitemap entries under {}", entries.len(), root.display());
        Ok(entries)
    }

    /// Writes the sitemap for `root` to `output`, replacing any existing file,
    /// and prints a summary. Nothing is written when `root` does not exist.
    pub fn generate<P, Q>(&self, root: P, output: Q) -> Result<usize>
    where
        P: AsRef<Path>,
        Q: AsRef<Path>,
    {
        let output = output.as_ref();
        let entries = self.entries(root)?;

        let doc = render_sitemap(entries.iter().map(|entry| entry.url.as_str()));
        fs::write(output, doc)?;
        debug!("Wrote {} URLs to {}", entries.len(), output.display());

        println!("{}", summary(output, entries.len()));
        Ok(entries.len())
    }
}

pub fn summary(output: &Path, count: usize) -> String {
    format!("站点地图已生成: {}\n共包含 {} 个URL", output.display(), count)
}
