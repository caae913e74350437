// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("目录 '{}' 不存在!", .0.display())]
    RootNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = SitemapError> = std::result::Result<T, E>;
