// ────────────────────────────────
// src/sitemap/walker.rs
// Depth-first traversal of the docs tree, filtered to eligible documents
// ────────────────────────────────
use crate::config::SitemapConfig;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// An eligible document, relative to the traversal root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentPath {
    pub relative: PathBuf,
}

impl DocumentPath {
    pub fn as_str_lossy(&self) -> String {
        self.relative.to_string_lossy().into_owned()
    }
}

pub fn is_document(file_name: &str, config: &SitemapConfig) -> bool {
    file_name.ends_with(config.extension.as_str())
}

/// `dir` is the containing directory as reached during traversal (root-prefixed).
pub fn should_include(dir: &str, file_name: &str, config: &SitemapConfig) -> bool {
    if config.excluded_files.iter().any(|excluded| excluded == file_name) {
        return false;
    }

    !is_excluded_dir(dir, config)
}

fn is_excluded_dir(path: &str, config: &SitemapConfig) -> bool {
    config
        .excluded_dirs
        .iter()
        .any(|fragment| path.contains(fragment.as_str()))
}

/// Collects every eligible document under `root` in enumeration order.
/// Directories whose path contains an excluded fragment are never entered.
pub fn collect_documents(root: &Path, config: &SitemapConfig) -> io::Result<Vec<DocumentPath>> {
    let mut documents = Vec::new();
    if root.is_dir() {
        visit(root, root, config, &mut documents)?;
    }
    Ok(documents)
}

fn visit(
    root: &Path,
    dir: &Path,
    config: &SitemapConfig,
    documents: &mut Vec<DocumentPath>,
) -> io::Result<()> {
    let dir_str = dir.to_string_lossy();
    let mut subdirs = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;

        if file_type.is_dir() {
            subdirs.push(path);
            continue;
        }

        // Symlinked directories are listed but not followed; symlinked files count.
        let is_file = file_type.is_file()
            || (file_type.is_symlink() && fs::metadata(&path).map(|m| m.is_file()).unwrap_or(false));
        if !is_file {
            continue;
        }

        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !is_document(&file_name, config) {
            continue;
        }
        if !should_include(&dir_str, &file_name, config) {
            debug!("Skipping excluded document {}", path.display());
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path.as_path()).to_path_buf();
        documents.push(DocumentPath { relative });
    }

    for subdir in subdirs {
        if is_excluded_dir(&subdir.to_string_lossy(), config) {
            debug!("Pruning excluded directory {}", subdir.display());
            continue;
        }
        visit(root, &subdir, config, documents)?;
    }

    Ok(())
}
