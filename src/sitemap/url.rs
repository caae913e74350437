// src/sitemap/url.rs
use regex::Regex;

const README_STEM: &str = "README";
// "/README": the stem plus the separator in front of it.
const README_SUFFIX_CHARS: usize = 7;

/// Maps document paths relative to the docs root onto absolute URLs.
#[derive(Debug, Clone)]
pub struct UrlMapper {
    base_url: String,
    extension: String,
    scheme: Regex,
    repeated_slashes: Regex,
}

impl UrlMapper {
    pub fn new(base_url: impl Into<String>, extension: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            extension: extension.into(),
            scheme: Regex::new(r"^[A-Za-z][A-Za-z0-9+.\-]*://").expect("scheme pattern is valid"),
            repeated_slashes: Regex::new(r"/{2,}").expect("slash pattern is valid"),
        }
    }

    pub fn path_to_url(&self, rel_path: &str) -> String {
        let mut path = rel_path.strip_suffix(self.extension.as_str()).unwrap_or(rel_path);

        if path.ends_with(README_STEM) {
            path = drop_last_chars(path, README_SUFFIX_CHARS);
        }

        let path = path.replace('\\', "/");
        self.collapse_slashes(&format!("{}/{}", self.base_url, path))
    }

    /// Collapses runs of `/` into one, leaving a leading `scheme://` alone.
    pub fn collapse_slashes(&self, url: &str) -> String {
        let split = self.scheme.find(url).map(|m| m.end()).unwrap_or(0);
        let (scheme, rest) = url.split_at(split);
        format!("{}{}", scheme, self.repeated_slashes.replace_all(rest, "/"))
    }
}

fn drop_last_chars(s: &str, n: usize) -> &str {
    let keep = s.chars().count().saturating_sub(n);
    match s.char_indices().nth(keep) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
