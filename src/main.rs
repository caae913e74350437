// src/main.rs
use anyhow::Result;
use forward_tools::{logging, SitemapBuilder, SitemapConfig, SitemapError};
use std::io::{self, BufRead, Write};
use tracing::debug;

const DEFAULT_DOCS_DIR: &str = "docs";
const DEFAULT_OUTPUT: &str = "sitemap.xml";

fn main() -> Result<()> {
    logging::init_tracing("Sitemap")?;

    let stdin = io::stdin();
    let mut input = stdin.lock();

    let docs_dir = prompt(
        &mut input,
        "请输入docs目录的路径 (默认为当前目录下的docs): ",
        DEFAULT_DOCS_DIR,
    )?;
    let output = prompt(
        &mut input,
        "请输入输出文件路径 (默认为当前目录下的sitemap.xml): ",
        DEFAULT_OUTPUT,
    )?;

    let config = SitemapConfig::default();
    debug!("Generating sitemap for {} with base {}", docs_dir, config.base_url);

    match SitemapBuilder::new(config).generate(&docs_dir, &output) {
        Ok(_) => Ok(()),
        Err(err @ SitemapError::RootNotFound(_)) => {
            println!("错误: {}", err);
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Reads one line after printing `question`; a blank answer yields `default`.
fn prompt(input: &mut impl BufRead, question: &str, default: &str) -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{}", question)?;
    stdout.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    // Only the line terminator is dropped; surrounding spaces are part of the answer.
    let answer = line.trim_end_matches(['\r', '\n']);
    Ok(if answer.is_empty() {
        default.to_string()
    } else {
        answer.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_uses_default_on_blank() {
        let mut input = io::Cursor::new("\n");
        assert_eq!(prompt(&mut input, "? ", "docs").unwrap(), "docs");
    }

    #[test]
    fn test_prompt_uses_default_on_eof() {
        let mut input = io::Cursor::new("");
        assert_eq!(prompt(&mut input, "? ", "sitemap.xml").unwrap(), "sitemap.xml");
    }

    #[test]
    fn test_prompt_keeps_answer_verbatim() {
        let mut input = io::Cursor::new("  site/docs  \r\n");
        assert_eq!(prompt(&mut input, "? ", "docs").unwrap(), "  site/docs  ");
    }

    #[test]
    fn test_prompt_whitespace_is_not_blank() {
        let mut input = io::Cursor::new(" \n");
        assert_eq!(prompt(&mut input, "? ", "docs").unwrap(), " ");
    }
}
