use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

const EMBEDDED_DOCUMENT: &str = include_str!("../assets/watch_carousel.html");
const EMBEDDED_LINKS: &str = include_str!("../assets/watch_links.txt");

/// Carousel document and product link list the API serves from.
///
/// Loaded once at startup and read-only for the process lifetime. The link
/// list corresponds positionally to the carousel items: the Nth discovered
/// item gets the Nth link.
#[derive(Debug, Clone)]
pub struct WatchSource {
    pub document: String,
    pub links: Vec<String>,
}

impl WatchSource {
    /// The bundled sample carousel and its eight product links.
    pub fn embedded() -> Self {
        Self {
            document: EMBEDDED_DOCUMENT.to_string(),
            links: parse_links(EMBEDDED_LINKS),
        }
    }

    /// Load a substitute document and link list (one URL per line, blank
    /// lines ignored) from disk.
    pub fn from_files(document: &Path, links: &Path) -> Result<Self> {
        let document_text = fs::read_to_string(document)
            .with_context(|| format!("reading carousel document {}", document.display()))?;
        let links_text = fs::read_to_string(links)
            .with_context(|| format!("reading link list {}", links.display()))?;
        Ok(Self {
            document: document_text,
            links: parse_links(&links_text),
        })
    }
}

fn parse_links(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
