use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{error, info};

/// Compose `<data_dir>/<name>_<category>.json` with the name reduced to a
/// filesystem-safe form: punctuation stripped, whitespace replaced with
/// underscores, lowercased.
pub fn safe_filename(data_dir: &Path, name: &str, category: &str) -> PathBuf {
    let safe: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace() || *c == '-')
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect::<String>()
        .to_lowercase();
    data_dir.join(format!("{}_{}.json", safe, category))
}

/// Serialize `data` as pretty-printed JSON and write it to `path`,
/// creating parent directories first and overwriting any existing file.
/// Failures are logged and propagated; there is no retry.
pub fn save_to_file<T: Serialize>(data: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating data directory {}", parent.display()))?;
    }

    let json = serde_json::to_string_pretty(data)?;
    if let Err(e) = fs::write(path, json) {
        error!(path = %path.display(), error = %e, "error saving data");
        return Err(e).with_context(|| format!("writing {}", path.display()));
    }

    info!(path = %path.display(), "data saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Product, ProductCollection};

    fn sample_product() -> Product {
        Product {
            name: "Swatch Obsidian Ink".into(),
            image_url: "https://dj5e08oeu5ym4.cloudfront.net/thumb/a.webp".into(),
            link: "https://www.shopar.ai/collection/watches?product=1".into(),
            slug: Some("swatch-obsidian-ink".into()),
        }
    }

    #[test]
    fn safe_filename_normalizes_name() {
        let path = safe_filename(Path::new("data"), "Hublot MP-10 Tourbillon!", "watch");
        assert_eq!(path, Path::new("data/hublot_mp-10_tourbillon_watch.json"));
    }

    #[test]
    fn safe_filename_keeps_underscores() {
        let path = safe_filename(Path::new("data"), "watch_collection", "watches");
        assert_eq!(path, Path::new("data/watch_collection_watches.json"));
    }

    #[test]
    fn save_round_trips_a_product() {
        let dir = tempfile::tempdir().unwrap();
        let product = sample_product();
        let path = safe_filename(dir.path(), &product.name, "watch");

        save_to_file(&product, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let parsed: Product = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, product);
    }

    #[test]
    fn save_round_trips_a_collection() {
        let dir = tempfile::tempdir().unwrap();
        let collection = ProductCollection { products: vec![sample_product()] };
        let path = dir.path().join("watch_collection_watches.json");

        save_to_file(&collection, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        let parsed: ProductCollection = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed, collection);
    }

    #[test]
    fn save_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.json");
        save_to_file(&sample_product(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn save_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.json");
        fs::write(&path, "stale").unwrap();

        save_to_file(&sample_product(), &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert!(text.contains("Swatch Obsidian Ink"));
    }

    #[test]
    fn save_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        // A file where a directory is needed makes create_dir_all fail.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "file, not a directory").unwrap();

        let result = save_to_file(&sample_product(), &blocker.join("out.json"));
        assert!(result.is_err());
    }
}
