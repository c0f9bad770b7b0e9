use scraper::{Html, Selector};
use tracing::{error, info, warn};
use url::Url;

use crate::models::Product;
use crate::slug::generate_slug;

/// Origin that relative image paths are resolved against.
const BASE_ORIGIN: &str = "https://www.shopar.ai";

/// Fallback display name for an item whose image carries no alt text.
const UNKNOWN_NAME: &str = "Unknown Watch";

/// Outcome of one extraction pass over the carousel document.
#[derive(Debug, PartialEq)]
pub enum Extraction {
    /// At least one product recovered, in document order.
    Extracted(Vec<Product>),
    /// Carousel present but no item survived validation.
    NoProducts,
    /// Carousel container absent from the document.
    MissingContainer,
}

impl Extraction {
    /// Products when extraction succeeded, `None` for either empty outcome.
    pub fn into_products(self) -> Option<Vec<Product>> {
        match self {
            Extraction::Extracted(products) => Some(products),
            Extraction::NoProducts | Extraction::MissingContainer => None,
        }
    }
}

/// Extract watch products from the carousel in `html`, pairing each item
/// positionally with `links`.
///
/// Structural problems never escape: a missing container or unusable items
/// come back as `MissingContainer`/`NoProducts`, and per-item defects
/// (no image, index past the end of `links`, empty image URL) skip that
/// item with a warning while the rest proceed.
pub fn extract_watches(html: &str, links: &[String]) -> Extraction {
    let doc = Html::parse_document(html);
    let container_selector =
        Selector::parse(r#"div[class="flex space-x-4 min-h-[60px]"]"#).unwrap();
    let item_selector = Selector::parse("div.inline-block").unwrap();
    let img_selector = Selector::parse("img").unwrap();

    let Some(container) = doc.select(&container_selector).next() else {
        error!("watch container not found in document");
        return Extraction::MissingContainer;
    };

    let items: Vec<_> = container.select(&item_selector).collect();
    info!(count = items.len(), "found watch items");

    if items.len() != links.len() {
        warn!(
            items = items.len(),
            links = links.len(),
            "watch item count does not match link count"
        );
    }

    let mut products = Vec::with_capacity(items.len().min(links.len()));
    for (i, item) in items.iter().enumerate() {
        let (Some(img), Some(link)) = (item.select(&img_selector).next(), links.get(i)) else {
            warn!(index = i, "skipping watch item: no image or insufficient links");
            continue;
        };

        let name = img.value().attr("alt").unwrap_or(UNKNOWN_NAME).trim().to_string();
        let image_url = resolve_image_url(img.value().attr("src").unwrap_or("").trim());
        if image_url.is_empty() {
            warn!(name = %name, "no valid image URL for watch");
            continue;
        }

        let slug = generate_slug(&name);
        products.push(Product {
            name,
            image_url,
            link: link.trim().to_string(),
            slug: Some(slug),
        });
    }

    info!(count = products.len(), "extracted watches");
    if products.is_empty() {
        Extraction::NoProducts
    } else {
        Extraction::Extracted(products)
    }
}

/// Pass absolute URLs through untouched; join relative paths onto the base
/// origin. Empty input and unjoinable paths come back empty, which callers
/// treat as "skip this item".
fn resolve_image_url(src: &str) -> String {
    if src.is_empty() || src.starts_with("http") {
        return src.to_string();
    }
    Url::parse(BASE_ORIGIN)
        .and_then(|base| base.join(src))
        .map(|resolved| resolved.to_string())
        .unwrap_or_default()
}
