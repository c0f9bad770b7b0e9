use serde::{Serialize, Deserialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub image_url: String,
    pub link: String,
    // Omitted from the JSON output when absent, never written as null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}

/// Extraction output in document order, no dedup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductCollection {
    pub products: Vec<Product>,
}

/// Request body for the find-by-name operation.
#[derive(Debug, Deserialize)]
pub struct WatchQuery {
    pub name: String,
}

/// Response body for the save operation, listing the files written.
#[derive(Debug, Serialize)]
pub struct SaveReport {
    pub message: String,
}
