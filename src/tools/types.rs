//! Common types shared across tools

use serde_json::Value;

/// Flattened JSON-LD items found on a page.
pub type Jsonld = Vec<Value>;

/// Metadata key-value pairs (`title`, `og:title`, `og:site_name`, ...).
pub type Metadata = Vec<(String, String)>;
