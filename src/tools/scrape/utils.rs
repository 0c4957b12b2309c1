use scraper::{ElementRef, Html};
use serde_json::Value;

use crate::selectors::{JSONLD_SELECTOR, META_SELECTOR, TITLE_SELECTOR};
use crate::tools::clean::clean_line;
use crate::tools::types::{Jsonld, Metadata};

pub(super) fn scrape_jsonld_scripts(doc: &Html) -> Jsonld {
    doc.select(&JSONLD_SELECTOR)
        .filter_map(|el| parse_jsonld_block(&el.text().collect::<String>()))
        .flat_map(flatten_jsonld)
        .collect()
}

/// Parse one script body; some sites emit several objects back to back
/// separated by commas, so retry wrapped in brackets.
fn parse_jsonld_block(raw: &str) -> Option<Value> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    serde_json::from_str(raw)
        .or_else(|_| serde_json::from_str(&format!("[{raw}]")))
        .ok()
}

fn flatten_jsonld(value: Value) -> Vec<Value> {
    match value {
        Value::Array(arr) => arr.into_iter().flat_map(flatten_jsonld).collect(),
        Value::Object(mut obj) => {
            if let Some(graph) = obj.remove("@graph") {
                let mut out = flatten_jsonld(graph);
                if obj.keys().any(|k| k != "@context") {
                    out.push(Value::Object(obj));
                }
                return out;
            }
            vec![Value::Object(obj)]
        }
        _ => Vec::new(),
    }
}

pub(super) fn scrape_metadata_tags(doc: &Html) -> Metadata {
    let mut tags = Vec::new();

    if let Some(el) = doc.select(&TITLE_SELECTOR).next() {
        let text = clean_line(&el.text().collect::<String>());
        if !text.is_empty() {
            tags.push(("title".to_string(), text));
        }
    }

    for el in doc.select(&META_SELECTOR) {
        let key = el
            .value()
            .attr("property")
            .or_else(|| el.value().attr("name"))
            .map(|s| s.to_string());
        let value = el.value().attr("content").map(|s| s.to_string());
        if let (Some(k), Some(v)) = (key, value) {
            if !v.trim().is_empty() {
                tags.push((k, v));
            }
        }
    }

    tags
}

/// Trimmed, cleaned, non-empty text nodes under `root` in document order.
/// A node is skipped when any ancestor between it and `root` is one of `skip`.
pub(super) fn collect_text_lines(root: ElementRef<'_>, skip: &[&str]) -> Vec<String> {
    let root_id = root.id();
    root.descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node
                .ancestors()
                .take_while(|a| a.id() != root_id)
                .chain(std::iter::once(*root))
                .filter_map(|a| a.value().as_element())
                .any(|el| skip.contains(&el.name()));
            if hidden {
                return None;
            }
            let line = clean_line(text);
            (!line.is_empty()).then_some(line)
        })
        .collect()
}
