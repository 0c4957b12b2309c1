use serde_json::Value;

use super::types::ExtractJobPostingResult;
use crate::tools::clean::{clean_line, clean_opt, decode_html_entities};
use crate::tools::scrape::html_to_text;

/// String at `key`, cleaned; `None` when missing, not a string, or blank.
pub fn json_str(value: &Value, key: &str) -> Option<String> {
    clean_opt(value.get(key).and_then(Value::as_str))
}

/// Non-empty string or non-zero number rendered as text.
pub fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => clean_opt(Some(s)),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}

fn has_type(item: &Value, type_name: &str) -> bool {
    match item.get("@type") {
        Some(Value::String(t)) => t.trim().eq_ignore_ascii_case(type_name),
        Some(Value::Array(types)) => types
            .iter()
            .filter_map(Value::as_str)
            .any(|t| t.trim().eq_ignore_ascii_case(type_name)),
        _ => false,
    }
}

pub(super) fn find_jsonld_type<'a>(jsonld: &'a [Value], type_name: &str) -> Vec<&'a Value> {
    jsonld.iter().filter(|item| has_type(item, type_name)).collect()
}

/// Find the first non-empty value for any of the given keys in metadata pairs.
/// Attribute values arrive already entity-decoded.
pub(super) fn find_metadata_value(pairs: &[(String, String)], keys: &[&str]) -> Option<String> {
    for key in keys {
        for (k, v) in pairs {
            if k.eq_ignore_ascii_case(key) {
                let cleaned = clean_line(v);
                if !cleaned.is_empty() {
                    return Some(cleaned);
                }
            }
        }
    }
    None
}

pub(super) fn extract_job_posting_fields(item: &Value) -> ExtractJobPostingResult {
    ExtractJobPostingResult {
        title: json_str(item, "title").or_else(|| json_str(item, "name")),
        organization: hiring_organization(item),
        location: job_location(item),
        employment_type: employment_type(item),
        salary: base_salary(item),
        description: item
            .get("description")
            .and_then(Value::as_str)
            .map(description_text)
            .unwrap_or_default(),
    }
}

/// Tag-strip a JSON-LD description. Only a fully escaped body (no `<` at all)
/// is entity-decoded first; literal `&lt;` inside real markup stays text.
fn description_text(html: &str) -> String {
    if html.contains('<') {
        html_to_text(html)
    } else {
        html_to_text(&decode_html_entities(html))
    }
}

fn hiring_organization(item: &Value) -> Option<String> {
    match item.get("hiringOrganization")? {
        Value::String(name) => clean_opt(Some(name)),
        org => json_str(org, "name"),
    }
}

fn job_location(item: &Value) -> Option<String> {
    let location = match item.get("jobLocation") {
        Some(Value::Array(list)) => list.first(),
        other => other,
    };

    location.and_then(|loc| {
        let address = match loc.get("address") {
            Some(Value::String(s)) => clean_opt(Some(s)),
            Some(addr @ Value::Object(_)) => postal_address(addr),
            _ => None,
        };
        address.or_else(|| json_str(loc, "name"))
    })
}

fn postal_address(addr: &Value) -> Option<String> {
    let country = match addr.get("addressCountry") {
        Some(Value::String(s)) => clean_opt(Some(s)),
        Some(c @ Value::Object(_)) => json_str(c, "name"),
        _ => None,
    };
    let parts: Vec<String> = [
        json_str(addr, "addressLocality"),
        json_str(addr, "addressRegion"),
        country,
    ]
    .into_iter()
    .flatten()
    .collect();

    (!parts.is_empty()).then(|| parts.join(", "))
}

fn employment_type(item: &Value) -> Option<String> {
    match item.get("employmentType")? {
        Value::String(s) => clean_opt(Some(s)).map(|s| s.to_lowercase()),
        Value::Array(list) => {
            let types: Vec<String> = list
                .iter()
                .filter_map(|v| clean_opt(v.as_str()))
                .map(|s| s.to_lowercase())
                .collect();
            (!types.is_empty()).then(|| types.join(", "))
        }
        _ => None,
    }
}

/// `"<currency> <min>–<max>"`, or a single bound when only one is present.
/// Anything other than a `value` object with min/max bounds yields nothing.
fn base_salary(item: &Value) -> Option<String> {
    let salary = item.get("baseSalary")?;
    let currency = salary
        .get("currency")
        .and_then(scalar_string)
        .unwrap_or_default();
    let value = salary.get("value")?;
    if !value.is_object() {
        return None;
    }
    let min = value.get("minValue").and_then(scalar_string);
    let max = value.get("maxValue").and_then(scalar_string);

    let formatted = match (min, max) {
        (Some(min), Some(max)) => format!("{currency} {min}–{max}"),
        (Some(one), None) | (None, Some(one)) => format!("{currency} {one}"),
        (None, None) => return None,
    };
    Some(formatted.trim().to_string())
}
