mod utils;


pub use utils::{decode_html_entities, title_case, truncate_chars};
use utils::*;

/// Clean text.
///
/// Performs the following operations in order:
/// 1. Decode HTML entities (`&amp;` → `&`, `&#39;` → `'`)
/// 2. Normalize Unicode to NFC (canonical composition)
/// 3. Remove zero-width characters
/// 4. Remove control characters (except newlines/tabs)
/// 5. Normalize whitespace (collapse multiple spaces, trim)
///
/// Use for single-line fields (titles, names, locations).
///
/// # Examples
/// ```
/// use jobscrape::tools::clean::clean;
///
/// let dirty = "Senior &amp; Staff   Engineer&#39;s role";
/// assert_eq!(clean(dirty), "Senior & Staff Engineer's role");
/// ```
pub fn clean(text: &str) -> String {
    clean_line(&decode_html_entities(text))
}

/// Same as [`clean`] without entity decoding, for text already decoded by the
/// HTML parser.
pub fn clean_line(text: &str) -> String {
    let mut result = normalize_unicode(text);
    result = remove_zero_width_chars(&result);
    result = remove_control_chars(&result);
    normalize_whitespace(&result)
}

/// Clean an optional field, mapping blank results to `None`.
///
/// # Examples
/// ```
/// use jobscrape::tools::clean::clean_opt;
///
/// assert_eq!(clean_opt(Some("  Remote ")), Some("Remote".to_string()));
/// assert_eq!(clean_opt(Some("   ")), None);
/// assert_eq!(clean_opt(None), None);
/// ```
pub fn clean_opt(text: Option<&str>) -> Option<String> {
    text.map(clean).filter(|s| !s.is_empty())
}
