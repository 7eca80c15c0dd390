use gz_core::types::NO_URL;
use serde_json::Value;

const HREF: &str = "@href";
const REL: &str = "@rel";

/// Pick the notice URL from an entry's `link` value.
///
/// Order: the first link with an href and either no relation or `self`; then
/// the first link's href; then `"#"`.
pub fn extract_notice_url(links: Option<&Value>) -> String {
    let links: Vec<&Value> = match links {
        Some(Value::Array(items)) => items.iter().collect(),
        Some(single @ Value::Object(_)) => vec![single],
        _ => return NO_URL.to_string(),
    };

    let canonical = links.iter().find_map(|link| {
        let href = href(link)?;
        match link.get(REL) {
            None | Some(Value::Null) => Some(href),
            Some(rel) if rel.as_str() == Some("self") => Some(href),
            _ => None,
        }
    });

    canonical
        .or_else(|| links.first().and_then(|link| href(link)))
        .unwrap_or(NO_URL)
        .to_string()
}

fn href(link: &Value) -> Option<&str> {
    link.get(HREF).and_then(Value::as_str)
}
