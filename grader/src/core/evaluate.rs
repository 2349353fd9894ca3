//! Selector evaluation against a parsed HTML document.

use anyhow::Result;
use scraper::{Html, Selector};
use tracing::debug;

use crate::core::checks::CheckList;
use crate::core::report::ResultMapping;
use crate::error::CheckError;

/// Parse `bytes` as an HTML document and record, for every selector, whether
/// it matches at least one element.
///
/// Bytes are decoded as UTF-8, replacing invalid sequences. The document lives
/// only for the duration of this call.
pub fn evaluate(bytes: &[u8], checks: &CheckList) -> Result<ResultMapping> {
    let source = String::from_utf8_lossy(bytes);
    let document = Html::parse_document(&source);
    evaluate_document(&document, checks)
}

/// Evaluate every selector against an already parsed document.
pub fn evaluate_document(document: &Html, checks: &CheckList) -> Result<ResultMapping> {
    let mut mapping = ResultMapping::new();
    for raw in checks {
        let selector = parse_selector(raw)?;
        let present = document.select(&selector).next().is_some();
        debug!(selector = %raw, present, "selector evaluated");
        mapping.record(raw, present);
    }
    Ok(mapping)
}

fn parse_selector(raw: &str) -> Result<Selector> {
    Selector::parse(raw)
        .map_err(|err| CheckError::parse(format!("invalid selector {raw:?}: {err}")).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::find_check_error;

    const PAGE: &str = r#"<!DOCTYPE html>
<html>
  <head><title>Page</title><meta name="viewport" content="width=device-width"></head>
  <body>
    <h1>Heading</h1>
    <p class="lead">One</p>
    <p>Two</p>
  </body>
</html>"#;

    fn checks(items: &[&str]) -> CheckList {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn reports_present_and_absent_selectors() {
        let mapping = evaluate(PAGE.as_bytes(), &checks(&["p", "a", "h1"])).expect("evaluate");
        let entries: Vec<(&str, bool)> = mapping.iter().collect();
        assert_eq!(entries, vec![("a", false), ("h1", true), ("p", true)]);
    }

    #[test]
    fn one_entry_per_selector_and_no_extras() {
        let list = checks(&["title", "p.lead", "meta[name=viewport]", "footer"]);
        let mapping = evaluate(PAGE.as_bytes(), &list).expect("evaluate");
        assert_eq!(mapping.len(), list.len());
        for selector in &list {
            assert!(mapping.get(selector).is_some(), "missing {selector}");
        }
        assert_eq!(mapping.get("footer"), Some(false));
        assert_eq!(mapping.get("meta[name=viewport]"), Some(true));
    }

    #[test]
    fn misses_do_not_short_circuit() {
        let mapping = evaluate(PAGE.as_bytes(), &checks(&["aside", "nav", "body"])).expect("evaluate");
        assert_eq!(mapping.get("aside"), Some(false));
        assert_eq!(mapping.get("nav"), Some(false));
        assert_eq!(mapping.get("body"), Some(true));
    }

    #[test]
    fn invalid_selector_is_a_parse_error() {
        let err = evaluate(PAGE.as_bytes(), &checks(&["p", "[[["])).expect_err("should fail");
        assert!(matches!(find_check_error(&err), Some(CheckError::Parse(_))));
        assert!(err.to_string().contains("[[["));
    }

    #[test]
    fn non_utf8_bytes_are_decoded_lossily() {
        let mut bytes = b"<html><body><p>".to_vec();
        bytes.push(0xff);
        bytes.extend_from_slice(b"</p></body></html>");
        let mapping = evaluate(&bytes, &checks(&["p"])).expect("evaluate");
        assert_eq!(mapping.get("p"), Some(true));
    }

    #[test]
    fn empty_check_list_yields_empty_mapping() {
        let mapping = evaluate(PAGE.as_bytes(), &CheckList::default()).expect("evaluate");
        assert!(mapping.is_empty());
    }

    #[test]
    fn mapping_keys_follow_check_list_order() {
        let list = checks(&["p", "a[title=\"\u{FF61}\"]", "a[title=\"\u{10000}\"]"]);
        let mapping = evaluate(PAGE.as_bytes(), &list).expect("evaluate");
        let keys: Vec<&str> = mapping.iter().map(|(key, _)| key).collect();
        let expected: Vec<&str> = list.iter().map(String::as_str).collect();
        assert_eq!(keys, expected);
        assert_eq!(keys[0], "a[title=\"\u{10000}\"]");
    }
}
