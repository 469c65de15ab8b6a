//! Explain mode: scan the rendered page for common layout problems.
//!
//! The scan runs inside the page and reports findings as a JSON-encoded list
//! of strings. Findings are logged as warnings; they never fail the render.

/// Flags elements whose content overflows horizontally, and page-break
/// markers that ended up hidden (a hidden marker means the break will not
/// happen where the author expects).
pub(crate) const PAGE_SCAN: &str = r#"(() => {
  const issues = [];
  document.querySelectorAll('*').forEach((el) => {
    if (el.scrollWidth > el.clientWidth) {
      const cls = el.className && typeof el.className === 'string' ? ` (class: ${el.className})` : '';
      issues.push(`overflow in <${el.tagName.toLowerCase()}>${cls}`);
    }
  });
  document.querySelectorAll('.page-break-before, .page-break-after').forEach((el) => {
    if (window.getComputedStyle(el).display === 'none') {
      issues.push(`hidden page-break marker <${el.tagName.toLowerCase()}>`);
    }
  });
  return JSON.stringify(issues);
})()"#;

/// Decodes the scan result. Anything unexpected decodes to no findings.
pub(crate) fn decode_issues(value: Option<serde_json::Value>) -> Vec<String> {
    let Some(serde_json::Value::String(raw)) = value else {
        return Vec::new();
    };
    serde_json::from_str(&raw).unwrap_or_default()
}

pub(crate) fn report(issues: &[String]) {
    if issues.is_empty() {
        tracing::info!("no obvious layout issues detected");
        return;
    }
    for issue in issues {
        tracing::warn!(%issue, "layout issue detected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn decodes_a_finding_list() {
        let value = Some(Value::String(r#"["overflow in <pre>"]"#.to_string()));
        assert_eq!(decode_issues(value), vec!["overflow in <pre>".to_string()]);
    }

    #[test]
    fn empty_list_decodes_to_no_findings() {
        let value = Some(Value::String("[]".to_string()));
        assert!(decode_issues(value).is_empty());
    }

    #[test]
    fn unexpected_shapes_decode_to_no_findings() {
        assert!(decode_issues(None).is_empty());
        assert!(decode_issues(Some(json!(42))).is_empty());
        assert!(decode_issues(Some(Value::String("not json".to_string()))).is_empty());
    }
}
