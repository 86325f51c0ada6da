//! Display-name sanitization for signed links.
//!
//! The display name a catalog author typed ends up as a query parameter of
//! the minted URL and as a field of the signed byte string. Reducing it to
//! a conservative charset up front means the minted query string needs no
//! escaping and the signed bytes match the transmitted bytes exactly.

/// Reduce a display name to `[A-Za-z0-9._-]`, collapsing runs of replaced
/// characters, trimming separator padding, and truncating to `max_len`.
///
/// Returns `"file"` when nothing survivable remains.
pub fn sanitize_file_name(raw: &str, max_len: usize) -> String {
    let mut out = String::with_capacity(raw.len().min(max_len));
    let mut last_was_separator = false;

    for c in raw.chars() {
        let mapped = if c.is_ascii_alphanumeric() || c == '.' || c == '-' {
            c
        } else {
            '_'
        };

        if mapped == '_' {
            // Collapse runs of replaced characters into one separator.
            if last_was_separator {
                continue;
            }
            last_was_separator = true;
        } else {
            last_was_separator = false;
        }

        if out.len() >= max_len {
            break;
        }
        out.push(mapped);
    }

    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        "file".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_name_unchanged() {
        assert_eq!(sanitize_file_name("invoice-2025.pdf", 100), "invoice-2025.pdf");
    }

    #[test]
    fn script_injection_is_neutralized() {
        let out = sanitize_file_name("file<script>alert(1)</script>.pdf", 100);
        assert_eq!(out, "file_script_alert_1_script_.pdf");
        assert!(out
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_'));
    }

    #[test]
    fn repeated_separators_collapse() {
        assert_eq!(sanitize_file_name("a   b///c.pdf", 100), "a_b_c.pdf");
    }

    #[test]
    fn separator_padding_is_trimmed() {
        assert_eq!(sanitize_file_name("  spaced out  ", 100), "spaced_out");
    }

    #[test]
    fn truncates_to_max_len() {
        let out = sanitize_file_name(&"x".repeat(500), 100);
        assert_eq!(out.len(), 100);
    }

    #[test]
    fn unicode_maps_to_separator() {
        assert_eq!(sanitize_file_name("résumé.pdf", 100), "r_sum_.pdf");
    }

    #[test]
    fn nothing_left_falls_back() {
        assert_eq!(sanitize_file_name("<<<>>>", 100), "file");
        assert_eq!(sanitize_file_name("", 100), "file");
    }
}
