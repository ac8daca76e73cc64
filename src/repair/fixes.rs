//! Heuristic text fixes for hand-edited YAML.
//!
//! Each fix is independently idempotent: applying it to already-clean text
//! returns the input unchanged and reports no fix.

/// A single applied fix, by human-readable description.
pub type FixLog = Vec<&'static str>;

/// Strip a leading byte-order-mark character.
pub fn strip_bom(text: &str) -> (String, bool) {
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => (stripped.to_string(), true),
        None => (text.to_string(), false),
    }
}

/// Normalize CRLF line endings to LF.
pub fn normalize_line_endings(text: &str) -> (String, bool) {
    if text.contains("\r\n") {
        (text.replace("\r\n", "\n"), true)
    } else {
        (text.to_string(), false)
    }
}

/// Replace leading-tab indentation with two spaces per tab.
///
/// Only leading tabs count; tabs embedded in values are left alone.
pub fn expand_leading_tabs(text: &str) -> (String, bool) {
    if !text.contains('\t') {
        return (text.to_string(), false);
    }

    let mut changed = false;
    let fixed: Vec<String> = text
        .split('\n')
        .map(|line| {
            let tabs = line.len() - line.trim_start_matches('\t').len();
            if tabs > 0 {
                changed = true;
                format!("{}{}", "  ".repeat(tabs), &line[tabs..])
            } else {
                line.to_string()
            }
        })
        .collect();

    (fixed.join("\n"), changed)
}

/// Insert a space after the first colon when a value follows it directly.
///
/// Comment lines are skipped. Only the first colon per line is touched so
/// URLs in values survive.
pub fn fix_colon_spacing(text: &str) -> (String, bool) {
    let mut changed = false;
    let fixed: Vec<String> = text
        .split('\n')
        .map(|line| {
            if line.trim_start().starts_with('#') {
                return line.to_string();
            }
            match line.find(':') {
                Some(idx) => {
                    let value = &line[idx + 1..];
                    if !value.is_empty() && !value.starts_with(' ') {
                        changed = true;
                        format!("{}: {}", &line[..idx], value)
                    } else {
                        line.to_string()
                    }
                }
                None => line.to_string(),
            }
        })
        .collect();

    (fixed.join("\n"), changed)
}

/// Apply all fixes in order, returning the fixed text and a log of what
/// changed.
pub fn apply_fixes(text: &str) -> (String, FixLog) {
    let mut log = FixLog::new();

    let (text, fixed) = strip_bom(text);
    if fixed {
        log.push("Removed BOM (Byte Order Mark)");
    }

    let (text, fixed) = normalize_line_endings(&text);
    if fixed {
        log.push("Converted CRLF to LF line endings");
    }

    let (text, fixed) = expand_leading_tabs(&text);
    if fixed {
        log.push("Replaced leading tabs with spaces");
    }

    let (text, fixed) = fix_colon_spacing(&text);
    if fixed {
        log.push("Fixed colon spacing");
    }

    (text, log)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_bom_removes_leading_marker() {
        let (text, fixed) = strip_bom("\u{feff}variables: {}\n");
        assert!(fixed);
        assert_eq!(text, "variables: {}\n");
    }

    #[test]
    fn strip_bom_is_idempotent() {
        let (once, _) = strip_bom("\u{feff}key: v\n");
        let (twice, fixed) = strip_bom(&once);
        assert!(!fixed);
        assert_eq!(once, twice);
    }

    #[test]
    fn crlf_becomes_lf() {
        let (text, fixed) = normalize_line_endings("a: 1\r\nb: 2\r\n");
        assert!(fixed);
        assert_eq!(text, "a: 1\nb: 2\n");
    }

    #[test]
    fn leading_tabs_become_two_spaces_each() {
        let (text, fixed) = expand_leading_tabs("variables:\n\t\tkey: value\n");
        assert!(fixed);
        assert_eq!(text, "variables:\n    key: value\n");
    }

    #[test]
    fn embedded_tabs_are_preserved() {
        let (text, fixed) = expand_leading_tabs("key: a\tb\n");
        assert!(!fixed);
        assert_eq!(text, "key: a\tb\n");
    }

    #[test]
    fn colon_spacing_inserts_single_space() {
        let (text, fixed) = fix_colon_spacing("key:value\n");
        assert!(fixed);
        assert_eq!(text, "key: value\n");
    }

    #[test]
    fn colon_spacing_only_touches_first_colon() {
        let (text, fixed) = fix_colon_spacing("url:https://example.com/\n");
        assert!(fixed);
        assert_eq!(text, "url: https://example.com/\n");
    }

    #[test]
    fn colon_spacing_skips_comments() {
        let (text, fixed) = fix_colon_spacing("# note:value\n");
        assert!(!fixed);
        assert_eq!(text, "# note:value\n");
    }

    #[test]
    fn colon_spacing_leaves_clean_lines() {
        let (text, fixed) = fix_colon_spacing("key: value\nempty:\n");
        assert!(!fixed);
        assert_eq!(text, "key: value\nempty:\n");
    }

    #[test]
    fn apply_fixes_reports_each_applied_fix() {
        let dirty = "\u{feff}variables:\r\n\tkey:value\r\n";
        let (text, log) = apply_fixes(dirty);
        assert_eq!(text, "variables:\n  key: value\n");
        assert_eq!(log.len(), 4);
    }

    #[test]
    fn apply_fixes_on_clean_text_changes_nothing() {
        let clean = "variables:\n  key: value\n";
        let (text, log) = apply_fixes(clean);
        assert_eq!(text, clean);
        assert!(log.is_empty());
    }
}
