//! String helpers for one-line previews of tool output and errors.

const ELLIPSIS: &str = "...";

/// Shorten `s` to at most `max_chars` characters, ending in `...` when cut.
///
/// Counts characters rather than bytes so multi-byte text is never split.
/// Line breaks are folded into spaces so the preview stays on one line.
pub fn truncate(s: &str, max_chars: usize) -> String {
    let flat: String = s
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();

    if flat.chars().count() <= max_chars {
        return flat;
    }

    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    let mut preview: String = flat.chars().take(keep).collect();
    preview.push_str(ELLIPSIS);
    preview
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_unchanged() {
        assert_eq!(truncate("timed out", 80), "timed out");
        assert_eq!(truncate("", 3), "");
    }

    #[test]
    fn test_long_text_cut_with_ellipsis() {
        assert_eq!(truncate("connection refused by host", 13), "connection...");
        assert_eq!(truncate("abcdef", 6), "abcdef");
        assert_eq!(truncate("abcdefg", 6), "abc...");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(truncate("ééééé", 5), "ééééé");
        assert_eq!(truncate("éééééé", 5), "éé...");
    }

    #[test]
    fn test_newlines_folded() {
        assert_eq!(truncate("line one\nline two", 80), "line one line two");
    }
}
