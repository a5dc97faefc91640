//! Text normalization helpers shared by the merger and splitter.

/// Translate ASCII markup characters that collide with annotation syntax
/// (`*`, `+`) into their fullwidth forms (`＊`, `＋`).
pub fn fullwidth_markup(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '*' => '＊',
            '+' => '＋',
            other => other,
        })
        .collect()
}

/// Strip a UTF-8 byte-order mark left behind by spreadsheet exports.
pub fn strip_bom(text: &str) -> &str {
    text.strip_prefix('\u{feff}').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fullwidth_markup_translates_ascii_star_and_plus() {
        assert_eq!(fullwidth_markup("売上高*は+10%増"), "売上高＊は＋10%増");
    }

    #[test]
    fn fullwidth_markup_leaves_plain_text_untouched() {
        assert_eq!(fullwidth_markup("売上は増加した"), "売上は増加した");
    }

    #[test]
    fn strip_bom_removes_leading_marker_only() {
        assert_eq!(strip_bom("\u{feff}doc_id"), "doc_id");
        assert_eq!(strip_bom("doc_id"), "doc_id");
    }
}
