use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Greedy word wrap to `width` display columns.
///
/// Words longer than a line are split. Always returns at least one line.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for mut word in text.split_whitespace() {
        while word.width() > width {
            if current_width > 0 {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            let (head, rest) = split_at_width(word, width);
            lines.push(head.to_string());
            word = rest;
        }

        let word_width = word.width();
        if current_width > 0 && current_width + 1 + word_width > width {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        if current_width > 0 {
            current.push(' ');
            current_width += 1;
        }
        current_width += word_width;
        current.push_str(word);
    }

    if current_width > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Longest prefix of `word` that fits in `width` columns, never empty.
///
/// Zero-width characters stay with the character they follow.
fn split_at_width(word: &str, width: usize) -> (&str, &str) {
    let mut used = 0;
    let mut end = 0;
    for (i, c) in word.char_indices() {
        let w = c.width().unwrap_or(0);
        if end > 0 && used + w > width {
            break;
        }
        used += w;
        end = i + c.len_utf8();
    }
    word.split_at(end)
}

/// Wrap and keep at most `max_lines`, ending the last kept line with `…`
/// when text was cut.
pub fn wrap_truncated(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    let mut lines = wrap_text(text, width);
    if max_lines == 0 {
        return Vec::new();
    }
    if lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            while !last.is_empty() && last.width() + 1 > width.max(1) {
                last.pop();
            }
            last.push('…');
        }
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_wrap_short_text_is_one_line() {
        assert_eq!(wrap_text("Punishment for murder", 40), vec!["Punishment for murder"]);
    }

    #[test]
    fn test_wrap_breaks_at_word_boundaries() {
        assert_eq!(
            wrap_text("Whoever commits murder shall be punished", 16),
            vec!["Whoever commits", "murder shall be", "punished"]
        );
    }

    #[test]
    fn test_wrap_splits_long_words() {
        assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_wrap_empty_text() {
        assert_eq!(wrap_text("   ", 10), vec![String::new()]);
    }

    #[test]
    fn test_wrap_counts_combining_marks_as_zero_width() {
        // The virama in "सत्य" takes no column: four chars, three columns
        let text = "सत्य सत्य";
        assert_eq!(text.chars().count(), 9);
        assert_eq!(wrap_text(text, 7), vec![text]);
    }

    #[test]
    fn test_wrap_splits_wide_chars_by_columns() {
        assert_eq!(wrap_text("刑法典", 4), vec!["刑法", "典"]);
        assert_eq!(wrap_text("刑法", 1), vec!["刑", "法"]);
    }

    #[test]
    fn test_wrap_truncated_adds_ellipsis() {
        let lines = wrap_truncated("one two three four five six", 9, 2);
        assert_eq!(lines, vec!["one two", "three…"]);
    }

    #[test]
    fn test_wrap_truncated_full_line_keeps_width() {
        let lines = wrap_truncated("abcd efgh ijkl", 4, 2);
        assert_eq!(lines, vec!["abcd", "efg…"]);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_wrapped_lines_fit_width(text in "[a-z ]{0,200}", width in 1usize..40) {
            for line in wrap_text(&text, width) {
                prop_assert!(line.width() <= width);
            }
        }

        #[test]
        fn prop_wrap_keeps_every_word(text in "[a-z]{1,8}( [a-z]{1,8}){0,20}", width in 8usize..40) {
            let rejoined = wrap_text(&text, width).join(" ");
            prop_assert_eq!(rejoined, text);
        }
    }
}
