//! Splitting long blob bodies into size-limited pages.

use std::borrow::Cow;

/// Splits `input` into pages of at most `max_len` bytes.
///
/// `separators` are tried in order: text is split on the first one, and
/// only pieces that still do not fit are split on the next. Whitespace
/// separators stay attached to the text before them; other separators
/// (page-break markers) are dropped. Pieces with no separator left are cut
/// on character boundaries.
#[must_use]
pub fn paginate(input: &str, max_len: usize, separators: &[&str]) -> Vec<String> {
    let max_len = max_len.max(1);
    let Some((&separator, rest)) = separators.split_first() else {
        return split_at_char_boundaries(input, max_len);
    };
    let keep_separator = separator.trim().is_empty();

    let mut pages = Vec::new();
    let mut page = String::new();
    let mut pieces = input.split(separator).peekable();

    while let Some(piece) = pieces.next() {
        let piece: Cow<'_, str> = if keep_separator && pieces.peek().is_some() {
            Cow::Owned(format!("{piece}{separator}"))
        } else {
            Cow::Borrowed(piece)
        };

        if piece.len() > max_len {
            if !page.is_empty() {
                pages.push(std::mem::take(&mut page));
            }
            pages.extend(paginate(&piece, max_len, rest));
        } else if page.len() + piece.len() <= max_len {
            page.push_str(&piece);
        } else {
            pages.push(std::mem::replace(&mut page, piece.into_owned()));
        }
    }

    if !page.is_empty() {
        pages.push(page);
    }
    pages
}

fn split_at_char_boundaries(input: &str, max_len: usize) -> Vec<String> {
    let mut pages = Vec::new();
    let mut page = String::new();

    for ch in input.chars() {
        if !page.is_empty() && page.len() + ch.len_utf8() > max_len {
            pages.push(std::mem::take(&mut page));
        }
        page.push(ch);
    }

    if !page.is_empty() {
        pages.push(page);
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEPARATORS: [&str; 3] = ["<pagebreak>", "\n", " "];

    #[test]
    fn test_single_page_drops_markers() {
        assert_eq!(paginate("a<pagebreak>b", 100, &SEPARATORS), vec!["ab"]);
    }

    #[test]
    fn test_empty_input_has_no_pages() {
        assert!(paginate("", 100, &SEPARATORS).is_empty());
    }

    #[test]
    fn test_prefers_page_breaks() {
        let pages = paginate("aaaa<pagebreak>bbbb<pagebreak>cccc", 8, &SEPARATORS);
        assert_eq!(pages, vec!["aaaabbbb", "cccc"]);
    }

    #[test]
    fn test_falls_back_to_newlines() {
        let pages = paginate("one\ntwo\nthree", 8, &["\n"]);
        assert_eq!(pages, vec!["one\ntwo\n", "three"]);
    }

    #[test]
    fn test_oversized_section_is_split_further() {
        let pages = paginate("ab<pagebreak>one two three four", 10, &SEPARATORS);
        assert_eq!(pages, vec!["ab", "one two ", "three four"]);
    }

    #[test]
    fn test_hard_split_respects_char_boundaries() {
        assert_eq!(paginate("abcdefghij", 4, &[]), vec!["abcd", "efgh", "ij"]);
        assert_eq!(paginate("ééé", 3, &[]), vec!["é", "é", "é"]);
    }

    #[test]
    fn test_no_page_exceeds_budget() {
        let text = "the quick brown fox jumps over the lazy dog\n".repeat(50);
        let pages = paginate(&text, 120, &SEPARATORS);
        assert!(pages.len() > 1);
        assert!(pages.iter().all(|p| p.len() <= 120));
        assert_eq!(pages.concat(), text);
    }
}
