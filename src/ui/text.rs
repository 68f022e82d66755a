//! Width-aware text helpers

use std::borrow::Cow;

use unicode_width::UnicodeWidthStr;

/// Truncate `text` to at most `max_width` terminal cells, ending with `tail`
/// when anything was cut.
///
/// Widths are display widths of whole strings, so wide glyphs and emoji
/// presentation sequences (`❤\u{FE0F}`) are measured the way the terminal
/// draws them, and the cut always falls on a char boundary. If `max_width`
/// cannot even hold `tail`, as much of `tail` as fits is returned.
///
/// Control characters are not measured reliably; pass text through
/// [`sanitize`] first when it may contain them.
pub fn truncate_with_tail<'a>(text: &'a str, max_width: usize, tail: &str) -> Cow<'a, str> {
    if text.width() <= max_width {
        return Cow::Borrowed(text);
    }

    let tail_width = tail.width();
    if max_width < tail_width {
        return Cow::Owned(take_width(tail, max_width).to_string());
    }

    let mut truncated = take_width(text, max_width - tail_width).to_string();
    truncated.push_str(tail);
    Cow::Owned(truncated)
}

/// Longest prefix of `text` that fits in `max_width` cells
fn take_width(text: &str, max_width: usize) -> &str {
    let mut end = 0;
    for (index, ch) in text.char_indices() {
        let next = index + ch.len_utf8();
        if text[..next].width() > max_width {
            break;
        }
        end = next;
    }
    &text[..end]
}

/// Replace tabs with a space and drop other control characters
///
/// Terminals draw neither at the width the text measures, so row text is
/// cleaned before it is truncated.
pub fn sanitize(text: &str) -> Cow<'_, str> {
    if !text.contains(char::is_control) {
        return Cow::Borrowed(text);
    }

    Cow::Owned(
        text.chars()
            .filter_map(|ch| match ch {
                '\t' => Some(' '),
                ch if ch.is_control() => None,
                ch => Some(ch),
            })
            .collect(),
    )
}
