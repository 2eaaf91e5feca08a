//! Status text layout: greedy word-wrap for the fixed-width font.

use crate::font;

/// Break text into lines no wider than `max_width` pixels.
///
/// Breaks happen at spaces; the run of spaces at a break is consumed and
/// does not start the next line. Spacing inside a fitting line is kept
/// as-is (the status line uses a leading space as an unselected-channel
/// marker). A single word wider than the limit is left whole for the
/// rasterizer to clip.
pub fn wrap(text: &str, max_width: i32) -> Vec<&str> {
    // The font is fixed-pitch, so the budget is a plain character count.
    let max_chars = ((max_width + 1) / font::ADVANCE).max(1) as usize;
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;

    while start < bytes.len() {
        if bytes.len() - start <= max_chars {
            lines.push(&text[start..]);
            break;
        }

        // Break at the last space that still fits on this line.
        let window = &bytes[start..=start + max_chars];
        let mut line_end = match window.iter().rposition(|&b| b == b' ') {
            Some(pos) => start + pos,
            // One unbroken word wider than the line: keep it whole and
            // break after it.
            None => bytes[start..]
                .iter()
                .position(|&b| b == b' ')
                .map_or(bytes.len(), |pos| start + pos),
        };
        while line_end > start && bytes[line_end - 1] == b' ' {
            line_end -= 1;
        }
        if line_end > start {
            lines.push(&text[start..line_end]);
        }
        start = line_end;
        while start < bytes.len() && bytes[start] == b' ' {
            start += 1;
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_one_line_with_spacing_intact() {
        let status = ">R:11  G:0  B:0";
        assert_eq!(wrap(status, 144), vec![status]);
    }

    #[test]
    fn breaks_at_spaces_and_consumes_them() {
        // 40 px fits six characters per line.
        assert_eq!(wrap(">R:11  G:0  B:0", 40), vec![">R:11", "G:0", "B:0"]);
    }

    #[test]
    fn overlong_word_is_kept_whole() {
        assert_eq!(wrap("0123456789", 20), vec!["0123456789"]);
        assert_eq!(wrap("0123456789 AB", 20), vec!["0123456789", "AB"]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert!(wrap("", 144).is_empty());
    }
}
