//! Label text policies: truncate with an ellipsis run, greedy word wrap, or
//! fixed (text must fit). Lengths are counted in chars; every glyph the UI
//! draws is one column wide.

const ELLIPSIS: char = '.';
const ELLIPSIS_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextPolicy {
    #[default]
    Truncate,
    Wrap,
    /// Neither truncated nor wrapped; construction fails if the text is wider
    /// than the label.
    Fixed,
}

#[inline]
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Text longer than `width` becomes exactly `width` chars ending in the
/// ellipsis run. Shorter text is returned unchanged.
pub fn truncate(text: &str, width: usize) -> String {
    if char_len(text) <= width {
        return text.to_string();
    }
    let dots = ELLIPSIS_LEN.min(width);
    let mut out: String = text.chars().take(width - dots).collect();
    out.extend(std::iter::repeat_n(ELLIPSIS, dots));
    out
}

/// Greedy word wrap. Whole words are packed per line up to `width`; a word
/// that alone is wider than `width` is hard-split and its remainder starts
/// the next line. No line exceeds `width`. A zero width yields no lines.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }
    let mut line = String::new();
    let mut line_len = 0usize;
    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        if line_len > 0 && line_len + 1 + word.len() <= width {
            line.push(' ');
            line.extend(word.iter());
            line_len += 1 + word.len();
            continue;
        }
        if line_len > 0 {
            lines.push(std::mem::take(&mut line));
        }
        while word.len() > width {
            lines.push(word.drain(..width).collect());
        }
        line.extend(word.iter());
        line_len = word.len();
    }
    if line_len > 0 {
        lines.push(line);
    }
    lines
}
