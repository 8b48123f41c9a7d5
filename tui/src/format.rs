use std::mem;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Greedy word wrap by display width. Words wider than `width` are split.
pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        if current_width > 0 && current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
            current_width += 1 + word_width;
            continue;
        }
        if current_width > 0 {
            lines.push(mem::take(&mut current));
            current_width = 0;
        }
        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }
        for ch in word.chars() {
            let ch_width = ch.width().unwrap_or(0);
            if current_width + ch_width > width && current_width > 0 {
                lines.push(mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += ch_width;
        }
    }
    if current_width > 0 || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Left pad so `text` sits in the middle of `width` columns.
pub(crate) fn center_pad(text: &str, width: usize) -> usize {
    width.saturating_sub(text.width()) / 2
}

/// `width` columns of bar: `filled` percent drawn with `full`, the rest `empty`.
pub(crate) fn progress_bar(percent: u8, width: usize, full: &str, empty: &str) -> String {
    let percent = usize::from(percent.min(100));
    let filled = (width * percent + 50) / 100;
    let mut bar = full.repeat(filled);
    bar.push_str(&empty.repeat(width - filled));
    bar
}
