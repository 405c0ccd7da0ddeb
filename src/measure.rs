//! Text measurement used by the height estimator.
//!
//! Widths come from an average-character approximation rather than glyph
//! metrics. The layout only needs the estimate to be deterministic and to
//! match what the renderer assumes, not to be typographically exact.

/// Estimated rendered width of `text` in millimeters at `font_size` points.
pub fn estimate_text_width(text: &str, font_size: f32) -> f32 {
    let average_char_width = font_size * 0.25;
    text.chars().count() as f32 * average_char_width
}

/// Greedy word-wrap of `text` into lines no wider than `max_width`.
///
/// A single word wider than `max_width` still gets its own line; the wrap
/// never splits inside a word. Whitespace runs collapse to single spaces.
pub fn wrap_text(text: &str, max_width: f32, font_size: f32) -> Vec<String> {
    let space_width = estimate_text_width(" ", font_size);
    let mut lines = Vec::new();
    let mut current_line = String::new();
    let mut current_width = 0.0;

    for word in text.split_whitespace() {
        let word_width = estimate_text_width(word, font_size);

        if !current_line.is_empty() && current_width + space_width + word_width > max_width {
            lines.push(std::mem::take(&mut current_line));
            current_width = 0.0;
        }

        if !current_line.is_empty() {
            current_line.push(' ');
            current_width += space_width;
        }
        current_line.push_str(word);
        current_width += word_width;
    }

    if !current_line.is_empty() {
        lines.push(current_line);
    }
    lines
}
