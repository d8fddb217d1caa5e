use crate::font::Font;
use crate::units::Pt;

/// Shown in place of text that is missing or blank
pub const PLACEHOLDER: &str = "-";

/// Calculate the width of a given string of text given the font and font size
pub fn width_of_text(text: &str, font: Font, size: Pt) -> Pt {
    text.chars().map(|ch| font.width_of_char(ch, size)).sum()
}

/// Wraps free-form text into lines of at most `width` characters.
///
/// Paragraphs (separated by newlines) are wrapped independently and each one is
/// trimmed first. A paragraph with no words produces a single empty line, so
/// blank lines in the input survive as vertical space in the output. Lines are
/// broken between words; a word longer than `width` is split across lines.
///
/// Missing or blank text yields a single [`PLACEHOLDER`] line. Breaks only happen
/// at whitespace: an over-long word always starts a fresh line, and hyphens are
/// not break points.
pub fn wrap_lines(text: Option<&str>, width: usize) -> Vec<String> {
    let text = match text {
        Some(text) if !text.trim().is_empty() => text,
        _ => return vec![PLACEHOLDER.to_string()],
    };
    let width = width.max(1);

    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        let paragraph = paragraph.trim();
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }
        wrap_paragraph(paragraph, width, &mut lines);
    }
    lines
}

fn wrap_paragraph(paragraph: &str, width: usize, lines: &mut Vec<String>) {
    let mut line = String::new();
    let mut line_len = 0usize;

    for word in paragraph.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        // space left on the current line, counting the joining space
        let room = if line_len == 0 {
            width
        } else {
            width.saturating_sub(line_len + 1)
        };
        if word.len() <= room {
            if line_len > 0 {
                line.push(' ');
                line_len += 1;
            }
            line.extend(word.iter());
            line_len += word.len();
            continue;
        }

        if line_len > 0 {
            lines.push(std::mem::take(&mut line));
        }
        while word.len() > width {
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        line.extend(word.iter());
        line_len = word.len();
    }

    if line_len > 0 {
        lines.push(line);
    }
}

/// Greedily wraps text by its rendered width: words are added to the current line
/// while the line stays narrower than `max_width`, otherwise a new line is started.
/// A single word wider than `max_width` gets a line of its own.
pub fn wrap_to_width(text: &str, font: Font, size: Pt, max_width: Pt) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };

        if width_of_text(&candidate, font, size) < max_width {
            current = candidate;
        } else {
            if !current.is_empty() {
                lines.push(current);
            }
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_blank_text_is_a_placeholder() {
        assert_eq!(wrap_lines(None, 90), vec!["-"]);
        assert_eq!(wrap_lines(Some(""), 90), vec!["-"]);
        assert_eq!(wrap_lines(Some(" \n\t "), 90), vec!["-"]);
    }

    #[test]
    fn blank_paragraphs_are_kept_as_empty_lines() {
        let lines = wrap_lines(Some("Phase 1\n\n  \nPhase 2"), 90);
        assert_eq!(lines, vec!["Phase 1", "", "", "Phase 2"]);
    }

    #[test]
    fn carriage_returns_are_paragraph_breaks() {
        assert_eq!(wrap_lines(Some("a\r\nb\rc"), 90), vec!["a", "b", "c"]);
    }

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap_lines(Some("the quick brown fox jumps over the lazy dog"), 15);
        assert_eq!(lines, vec!["the quick brown", "fox jumps over", "the lazy dog"]);
        assert!(lines.iter().all(|line| line.chars().count() <= 15));
    }

    #[test]
    fn collapses_runs_of_whitespace() {
        assert_eq!(wrap_lines(Some("  a    b \t c  "), 90), vec!["a b c"]);
    }

    #[test]
    fn splits_words_longer_than_the_width() {
        let lines = wrap_lines(Some("see https://example.com/a/very/long/path ok"), 10);
        assert_eq!(
            lines,
            vec!["see", "https://ex", "ample.com/", "a/very/lon", "g/path ok"]
        );
    }

    #[test]
    fn hyphens_are_not_break_points() {
        assert_eq!(
            wrap_lines(Some("a state-of-the-art"), 8),
            vec!["a", "state-of", "-the-art"]
        );
    }

    #[test]
    fn width_of_text_sums_advances() {
        assert_eq!(width_of_text("", Font::Helvetica, Pt(9.0)), Pt(0.0));
        // "ii" = 2 * 222 units
        let width = width_of_text("ii", Font::Helvetica, Pt(10.0));
        assert!((*width - 4.44).abs() < 1e-4);
    }

    #[test]
    fn wrap_to_width_keeps_short_text_on_one_line() {
        let lines = wrap_to_width("Website Revamp", Font::HelveticaBold, Pt(11.0), Pt(200.0));
        assert_eq!(lines, vec!["Website Revamp"]);
    }

    #[test]
    fn wrap_to_width_breaks_when_the_line_would_overflow() {
        let max = Pt(120.0);
        let lines = wrap_to_width(
            "Inventory Management System for Regional Warehouses",
            Font::HelveticaBold,
            Pt(11.0),
            max,
        );
        assert!(lines.len() > 2);
        assert_eq!(lines[0], "Inventory Management");
        for line in &lines {
            if line.contains(' ') {
                assert!(width_of_text(line, Font::HelveticaBold, Pt(11.0)) < max);
            }
        }
    }

    #[test]
    fn wrap_to_width_gives_overwide_words_their_own_line() {
        let lines = wrap_to_width("a Supercalifragilistic b", Font::Helvetica, Pt(11.0), Pt(30.0));
        assert_eq!(lines, vec!["a", "Supercalifragilistic", "b"]);
    }
}
