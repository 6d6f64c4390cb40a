//! Chooses a visual template for assistant text.
//!
//! The backend sends free text, so the template is recovered from literal
//! markers in it. This is the only place that inspects message text; the
//! result depends on the text alone and is recomputed on every render.

/// Marker lines of a ceremony description.
pub const WHEN_MARKER: &str = "🕒 When:";
pub const WHAT_MARKER: &str = "📝 What:";
pub const MODERN_TOUCH_MARKER: &str = "✨ Modern Touch:";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextLayout {
    /// An enumerated list ("1." and "2." both present).
    List,
    /// A ceremony description with labelled lines.
    CeremonyInfo,
    Plain,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineStyle {
    Heading,
    When,
    What,
    ModernTouch,
    Body,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyledLine<'a> {
    pub style: LineStyle,
    pub text: &'a str,
}

pub fn classify_text(text: &str) -> TextLayout {
    if text.contains("1.") && text.contains("2.") {
        TextLayout::List
    } else if text.contains(WHEN_MARKER) {
        TextLayout::CeremonyInfo
    } else {
        TextLayout::Plain
    }
}

/// A single digit followed by a dot, e.g. `"3. Wedding Traditions"`.
fn is_numbered(line: &str) -> bool {
    matches!(line.as_bytes(), [d, b'.', ..] if d.is_ascii_digit())
}

fn ceremony_style(line: &str) -> LineStyle {
    if line.starts_with(WHEN_MARKER) {
        LineStyle::When
    } else if line.starts_with(WHAT_MARKER) {
        LineStyle::What
    } else if line.starts_with(MODERN_TOUCH_MARKER) {
        LineStyle::ModernTouch
    } else {
        LineStyle::Body
    }
}

/// Splits `text` into styled lines according to its layout. Plain text stays one line.
pub fn styled_lines(text: &str) -> Vec<StyledLine<'_>> {
    match classify_text(text) {
        TextLayout::Plain => vec![StyledLine { style: LineStyle::Body, text }],
        TextLayout::List => text
            .split('\n')
            .map(|line| StyledLine {
                style: if is_numbered(line) { LineStyle::Heading } else { LineStyle::Body },
                text: line,
            })
            .collect(),
        TextLayout::CeremonyInfo => text
            .split('\n')
            .map(|line| StyledLine { style: ceremony_style(line), text: line })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WELCOME_MESSAGE;

    fn styles(text: &str) -> Vec<LineStyle> {
        styled_lines(text).into_iter().map(|l| l.style).collect()
    }

    #[test]
    fn test_list_needs_both_markers() {
        assert_eq!(classify_text("1. Venues\n2. Ceremonies"), TextLayout::List);
        assert_eq!(classify_text("Only 1. here"), TextLayout::Plain);
        assert_eq!(classify_text("Only 2. here"), TextLayout::Plain);
    }

    #[test]
    fn test_welcome_text_is_a_list() {
        assert_eq!(classify_text(WELCOME_MESSAGE), TextLayout::List);
        let lines = styled_lines(WELCOME_MESSAGE);
        let headings: Vec<&str> = lines
            .iter()
            .filter(|l| l.style == LineStyle::Heading)
            .map(|l| l.text)
            .collect();
        assert_eq!(
            headings,
            vec!["1. Wedding Venues 🏰", "2. Indian Wedding Ceremonies 🎉", "3. Wedding Traditions ✨"]
        );
    }

    #[test]
    fn test_list_heading_is_single_digit_at_line_start() {
        assert_eq!(
            styles("Pick one:\n1. Haldi\n2. Mehendi\n10. Vidaai\n  3. indented"),
            vec![
                LineStyle::Body,
                LineStyle::Heading,
                LineStyle::Heading,
                LineStyle::Body,
                LineStyle::Body,
            ]
        );
    }

    #[test]
    fn test_ceremony_markers() {
        let text = "Haldi ceremony\n🕒 When: Morning before the wedding\n📝 What: Turmeric paste\n✨ Modern Touch: Floral jewellery";
        assert_eq!(classify_text(text), TextLayout::CeremonyInfo);
        assert_eq!(
            styles(text),
            vec![LineStyle::Body, LineStyle::When, LineStyle::What, LineStyle::ModernTouch]
        );
    }

    #[test]
    fn test_ceremony_markers_only_count_at_line_start() {
        let text = "🕒 When: evening\nSee 📝 What: later";
        assert_eq!(styles(text), vec![LineStyle::When, LineStyle::Body]);
    }

    #[test]
    fn test_list_wins_over_ceremony() {
        let text = "1. Haldi\n🕒 When: Morning\n2. Sangeet";
        assert_eq!(classify_text(text), TextLayout::List);
        assert_eq!(styles(text), vec![LineStyle::Heading, LineStyle::Body, LineStyle::Heading]);
    }

    #[test]
    fn test_plain_text_is_one_body_line() {
        let text = "Happy to help!\nAsk me anything.";
        assert_eq!(
            styled_lines(text),
            vec![StyledLine { style: LineStyle::Body, text }]
        );
    }

    #[test]
    fn test_classification_is_repeatable() {
        let text = "1. a\n2. b";
        assert_eq!(styled_lines(text), styled_lines(text));
    }
}
