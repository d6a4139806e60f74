//! Display surface seam for the typing animator.
//!
//! The animator only ever needs one operation from its output: replace the
//! rendered prefix. The caret is owned by the surface, appended once at
//! construction and kept as the trailing element regardless of what the
//! animator renders.

/// Output sink for the typing animator.
pub trait DisplaySurface {
    /// Replace the displayed text with `text`, preserving the caret as the
    /// trailing element.
    fn render_prefix(&mut self, text: &str);
}

/// A text region with a fixed trailing caret.
///
/// Text and caret are stored separately, so a render can never displace the
/// caret: [`TextSurface::parts`] always yields the caret last.
#[derive(Debug, Clone)]
pub struct TextSurface {
    text: String,
    caret: String,
}

impl TextSurface {
    /// Create an empty surface with `caret` appended as the trailing marker.
    pub fn new(caret: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            caret: caret.into(),
        }
    }

    /// The currently rendered prefix, without the caret.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The caret marker.
    pub fn caret(&self) -> &str {
        &self.caret
    }

    /// The rendered pieces in display order. The caret is always last.
    pub fn parts(&self) -> (&str, &str) {
        (&self.text, &self.caret)
    }
}

impl DisplaySurface for TextSurface {
    fn render_prefix(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
    }
}

/// Surface that records every render. Used by tests to assert the exact
/// sequence of prefixes the animator produces.
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    renders: Vec<String>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All renders since construction or the last [`clear`](Self::clear).
    pub fn renders(&self) -> &[String] {
        &self.renders
    }

    pub fn clear(&mut self) {
        self.renders.clear();
    }
}

impl DisplaySurface for RecordingSurface {
    fn render_prefix(&mut self, text: &str) {
        self.renders.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_surface_starts_empty_with_caret() {
        let surface = TextSurface::new("▌");
        assert_eq!(surface.text(), "");
        assert_eq!(surface.caret(), "▌");
    }

    #[test]
    fn render_replaces_text_and_keeps_caret_last() {
        let mut surface = TextSurface::new("|");
        surface.render_prefix("Hel");
        surface.render_prefix("Hello");

        let (text, caret) = surface.parts();
        assert_eq!(text, "Hello");
        assert_eq!(caret, "|");
    }

    #[test]
    fn render_to_empty_clears_previous_text() {
        let mut surface = TextSurface::new("|");
        surface.render_prefix("something");
        surface.render_prefix("");
        assert_eq!(surface.text(), "");
        assert_eq!(surface.caret(), "|");
    }

    #[test]
    fn recording_surface_captures_sequence() {
        let mut surface = RecordingSurface::new();
        surface.render_prefix("a");
        surface.render_prefix("ab");
        assert_eq!(surface.renders(), &["a", "ab"]);
    }
}
