//! The Slide type: one page of the finished deck.

/// One slide of text, ready for a renderer.
///
/// `text` is newline-delimited: each line break separates two merged
/// segments (or two wrapped lines, for a forced split). `flagged` marks
/// slides produced by cutting an oversized segment into line-bounded
/// chunks rather than by natural grouping.
///
/// ```rust
/// use scriptdeck::Slide;
///
/// let slide = Slide::new("첫 문장입니다.\n둘째 문장입니다.", false);
/// assert_eq!(slide.lines().count(), 2);
/// assert!(!slide.flagged);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slide {
    /// The slide text, newline-delimited.
    pub text: String,
    /// Whether this slide came from a forced size-driven split and needs review.
    pub flagged: bool,
}

impl Slide {
    /// Create a new slide.
    #[must_use]
    pub fn new(text: impl Into<String>, flagged: bool) -> Self {
        Self {
            text: text.into(),
            flagged,
        }
    }

    /// An unflagged slide.
    #[must_use]
    pub fn natural(text: impl Into<String>) -> Self {
        Self::new(text, false)
    }

    /// A flagged slide.
    #[must_use]
    pub fn forced(text: impl Into<String>) -> Self {
        Self::new(text, true)
    }

    /// The placeholder deck returned for input with no content.
    #[must_use]
    pub fn empty_deck() -> Vec<Self> {
        vec![Self::default()]
    }

    /// Whether this slide has no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The newline-separated lines of this slide.
    pub fn lines(&self) -> std::str::Lines<'_> {
        self.text.lines()
    }
}

impl std::fmt::Display for Slide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.flagged {
            write!(f, "[needs review]\n{}", self.text)
        } else {
            f.write_str(&self.text)
        }
    }
}

/// Whether any slide in the deck needs review.
pub fn any_flagged(slides: &[Slide]) -> bool {
    slides.iter().any(|s| s.flagged)
}

/// Zero-based positions of flagged slides.
pub fn flagged_positions(slides: &[Slide]) -> Vec<usize> {
    slides
        .iter()
        .enumerate()
        .filter(|(_, s)| s.flagged)
        .map(|(i, _)| i)
        .collect()
}
