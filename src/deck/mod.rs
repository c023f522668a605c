mod slides;

pub use slides::builtin_deck;

/// Which interactive widget a demo slide hosts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoKind {
    Timer,
    Fetch,
    LeakComparison,
}

/// One block of renderable slide content. Opaque to the navigation logic;
/// only the view layer and the highlighter look inside.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlideBlock {
    Heading(String),
    Paragraph(String),
    Bullet(String),
    Code { lang: &'static str, source: String },
    Note(String),
    Demo(DemoKind),
}

impl SlideBlock {
    pub fn heading(text: impl Into<String>) -> Self {
        SlideBlock::Heading(text.into())
    }

    pub fn paragraph(text: impl Into<String>) -> Self {
        SlideBlock::Paragraph(text.into())
    }

    pub fn bullet(text: impl Into<String>) -> Self {
        SlideBlock::Bullet(text.into())
    }

    pub fn code(lang: &'static str, source: impl Into<String>) -> Self {
        SlideBlock::Code {
            lang,
            source: source.into(),
        }
    }

    pub fn note(text: impl Into<String>) -> Self {
        SlideBlock::Note(text.into())
    }
}

/// A single slide. Immutable once the deck is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideRecord {
    pub id: u32,
    pub title: String,
    pub blocks: Vec<SlideBlock>,
}

impl SlideRecord {
    pub fn new(id: u32, title: impl Into<String>, blocks: Vec<SlideBlock>) -> Self {
        Self {
            id,
            title: title.into(),
            blocks,
        }
    }

    /// The demo widget hosted by this slide, if any.
    pub fn demo(&self) -> Option<DemoKind> {
        self.blocks.iter().find_map(|b| match b {
            SlideBlock::Demo(kind) => Some(*kind),
            _ => None,
        })
    }
}

/// An ordered, immutable sequence of slides, loaded once per session.
#[derive(Debug, Clone)]
pub struct Deck {
    slides: Vec<SlideRecord>,
}

impl Deck {
    /// Panics if `slides` is empty; a deck with no slides is a programming
    /// error, not a runtime condition.
    pub fn new(slides: Vec<SlideRecord>) -> Self {
        assert!(!slides.is_empty(), "deck must contain at least one slide");
        Self { slides }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[SlideRecord] {
        &self.slides
    }

    pub fn slide(&self, index: usize) -> Option<&SlideRecord> {
        self.slides.get(index)
    }
}
