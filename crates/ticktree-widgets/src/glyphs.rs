//! Glyph sets for guides and checkboxes.
//!
//! Both sets hand out plain `&str` segments; painting them with a style is
//! the host's job.

use ticktree_core::CheckState;

/// Guide character styles for tree indentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Guides {
    /// ASCII guides: `|`, `+--`, `` `-- ``.
    Ascii,
    /// Unicode box-drawing characters (default).
    #[default]
    Unicode,
    /// Bold Unicode box-drawing characters.
    Bold,
    /// Rounded Unicode characters.
    Rounded,
}

impl Guides {
    /// Vertical continuation (an ancestor has siblings below).
    #[must_use]
    pub const fn vertical(&self) -> &str {
        match self {
            Self::Ascii => "|   ",
            Self::Unicode | Self::Rounded => "\u{2502}   ",
            Self::Bold => "\u{2503}   ",
        }
    }

    /// Branch guide (item has siblings below).
    #[must_use]
    pub const fn branch(&self) -> &str {
        match self {
            Self::Ascii => "+-- ",
            Self::Unicode | Self::Rounded => "\u{251C}\u{2500}\u{2500} ",
            Self::Bold => "\u{2523}\u{2501}\u{2501} ",
        }
    }

    /// Last-item guide (no siblings below).
    #[must_use]
    pub const fn last(&self) -> &str {
        match self {
            Self::Ascii => "`-- ",
            Self::Unicode => "\u{2514}\u{2500}\u{2500} ",
            Self::Bold => "\u{2517}\u{2501}\u{2501} ",
            Self::Rounded => "\u{2570}\u{2500}\u{2500} ",
        }
    }

    /// Empty indentation (no guide needed).
    #[must_use]
    pub const fn space(&self) -> &str {
        "    "
    }

    /// Width in columns of each guide segment.
    #[must_use]
    pub const fn width(&self) -> usize {
        4
    }
}

/// Checkbox glyphs, one per check state.
///
/// Every glyph includes a trailing space so the label never hugs the box;
/// [`CheckGlyphs::width`] accounts for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CheckGlyphs {
    /// ASCII boxes: `[x]`, `[ ]`, `[-]`.
    Ascii,
    /// Unicode ballot boxes (default).
    #[default]
    Unicode,
}

impl CheckGlyphs {
    /// The glyph for a given check state.
    #[must_use]
    pub const fn for_state(&self, state: CheckState) -> &'static str {
        match (self, state) {
            (Self::Ascii, CheckState::Checked) => "[x] ",
            (Self::Ascii, CheckState::Unchecked) => "[ ] ",
            (Self::Ascii, CheckState::Tristate) => "[-] ",
            (Self::Unicode, CheckState::Checked) => "\u{2611} ",
            (Self::Unicode, CheckState::Unchecked) => "\u{2610} ",
            (Self::Unicode, CheckState::Tristate) => "\u{229F} ",
        }
    }

    /// Width in columns of the glyph plus its trailing space.
    #[must_use]
    pub const fn width(&self) -> usize {
        match self {
            Self::Ascii => 4,
            Self::Unicode => 2,
        }
    }
}
