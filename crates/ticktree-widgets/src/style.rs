//! Style tokens.
//!
//! The widget never paints anything itself; it hands each row back with one
//! of these tokens and the host maps them onto its own rendering. Styles are
//! plain values passed in by the caller, so two trees on the same screen can
//! look entirely different without any shared configuration.

use bitflags::bitflags;

/// A terminal color value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// 24-bit RGB color.
    Rgb {
        /// Red channel (0–255).
        r: u8,
        /// Green channel (0–255).
        g: u8,
        /// Blue channel (0–255).
        b: u8,
    },
    /// Indexed color from the 256-color palette.
    Indexed(u8),
}

impl Color {
    /// Create an RGB color.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Create an indexed palette color.
    #[inline]
    #[must_use]
    pub const fn indexed(index: u8) -> Self {
        Self::Indexed(index)
    }
}

bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct StyleFlags: u8 {
        /// Bold text.
        const BOLD          = 0b0000_0001;
        /// Dim text.
        const DIM           = 0b0000_0010;
        /// Italic text.
        const ITALIC        = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE     = 0b0000_1000;
        /// Reversed foreground/background.
        const REVERSE       = 0b0001_0000;
        /// Struck-through text.
        const STRIKETHROUGH = 0b0010_0000;
    }
}

impl Default for StyleFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// A style token: optional colors plus attribute flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground color, if set.
    pub fg: Option<Color>,
    /// Background color, if set.
    pub bg: Option<Color>,
    /// Attribute flags.
    pub attrs: StyleFlags,
}

impl Style {
    /// Create an empty style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: StyleFlags::empty(),
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add the bold attribute.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.attrs |= StyleFlags::BOLD;
        self
    }

    /// Add the dim attribute.
    #[must_use]
    pub fn dim(mut self) -> Self {
        self.attrs |= StyleFlags::DIM;
        self
    }

    /// Add the underline attribute.
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.attrs |= StyleFlags::UNDERLINE;
        self
    }

    /// Add the reverse attribute.
    #[must_use]
    pub fn reverse(mut self) -> Self {
        self.attrs |= StyleFlags::REVERSE;
        self
    }

    /// Whether the style sets nothing at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }
}
