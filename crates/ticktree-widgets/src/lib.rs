#![forbid(unsafe_code)]

//! Checkbox tree widget for ticktree.
//!
//! [`CheckboxTree`] wraps the core engine with everything a host TUI needs
//! to put the tree on screen: guide and checkbox glyphs, per-state style
//! tokens, visible-row flattening, and pointer handling that only toggles
//! when the press lands on the checkbox glyph itself.

pub mod checkbox_tree;
pub mod glyphs;
pub mod style;

pub use checkbox_tree::{CheckboxTree, CheckboxTreeState, HitRegion, MouseResult, Row};
pub use glyphs::{CheckGlyphs, Guides};
pub use style::{Color, Style, StyleFlags};
