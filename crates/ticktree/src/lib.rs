#![forbid(unsafe_code)]

//! ticktree public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the engine and widget types from the internal crates and
//! offers a lightweight prelude for day-to-day usage.

// --- Core re-exports -------------------------------------------------------

pub use ticktree_core::check::{CheckEvent, CheckState};
pub use ticktree_core::error::TreeError;
pub use ticktree_core::event::{Modifiers, MouseButton, MouseEvent, MouseEventKind};
pub use ticktree_core::geometry::Rect;
pub use ticktree_core::tree::{Descendants, Node, NodeId, Tree};

// --- Widget re-exports -----------------------------------------------------

pub use ticktree_widgets::checkbox_tree::{
    CheckboxTree, CheckboxTreeState, HitRegion, MouseResult, Row,
};
pub use ticktree_widgets::glyphs::{CheckGlyphs, Guides};
pub use ticktree_widgets::style::{Color, Style, StyleFlags};

/// Convenience prelude for common usage.
pub mod prelude {
    pub use crate::{
        CheckEvent, CheckGlyphs, CheckState, CheckboxTree, Guides, MouseEvent, MouseResult,
        NodeId, Rect, Style, Tree, TreeError,
    };
}
