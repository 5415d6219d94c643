#![forbid(unsafe_code)]

//! Core: arena tree, tri-state check propagation, and input events.
//!
//! The engine is deliberately free of any rendering concern. A host embeds
//! [`Tree`] (or the widget layer built on top of it), feeds it activation
//! events, and reads back [`CheckEvent`] notifications and the checked-leaf
//! set.

pub mod check;
pub mod error;
pub mod event;
pub mod geometry;
pub mod tree;

pub use check::{CheckEvent, CheckState};
pub use error::TreeError;
pub use event::{Modifiers, MouseButton, MouseEvent, MouseEventKind};
pub use geometry::Rect;
pub use tree::{Descendants, Node, NodeId, Tree};
