//! Tri-state check propagation.
//!
//! Every node carries one [`CheckState`]. Explicitly setting a node's state
//! forces the whole subtree to that state (downward propagation), then
//! recomputes the ancestor chain from sibling states (upward propagation):
//! an ancestor whose children are uniformly in the new state adopts it, and
//! the first mixed ancestor (plus everything above it) becomes
//! [`CheckState::Tristate`].
//!
//! All walks are iterative over the arena, so tree depth is bounded by heap
//! rather than the call stack.
//!
//! # Example
//!
//! ```
//! use ticktree_core::check::CheckState;
//! use ticktree_core::tree::Tree;
//!
//! let mut tree = Tree::new();
//! let root = tree.push(None, "root").unwrap();
//! let a = tree.push(Some(root), "a").unwrap();
//! let b = tree.push(Some(root), "b").unwrap();
//!
//! tree.check(a).unwrap();
//! assert_eq!(tree.state(root), Some(CheckState::Tristate));
//! tree.check(b).unwrap();
//! assert_eq!(tree.state(root), Some(CheckState::Checked));
//! ```

use crate::error::TreeError;
use crate::tree::{NodeId, Tree};

/// Check state of a single node.
///
/// Exactly one state holds at any time; there is no tag-set encoding where
/// several could coexist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CheckState {
    /// No leaf below this node is checked.
    #[default]
    Unchecked,
    /// This node and (for branches) every leaf below it is checked.
    Checked,
    /// The subtree mixes checked and unchecked leaves.
    Tristate,
}

impl CheckState {
    /// Whether this is [`CheckState::Checked`].
    #[must_use]
    pub const fn is_checked(self) -> bool {
        matches!(self, Self::Checked)
    }

    /// Whether this is [`CheckState::Unchecked`].
    #[must_use]
    pub const fn is_unchecked(self) -> bool {
        matches!(self, Self::Unchecked)
    }

    /// Whether this is [`CheckState::Tristate`].
    #[must_use]
    pub const fn is_tristate(self) -> bool {
        matches!(self, Self::Tristate)
    }
}

/// Notification emitted by [`Tree::toggle`], scoped to the activated node.
///
/// Propagation to descendants and ancestors never emits additional events;
/// the host forwards the one value wherever it likes (persistence layer,
/// status line, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckEvent {
    /// The node was checked.
    Checked(NodeId),
    /// The node was unchecked.
    Unchecked(NodeId),
}

impl CheckEvent {
    /// The node the activation targeted.
    #[must_use]
    pub const fn node(self) -> NodeId {
        match self {
            Self::Checked(id) | Self::Unchecked(id) => id,
        }
    }
}

impl<T> Tree<T> {
    /// Get a node's check state, or `None` for a missing id.
    #[must_use]
    pub fn state(&self, id: NodeId) -> Option<CheckState> {
        self.get(id).map(|node| node.state())
    }

    /// Check `id`: the node and all descendants become `Checked`, ancestors
    /// are recomputed.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if `id` is not in the tree; nothing is
    /// mutated in that case.
    pub fn check(&mut self, id: NodeId) -> Result<(), TreeError> {
        if !self.exists(id) {
            return Err(TreeError::NotFound(id));
        }
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("tree_check", node = ?id).entered();
        self.assign_subtree(id, CheckState::Checked);
        self.reconcile_upward(id, CheckState::Checked);
        Ok(())
    }

    /// Uncheck `id`: the node and all descendants become `Unchecked`,
    /// ancestors are recomputed.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if `id` is not in the tree; nothing is
    /// mutated in that case.
    pub fn uncheck(&mut self, id: NodeId) -> Result<(), TreeError> {
        if !self.exists(id) {
            return Err(TreeError::NotFound(id));
        }
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("tree_uncheck", node = ?id).entered();
        self.assign_subtree(id, CheckState::Unchecked);
        self.reconcile_upward(id, CheckState::Unchecked);
        Ok(())
    }

    /// Toggle `id` the way a checkbox activation does.
    ///
    /// `Unchecked` and `Tristate` nodes get checked, `Checked` nodes get
    /// unchecked. Returns the notification for the activated node.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if `id` is not in the tree.
    pub fn toggle(&mut self, id: NodeId) -> Result<CheckEvent, TreeError> {
        match self.state(id).ok_or(TreeError::NotFound(id))? {
            CheckState::Checked => {
                self.uncheck(id)?;
                Ok(CheckEvent::Unchecked(id))
            }
            CheckState::Unchecked | CheckState::Tristate => {
                self.check(id)?;
                Ok(CheckEvent::Checked(id))
            }
        }
    }

    /// Collect the checked leaves, depth-first from the roots in child order.
    ///
    /// Branch nodes are never included; their `Checked` state is a derived
    /// aggregate for display only. `Unchecked` subtrees are skipped outright,
    /// which is valid under upward consistency (no checked leaf can hide
    /// below an unchecked branch).
    #[must_use]
    pub fn checked_leaves(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.roots().iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            let Some(node) = self.get(id) else { continue };
            match node.state() {
                CheckState::Unchecked => {}
                CheckState::Checked if node.is_leaf() => out.push(id),
                _ => stack.extend(node.children().iter().rev().copied()),
            }
        }
        out
    }

    /// Recompute the ancestor chain of `id` from current child states.
    ///
    /// Unlike the directional walk done by check/uncheck, this applies the
    /// full rule at every ancestor: all children `Checked` makes the parent
    /// `Checked`, all `Unchecked` makes it `Unchecked`, anything else makes
    /// it `Tristate`. Use after [`Tree::insert_with_state`] or
    /// [`Tree::remove`] left the chain stale.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if `id` is not in the tree.
    pub fn repropagate(&mut self, id: NodeId) -> Result<(), TreeError> {
        if !self.exists(id) {
            return Err(TreeError::NotFound(id));
        }
        let mut cursor = self.parent(id);
        while let Some(current) = cursor {
            let next = self.recomputed_state(current);
            self.set_state(current, next);
            cursor = self.parent(current);
        }
        Ok(())
    }

    fn assign_subtree(&mut self, id: NodeId, state: CheckState) {
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.get_mut(current) {
                node.state = state;
                stack.extend(node.children.iter().copied());
            }
        }
    }

    /// Walk upward from the parent of `id` after the subtree was uniformly
    /// assigned `uniform`. Ancestors whose children all match adopt the
    /// state; the first mixed ancestor and everything above it become
    /// tristate unconditionally.
    fn reconcile_upward(&mut self, id: NodeId, uniform: CheckState) {
        let mut cursor = self.parent(id);
        while let Some(current) = cursor {
            if self.children_all(current, uniform) {
                self.set_state(current, uniform);
                cursor = self.parent(current);
            } else {
                let mut above = Some(current);
                while let Some(ancestor) = above {
                    self.set_state(ancestor, CheckState::Tristate);
                    above = self.parent(ancestor);
                }
                return;
            }
        }
    }

    fn children_all(&self, id: NodeId, state: CheckState) -> bool {
        self.children(id)
            .iter()
            .all(|&child| self.state(child) == Some(state))
    }

    fn recomputed_state(&self, id: NodeId) -> CheckState {
        let children = self.children(id);
        if children.is_empty() {
            return self.state(id).unwrap_or_default();
        }
        if self.children_all(id, CheckState::Checked) {
            CheckState::Checked
        } else if self.children_all(id, CheckState::Unchecked) {
            CheckState::Unchecked
        } else {
            CheckState::Tristate
        }
    }

    fn set_state(&mut self, id: NodeId, state: CheckState) {
        if let Some(node) = self.get_mut(id) {
            node.state = state;
        }
    }
}
