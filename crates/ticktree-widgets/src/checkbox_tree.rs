//! Checkbox tree widget.
//!
//! Wraps a [`Tree`] of labels with a checkbox per row. A left press on the
//! checkbox glyph toggles the node and propagates through the engine; a
//! press anywhere else on the row is reported back as a plain selection so
//! host behavior (highlight, focus, context menus) proceeds untouched.
//!
//! # Example
//!
//! ```
//! use ticktree_widgets::checkbox_tree::CheckboxTree;
//!
//! let mut widget = CheckboxTree::new();
//! let todo = widget.push(None, "todo").unwrap();
//! let write = widget.push(Some(todo), "write").unwrap();
//! widget.push(Some(todo), "review").unwrap();
//!
//! widget.tree_mut().check(write).unwrap();
//! assert_eq!(widget.checked_labels(), ["write"]);
//! ```

use std::collections::HashSet;

use crate::glyphs::{CheckGlyphs, Guides};
use crate::style::Style;
use ticktree_core::check::{CheckEvent, CheckState};
use ticktree_core::error::TreeError;
use ticktree_core::event::{MouseButton, MouseEvent, MouseEventKind};
use ticktree_core::geometry::Rect;
use ticktree_core::tree::{NodeId, Tree};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Regions of a row a pointer press can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitRegion {
    /// The checkbox glyph span.
    Checkbox,
    /// Anywhere else on the row (guides, label, trailing space).
    Content,
}

/// Outcome of [`CheckboxTree::handle_mouse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseResult {
    /// The checkbox glyph was pressed; the node toggled and propagated.
    Toggled(CheckEvent),
    /// A row was pressed outside its checkbox glyph.
    Selected(NodeId),
    /// The event was not for this widget (or the widget is disabled).
    Ignored,
}

/// One visible row, ready for the host to paint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'a> {
    /// The node this row shows.
    pub node: NodeId,
    /// Nesting depth (roots are 0).
    pub depth: usize,
    /// Guide segments preceding the checkbox.
    pub prefix: String,
    /// Checkbox glyph for the node's current state.
    pub glyph: &'static str,
    /// Style token for the glyph.
    pub glyph_style: Style,
    /// The node's label.
    pub label: &'a str,
    /// Style token for the label.
    pub label_style: Style,
}

impl Row<'_> {
    /// Total display width of the row in columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.prefix.width() + self.glyph.width() + self.label.width()
    }

    /// The longest label prefix that fits in `max_width` columns, cut on a
    /// grapheme boundary.
    #[must_use]
    pub fn clip_label(&self, max_width: usize) -> &str {
        let mut width = 0;
        let mut end = 0;
        for (offset, grapheme) in self.label.grapheme_indices(true) {
            let w = grapheme.width();
            if width + w > max_width {
                break;
            }
            width += w;
            end = offset + grapheme.len();
        }
        &self.label[..end]
    }
}

/// Persistable state for a [`CheckboxTree`].
///
/// Nodes are addressed by their label path (e.g. `"todo/write"`), so labels
/// that repeat under one parent will collide; hosts that allow duplicates
/// should persist something else. Restoring replays `check` per stored leaf,
/// which rebuilds every branch state through normal propagation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "state-persistence",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct CheckboxTreeState {
    /// Label paths of expanded branch nodes.
    pub expanded_paths: HashSet<String>,
    /// Label paths of checked leaves.
    pub checked_paths: HashSet<String>,
}

/// Checkbox tree widget over a tree of labels.
#[derive(Debug, Clone, Default)]
pub struct CheckboxTree {
    tree: Tree<String>,
    guides: Guides,
    glyphs: CheckGlyphs,
    checked_style: Style,
    unchecked_style: Style,
    tristate_style: Style,
    label_style: Style,
    disabled_style: Style,
    disabled: bool,
}

impl CheckboxTree {
    /// Create an empty widget with default glyphs and empty styles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the guide character style.
    #[must_use]
    pub fn with_guides(mut self, guides: Guides) -> Self {
        self.guides = guides;
        self
    }

    /// Set the checkbox glyph set.
    #[must_use]
    pub fn with_glyphs(mut self, glyphs: CheckGlyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Set the style for checked-state glyphs.
    #[must_use]
    pub fn with_checked_style(mut self, style: Style) -> Self {
        self.checked_style = style;
        self
    }

    /// Set the style for unchecked-state glyphs.
    #[must_use]
    pub fn with_unchecked_style(mut self, style: Style) -> Self {
        self.unchecked_style = style;
        self
    }

    /// Set the style for tristate glyphs.
    #[must_use]
    pub fn with_tristate_style(mut self, style: Style) -> Self {
        self.tristate_style = style;
        self
    }

    /// Set the style for labels.
    #[must_use]
    pub fn with_label_style(mut self, style: Style) -> Self {
        self.label_style = style;
        self
    }

    /// Set the style used for every row while the widget is disabled.
    #[must_use]
    pub fn with_disabled_style(mut self, style: Style) -> Self {
        self.disabled_style = style;
        self
    }

    /// Get a reference to the underlying tree.
    #[must_use]
    pub fn tree(&self) -> &Tree<String> {
        &self.tree
    }

    /// Get a mutable reference to the underlying tree.
    pub fn tree_mut(&mut self) -> &mut Tree<String> {
        &mut self.tree
    }

    /// Append a labeled node under `parent` (or as the last root).
    pub fn push(
        &mut self,
        parent: Option<NodeId>,
        label: impl Into<String>,
    ) -> Result<NodeId, TreeError> {
        self.tree.push(parent, label.into())
    }

    /// Insert a labeled node at `index` among its siblings.
    pub fn insert(
        &mut self,
        parent: Option<NodeId>,
        index: usize,
        label: impl Into<String>,
    ) -> Result<NodeId, TreeError> {
        self.tree.insert(parent, index, label.into())
    }

    /// Insert a labeled node with an explicit check state.
    ///
    /// See [`Tree::insert_with_state`] for the repropagation caveat.
    pub fn insert_with_state(
        &mut self,
        parent: Option<NodeId>,
        index: usize,
        label: impl Into<String>,
        state: CheckState,
    ) -> Result<NodeId, TreeError> {
        self.tree.insert_with_state(parent, index, label.into(), state)
    }

    /// Whether the widget ignores pointer input.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Enable or disable pointer input.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Expand every node.
    pub fn expand_all(&mut self) {
        self.tree.expand_all();
    }

    /// Collapse every node.
    pub fn collapse_all(&mut self) {
        self.tree.collapse_all();
    }

    /// The checked leaves, depth-first from the roots.
    #[must_use]
    pub fn checked_leaves(&self) -> Vec<NodeId> {
        self.tree.checked_leaves()
    }

    /// Labels of the checked leaves, depth-first from the roots.
    #[must_use]
    pub fn checked_labels(&self) -> Vec<&str> {
        self.tree
            .checked_leaves()
            .into_iter()
            .filter_map(|id| self.tree.data(id).map(String::as_str))
            .collect()
    }

    /// Flatten the visible (expanded) tree into paintable rows.
    #[must_use]
    pub fn rows(&self) -> Vec<Row<'_>> {
        let mut out = Vec::new();
        let roots = self.tree.roots();
        // Stack entries carry the guide prefix inherited from ancestor
        // levels and whether the node is last among its siblings.
        let mut stack: Vec<(NodeId, usize, String, bool)> = Vec::new();
        for (i, &root) in roots.iter().enumerate().rev() {
            stack.push((root, 0, String::new(), i + 1 == roots.len()));
        }
        while let Some((id, depth, inherited, is_last)) = stack.pop() {
            let Some(node) = self.tree.get(id) else { continue };
            let prefix = if depth == 0 {
                String::new()
            } else if is_last {
                format!("{inherited}{}", self.guides.last())
            } else {
                format!("{inherited}{}", self.guides.branch())
            };
            let (glyph_style, label_style) = if self.disabled {
                (self.disabled_style, self.disabled_style)
            } else {
                (self.state_style(node.state()), self.label_style)
            };
            out.push(Row {
                node: id,
                depth,
                prefix,
                glyph: self.glyphs.for_state(node.state()),
                glyph_style,
                label: node.data().as_str(),
                label_style,
            });
            if node.is_expanded() && !node.is_leaf() {
                let child_inherited = if depth == 0 {
                    String::new()
                } else if is_last {
                    format!("{inherited}{}", self.guides.space())
                } else {
                    format!("{inherited}{}", self.guides.vertical())
                };
                let children = node.children();
                for (i, &child) in children.iter().enumerate().rev() {
                    stack.push((
                        child,
                        depth + 1,
                        child_inherited.clone(),
                        i + 1 == children.len(),
                    ));
                }
            }
        }
        out
    }

    /// Map a widget-area pointer position to a row and region.
    ///
    /// Coordinates are terminal cells; `area` is where the host painted the
    /// rows, one per line starting at `area.y`.
    #[must_use]
    pub fn hit_test(&self, x: u16, y: u16, area: Rect) -> Option<(NodeId, HitRegion)> {
        if !area.contains(x, y) {
            return None;
        }
        let rows = self.rows();
        let row = rows.get((y - area.y) as usize)?;
        let rel = (x - area.x) as usize;
        let indent = row.depth * self.guides.width();
        let region = if rel >= indent && rel < indent + self.glyphs.width() {
            HitRegion::Checkbox
        } else {
            HitRegion::Content
        };
        Some((row.node, region))
    }

    /// Handle a pointer event.
    ///
    /// Only a left-button press does anything: on the checkbox glyph it
    /// toggles the node, elsewhere on a row it reports a selection. Disabled
    /// widgets, other buttons, and presses outside the rows are ignored, as
    /// is a press whose node vanished between layout and delivery.
    pub fn handle_mouse(&mut self, event: &MouseEvent, area: Rect) -> MouseResult {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "widget_event",
            widget = "CheckboxTree",
            x = event.x,
            y = event.y
        )
        .entered();

        if self.disabled {
            return MouseResult::Ignored;
        }
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match self.hit_test(event.x, event.y, area) {
                    Some((node, HitRegion::Checkbox)) => match self.tree.toggle(node) {
                        Ok(check_event) => MouseResult::Toggled(check_event),
                        Err(TreeError::NotFound(_)) => MouseResult::Ignored,
                    },
                    Some((node, HitRegion::Content)) => MouseResult::Selected(node),
                    None => MouseResult::Ignored,
                }
            }
            _ => MouseResult::Ignored,
        }
    }

    /// Capture expansion and checked-leaf state for persistence.
    #[must_use]
    pub fn save_state(&self) -> CheckboxTreeState {
        let mut state = CheckboxTreeState::default();
        for (id, path) in self.paths() {
            let Some(node) = self.tree.get(id) else { continue };
            if node.is_leaf() {
                if node.state().is_checked() {
                    state.checked_paths.insert(path);
                }
            } else if node.is_expanded() {
                state.expanded_paths.insert(path);
            }
        }
        state
    }

    /// Restore a previously captured state.
    ///
    /// Everything is unchecked first, then each stored leaf path is checked
    /// again; branch states fall out of normal propagation. Paths that no
    /// longer resolve are skipped.
    pub fn restore_state(&mut self, state: &CheckboxTreeState) {
        let paths = self.paths();
        for root in self.tree.roots().to_vec() {
            let _ = self.tree.uncheck(root);
        }
        for (id, path) in &paths {
            let Some(node) = self.tree.get(*id) else { continue };
            if node.is_leaf() {
                if state.checked_paths.contains(path) {
                    let _ = self.tree.check(*id);
                }
            } else {
                let _ = self
                    .tree
                    .set_expanded(*id, state.expanded_paths.contains(path));
            }
        }
    }

    fn state_style(&self, state: CheckState) -> Style {
        match state {
            CheckState::Checked => self.checked_style,
            CheckState::Unchecked => self.unchecked_style,
            CheckState::Tristate => self.tristate_style,
        }
    }

    /// Label paths (`"a/b/c"`) for every node, depth-first.
    fn paths(&self) -> Vec<(NodeId, String)> {
        let mut out = Vec::new();
        let mut stack: Vec<(NodeId, String)> = self
            .tree
            .roots()
            .iter()
            .rev()
            .map(|&id| (id, String::new()))
            .collect();
        while let Some((id, prefix)) = stack.pop() {
            let Some(node) = self.tree.get(id) else { continue };
            let path = if prefix.is_empty() {
                node.data().clone()
            } else {
                format!("{prefix}/{}", node.data())
            };
            for &child in node.children().iter().rev() {
                stack.push((child, path.clone()));
            }
            out.push((id, path));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticktree_core::event::Modifiers;

    /// root -> { a -> { a1, a2 }, b } with ASCII glyphs for easy math.
    fn sample() -> (CheckboxTree, NodeId, NodeId, NodeId, NodeId, NodeId) {
        let mut widget = CheckboxTree::new()
            .with_guides(Guides::Ascii)
            .with_glyphs(CheckGlyphs::Ascii);
        let root = widget.push(None, "root").unwrap();
        let a = widget.push(Some(root), "a").unwrap();
        let a1 = widget.push(Some(a), "a1").unwrap();
        let a2 = widget.push(Some(a), "a2").unwrap();
        let b = widget.push(Some(root), "b").unwrap();
        (widget, root, a, a1, a2, b)
    }

    fn area() -> Rect {
        Rect::from_size(40, 10)
    }

    fn left_click(x: u16, y: u16) -> MouseEvent {
        MouseEvent::new(MouseEventKind::Down(MouseButton::Left), x, y)
    }

    #[test]
    fn rows_flatten_the_visible_tree() {
        let (widget, root, a, a1, a2, b) = sample();
        let rows = widget.rows();
        let order: Vec<NodeId> = rows.iter().map(|row| row.node).collect();
        assert_eq!(order, [root, a, a1, a2, b]);
        let depths: Vec<usize> = rows.iter().map(|row| row.depth).collect();
        assert_eq!(depths, [0, 1, 2, 2, 1]);
    }

    #[test]
    fn rows_skip_collapsed_subtrees() {
        let (mut widget, root, a, _a1, _a2, b) = sample();
        widget.tree_mut().set_expanded(a, false).unwrap();
        let order: Vec<NodeId> = widget.rows().iter().map(|row| row.node).collect();
        assert_eq!(order, [root, a, b]);
    }

    #[test]
    fn row_prefixes_follow_the_guides() {
        let (widget, _root, _a, _a1, _a2, _b) = sample();
        let rows = widget.rows();
        assert_eq!(rows[0].prefix, "");
        assert_eq!(rows[1].prefix, "+-- "); // a: has sibling b below
        assert_eq!(rows[2].prefix, "|   +-- "); // a1
        assert_eq!(rows[3].prefix, "|   `-- "); // a2: last child of a
        assert_eq!(rows[4].prefix, "`-- "); // b: last child of root
    }

    #[test]
    fn glyphs_track_check_state() {
        let (mut widget, _root, a, a1, _a2, _b) = sample();
        widget.tree_mut().check(a1).unwrap();
        let rows = widget.rows();
        let glyph_of = |id: NodeId| rows.iter().find(|row| row.node == id).unwrap().glyph;
        assert_eq!(glyph_of(a1), "[x] ");
        assert_eq!(glyph_of(a), "[-] ");
    }

    #[test]
    fn click_on_checkbox_toggles() {
        let (mut widget, root, a, a1, _a2, _b) = sample();
        // a1 is row 2 at depth 2: guides occupy 8 columns, box spans 8..12.
        let result = widget.handle_mouse(&left_click(8, 2), area());
        assert_eq!(result, MouseResult::Toggled(CheckEvent::Checked(a1)));
        assert_eq!(widget.tree().state(a), Some(CheckState::Tristate));
        assert_eq!(widget.tree().state(root), Some(CheckState::Tristate));

        // A second press on the same box unchecks.
        let result = widget.handle_mouse(&left_click(11, 2), area());
        assert_eq!(result, MouseResult::Toggled(CheckEvent::Unchecked(a1)));
        assert_eq!(widget.tree().state(root), Some(CheckState::Unchecked));
    }

    #[test]
    fn click_elsewhere_selects_the_row() {
        let (mut widget, _root, _a, a1, _a2, _b) = sample();
        // Past the box span on row 2.
        assert_eq!(
            widget.handle_mouse(&left_click(13, 2), area()),
            MouseResult::Selected(a1)
        );
        // On the guide area before the box.
        assert_eq!(
            widget.handle_mouse(&left_click(3, 2), area()),
            MouseResult::Selected(a1)
        );
        assert_eq!(widget.tree().state(a1), Some(CheckState::Unchecked));
    }

    #[test]
    fn clicks_outside_rows_or_area_are_ignored() {
        let (mut widget, _root, _a, _a1, _a2, _b) = sample();
        // Below the last row but inside the area.
        assert_eq!(
            widget.handle_mouse(&left_click(0, 8), area()),
            MouseResult::Ignored
        );
        // Outside the area entirely.
        assert_eq!(
            widget.handle_mouse(&left_click(0, 20), area()),
            MouseResult::Ignored
        );
    }

    #[test]
    fn non_left_buttons_are_ignored() {
        let (mut widget, _root, _a, _a1, _a2, _b) = sample();
        let right = MouseEvent::new(MouseEventKind::Down(MouseButton::Right), 0, 0)
            .with_modifiers(Modifiers::CTRL);
        assert_eq!(widget.handle_mouse(&right, area()), MouseResult::Ignored);
        let moved = MouseEvent::new(MouseEventKind::Moved, 0, 0);
        assert_eq!(widget.handle_mouse(&moved, area()), MouseResult::Ignored);
    }

    #[test]
    fn disabled_widget_ignores_input_and_restyles() {
        let (mut widget, _root, _a, _a1, _a2, _b) = sample();
        let disabled_style = Style::new().dim();
        widget = widget.with_disabled_style(disabled_style);
        widget.set_disabled(true);
        assert!(widget.is_disabled());
        assert_eq!(widget.handle_mouse(&left_click(0, 0), area()), MouseResult::Ignored);
        for row in widget.rows() {
            assert_eq!(row.glyph_style, disabled_style);
            assert_eq!(row.label_style, disabled_style);
        }
        widget.set_disabled(false);
        assert_ne!(
            widget.handle_mouse(&left_click(0, 0), area()),
            MouseResult::Ignored
        );
    }

    #[test]
    fn checked_labels_come_back_depth_first() {
        let (mut widget, _root, a, _a1, _a2, b) = sample();
        widget.tree_mut().check(b).unwrap();
        widget.tree_mut().check(a).unwrap();
        assert_eq!(widget.checked_labels(), ["a1", "a2", "b"]);
    }

    #[test]
    fn save_and_restore_round_trip() {
        let (mut widget, root, a, a1, _a2, b) = sample();
        widget.tree_mut().check(a1).unwrap();
        widget.tree_mut().check(b).unwrap();
        widget.tree_mut().set_expanded(a, false).unwrap();

        let saved = widget.save_state();
        assert!(saved.checked_paths.contains("root/a/a1"));
        assert!(saved.checked_paths.contains("root/b"));
        assert!(saved.expanded_paths.contains("root"));
        assert!(!saved.expanded_paths.contains("root/a"));

        // Scramble everything, then restore.
        widget.tree_mut().check(root).unwrap();
        widget.expand_all();
        widget.restore_state(&saved);

        assert_eq!(widget.tree().state(a1), Some(CheckState::Checked));
        assert_eq!(widget.tree().state(a), Some(CheckState::Tristate));
        assert_eq!(widget.tree().state(root), Some(CheckState::Tristate));
        assert!(!widget.tree().is_expanded(a));
        assert!(widget.tree().is_expanded(root));
    }

    #[test]
    fn restore_skips_vanished_paths() {
        let (mut widget, _root, _a, a1, _a2, b) = sample();
        widget.tree_mut().check(a1).unwrap();
        let saved = widget.save_state();
        widget.tree_mut().remove(a1).unwrap();
        widget.restore_state(&saved);
        assert!(widget.checked_leaves().is_empty());
        assert_eq!(widget.tree().state(b), Some(CheckState::Unchecked));
    }

    #[test]
    fn row_width_and_clipping() {
        let mut widget = CheckboxTree::new()
            .with_guides(Guides::Ascii)
            .with_glyphs(CheckGlyphs::Ascii);
        widget.push(None, "hello").unwrap();
        let rows = widget.rows();
        assert_eq!(rows[0].width(), 4 + 5);
        assert_eq!(rows[0].clip_label(3), "hel");
        assert_eq!(rows[0].clip_label(0), "");
        assert_eq!(rows[0].clip_label(99), "hello");
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn build(choices: &[prop::sample::Index]) -> (CheckboxTree, Vec<NodeId>) {
            let mut widget = CheckboxTree::new();
            let mut ids = Vec::with_capacity(choices.len());
            for (i, choice) in choices.iter().enumerate() {
                let parent = if i == 0 {
                    None
                } else {
                    ids.get(choice.index(i + 1)).copied()
                };
                ids.push(widget.push(parent, format!("n{i}")).unwrap());
            }
            (widget, ids)
        }

        fn visible_count(widget: &CheckboxTree) -> usize {
            let tree = widget.tree();
            let mut count = 0;
            let mut stack: Vec<NodeId> = tree.roots().to_vec();
            while let Some(id) = stack.pop() {
                count += 1;
                if tree.is_expanded(id) {
                    stack.extend(tree.children(id));
                }
            }
            count
        }

        proptest! {
            #[test]
            fn rows_match_visible_count_and_states(
                choices in prop::collection::vec(any::<prop::sample::Index>(), 1..30),
                toggles in prop::collection::vec(any::<prop::sample::Index>(), 0..10),
                collapses in prop::collection::vec(any::<prop::sample::Index>(), 0..10),
            ) {
                let (mut widget, ids) = build(&choices);
                for t in &toggles {
                    widget.tree_mut().toggle(ids[t.index(ids.len())]).unwrap();
                }
                for c in &collapses {
                    widget.tree_mut().set_expanded(ids[c.index(ids.len())], false).unwrap();
                }
                let rows = widget.rows();
                prop_assert_eq!(rows.len(), visible_count(&widget));
                for row in &rows {
                    let state = widget.tree().state(row.node).unwrap();
                    prop_assert_eq!(row.glyph, CheckGlyphs::default().for_state(state));
                }
            }
        }
    }
}
