//! Context actions offered on an edge.
//!
//! The host UI shows a [`ContextMenu`] on secondary-button release over an
//! edge. Editing actions are gated on the session not running; Configure is
//! always available and hands the edge to a [`LinkConfigurator`].

use serde::{Deserialize, Serialize};

use crate::edge::InteractiveEdge;

/// Actions an edge exposes to the host UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeAction {
    Configure,
    Delete,
    Split,
    Merge,
}

impl EdgeAction {
    /// All actions in menu order
    pub const ALL: [EdgeAction; 4] = [
        EdgeAction::Configure,
        EdgeAction::Delete,
        EdgeAction::Split,
        EdgeAction::Merge,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            EdgeAction::Configure => "Configure",
            EdgeAction::Delete => "Delete",
            EdgeAction::Split => "Split",
            EdgeAction::Merge => "Merge",
        }
    }

    /// Whether the action edits topology and is therefore locked while running
    pub fn edits_topology(&self) -> bool {
        !matches!(self, EdgeAction::Configure)
    }

    pub fn is_enabled(&self, runtime: bool) -> bool {
        !(runtime && self.edits_topology())
    }
}

/// One menu row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuEntry {
    pub action: EdgeAction,
    pub label: &'static str,
    pub enabled: bool,
}

/// Context menu model for an edge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextMenu {
    entries: Vec<MenuEntry>,
}

impl ContextMenu {
    /// Menu for an edge, with editing actions disabled while `runtime`
    pub fn for_edge(runtime: bool) -> Self {
        let entries = EdgeAction::ALL
            .iter()
            .map(|action| MenuEntry {
                action: *action,
                label: action.label(),
                enabled: action.is_enabled(runtime),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    pub fn is_enabled(&self, action: EdgeAction) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.action == action && entry.enabled)
    }
}

/// External link-configuration dialog.
///
/// It receives the edge as its mutation target and may change interfaces,
/// link options or the asymmetric parameters before returning.
pub trait LinkConfigurator {
    fn configure(&mut self, edge: &mut InteractiveEdge);
}

/// Result of dispatching a context action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Configured,
    Deleted,
    /// The action is offered but the host has no handler for it
    Unhandled(EdgeAction),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_in_edit_mode() {
        let menu = ContextMenu::for_edge(false);
        let labels: Vec<_> = menu.entries().iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["Configure", "Delete", "Split", "Merge"]);
        assert!(menu.entries().iter().all(|e| e.enabled));
    }

    #[test]
    fn test_menu_while_running() {
        let menu = ContextMenu::for_edge(true);
        assert!(menu.is_enabled(EdgeAction::Configure));
        assert!(!menu.is_enabled(EdgeAction::Delete));
        assert!(!menu.is_enabled(EdgeAction::Split));
        assert!(!menu.is_enabled(EdgeAction::Merge));
    }
}
