//! Handles, targets and node storage.

use std::fmt;

use crate::callback::Callback;

use super::MenuOptions;

/// Stable handle to any node of a [`PhoneTree`](super::PhoneTree).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);

    pub(crate) fn from_index(index: usize) -> Self {
        Self(index)
    }

    /// Position in the arena, in creation order.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Handle to a menu node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuId(pub(crate) NodeId);

/// Handle to an action node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(pub(crate) NodeId);

impl From<MenuId> for NodeId {
    fn from(id: MenuId) -> Self {
        id.0
    }
}

impl From<ActionId> for NodeId {
    fn from(id: ActionId) -> Self {
        id.0
    }
}

/// Where the engine goes next: a node, or the end of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    Node(NodeId),
    Terminal,
}

impl Target {
    pub fn node(self) -> Option<NodeId> {
        match self {
            Target::Node(id) => Some(id),
            Target::Terminal => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == Target::Terminal
    }
}

impl From<NodeId> for Target {
    fn from(id: NodeId) -> Self {
        Target::Node(id)
    }
}

impl From<MenuId> for Target {
    fn from(id: MenuId) -> Self {
        Target::Node(id.0)
    }
}

impl From<ActionId> for Target {
    fn from(id: ActionId) -> Self {
        Target::Node(id.0)
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Node(id) => id.fmt(f),
            Target::Terminal => f.write_str("terminal"),
        }
    }
}

/// One selectable line of a menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuOption {
    pub label: String,
    pub target: Target,
}

impl MenuOption {
    pub fn new(label: impl Into<String>, target: Target) -> Self {
        Self {
            label: label.into(),
            target,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Menu,
    Action,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Menu => f.write_str("menu"),
            NodeKind::Action => f.write_str("action"),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Menu<S> {
    pub(crate) entries: Vec<(String, NodeId)>,
    pub(crate) parent: Option<MenuId>,
    pub(crate) include_exit: bool,
    pub(crate) include_exit_on_submenus: bool,
    pub(crate) callback: Option<Callback<S>>,
}

impl<S> Menu<S> {
    pub(crate) fn new(parent: Option<MenuId>, options: MenuOptions) -> Self {
        Self {
            entries: Vec::new(),
            parent,
            include_exit: options.include_exit,
            include_exit_on_submenus: options.include_exit_on_submenus,
            callback: None,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Action<S> {
    pub(crate) parent: MenuId,
    pub(crate) callback: Option<Callback<S>>,
}

impl<S> Action<S> {
    pub(crate) fn new(parent: MenuId) -> Self {
        Self {
            parent,
            callback: None,
        }
    }
}

#[derive(Debug)]
pub(crate) enum Node<S> {
    Menu(Menu<S>),
    Action(Action<S>),
}
