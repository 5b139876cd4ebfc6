//! Phone tree node model.
//!
//! Menus and actions live in one owning arena and refer to each other by
//! index. A parent owns its children through its entry list; a child only
//! keeps its parent's index for navigation, so there are no ownership cycles.
//!
//! # Module Structure
//!
//! - `node` - handles, targets and node storage
//! - `outline` - depth-first listing of the tree for display

mod node;
mod outline;

pub use node::{ActionId, MenuId, MenuOption, NodeId, NodeKind, Target};
pub use outline::OutlineEntry;

pub(crate) use node::{Action, Menu, Node};

use crate::callback::{Bound, Callback, IntoCallback};
use crate::config::Prompts;
use crate::error::{PhoneTreeError, PhoneTreeResult};

/// Exit behaviour of the root menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuOptions {
    /// Offer "Exit" in this menu (the root always offers it)
    pub include_exit: bool,
    /// Default for `include_exit` and `include_exit_on_submenus` of submenus
    pub include_exit_on_submenus: bool,
}

/// Per-submenu overrides; `None` inherits the parent's
/// `include_exit_on_submenus`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubmenuOptions {
    pub include_exit: Option<bool>,
    pub include_exit_on_submenus: Option<bool>,
}

/// A tree of menus and actions with callbacks over state `S`.
#[derive(Debug)]
pub struct PhoneTree<S> {
    nodes: Vec<Node<S>>,
}

impl<S> PhoneTree<S> {
    /// Create a tree containing only its root menu.
    pub fn new(options: MenuOptions) -> Self {
        Self {
            nodes: vec![Node::Menu(Menu::new(None, options))],
        }
    }

    /// The root menu.
    pub fn root(&self) -> MenuId {
        MenuId(NodeId::ROOT)
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a tree has at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Add a submenu under `parent`, inheriting its exit defaults.
    pub fn add_submenu(&mut self, parent: MenuId, label: impl Into<String>) -> PhoneTreeResult<MenuId> {
        self.add_submenu_with(parent, label, SubmenuOptions::default())
    }

    /// Add a submenu under `parent` with explicit exit flags.
    pub fn add_submenu_with(
        &mut self,
        parent: MenuId,
        label: impl Into<String>,
        overrides: SubmenuOptions,
    ) -> PhoneTreeResult<MenuId> {
        let inherited = self.menu(parent)?.include_exit_on_submenus;
        let options = MenuOptions {
            include_exit: overrides.include_exit.unwrap_or(inherited),
            include_exit_on_submenus: overrides.include_exit_on_submenus.unwrap_or(inherited),
        };

        let id = self.push(Node::Menu(Menu::new(Some(parent), options)));
        self.menu_mut(parent)?.entries.push((label.into(), id));
        Ok(MenuId(id))
    }

    /// Add an action under `parent`.
    pub fn add_action(&mut self, parent: MenuId, label: impl Into<String>) -> PhoneTreeResult<ActionId> {
        self.menu(parent)?;
        let id = self.push(Node::Action(Action::new(parent)));
        self.menu_mut(parent)?.entries.push((label.into(), id));
        Ok(ActionId(id))
    }

    /// Attach a callback of any recognized shape, replacing an existing one.
    pub fn set_callback<M>(
        &mut self,
        node: impl Into<NodeId>,
        callback: impl IntoCallback<S, M>,
    ) -> PhoneTreeResult<()> {
        *self.callback_slot(node.into())? = Some(callback.into_callback());
        Ok(())
    }

    /// Attach a callback described by parameter names.
    ///
    /// Fails with [`CallbackError`] if the names do not form a recognized
    /// shape; the node keeps its previous callback in that case.
    pub fn set_declared_callback<I, N, F>(
        &mut self,
        node: impl Into<NodeId>,
        names: I,
        body: F,
    ) -> PhoneTreeResult<()>
    where
        S: 'static,
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
        F: for<'s, 'a> FnMut(Option<&'s mut S>, Bound<'a>) + 'static,
    {
        let node = node.into();
        self.node(node)?;
        let callback = Callback::declared(names, body).map_err(PhoneTreeError::from)?;
        *self.callback_slot(node)? = Some(callback);
        Ok(())
    }

    /// Remove the callback from `node`.
    pub fn clear_callback(&mut self, node: impl Into<NodeId>) -> PhoneTreeResult<()> {
        *self.callback_slot(node.into())? = None;
        Ok(())
    }

    /// Whether `node` has a callback attached.
    pub fn has_callback(&self, node: impl Into<NodeId>) -> PhoneTreeResult<bool> {
        Ok(match self.node(node.into())? {
            Node::Menu(menu) => menu.callback.is_some(),
            Node::Action(action) => action.callback.is_some(),
        })
    }

    /// Kind of `node`, or `None` if it is not in this tree.
    pub fn kind(&self, node: impl Into<NodeId>) -> Option<NodeKind> {
        self.nodes.get(node.into().index()).map(|node| match node {
            Node::Menu(_) => NodeKind::Menu,
            Node::Action(_) => NodeKind::Action,
        })
    }

    /// Parent of `node`: `None` only for the root.
    pub fn parent(&self, node: impl Into<NodeId>) -> PhoneTreeResult<Option<MenuId>> {
        Ok(match self.node(node.into())? {
            Node::Menu(menu) => menu.parent,
            Node::Action(action) => Some(action.parent),
        })
    }

    /// Exit flags of `menu`.
    pub fn menu_options(&self, menu: MenuId) -> PhoneTreeResult<MenuOptions> {
        let menu = self.menu(menu)?;
        Ok(MenuOptions {
            include_exit: menu.include_exit,
            include_exit_on_submenus: menu.include_exit_on_submenus,
        })
    }

    /// Authored entries of `menu`, in insertion order.
    pub fn entries(&self, menu: MenuId) -> PhoneTreeResult<impl Iterator<Item = (&str, NodeId)> + '_> {
        Ok(self
            .menu(menu)?
            .entries
            .iter()
            .map(|(label, id)| (label.as_str(), *id)))
    }

    /// Effective options of `menu` with the default labels.
    pub fn effective_options(&self, menu: MenuId) -> PhoneTreeResult<Vec<MenuOption>> {
        self.effective_options_with(menu, &Prompts::default())
    }

    /// Authored entries plus the synthesized "return" and "exit" entries.
    ///
    /// "Return to previous menu" is appended when the menu has a parent.
    /// "Exit" is appended at the root, and elsewhere only when the menu's
    /// `include_exit` flag is set.
    pub fn effective_options_with(
        &self,
        menu: MenuId,
        prompts: &Prompts,
    ) -> PhoneTreeResult<Vec<MenuOption>> {
        let menu = self.menu(menu)?;
        let mut options: Vec<MenuOption> = menu
            .entries
            .iter()
            .map(|(label, id)| MenuOption::new(label.clone(), Target::Node(*id)))
            .collect();

        if let Some(parent) = menu.parent {
            options.push(MenuOption::new(prompts.back.clone(), parent.into()));
        }
        if menu.parent.is_none() || menu.include_exit {
            options.push(MenuOption::new(prompts.exit.clone(), Target::Terminal));
        }
        Ok(options)
    }

    /// Look up a menu entry by a `/`-separated label path from the root.
    pub fn find(&self, path: &str) -> Option<NodeId> {
        let mut current = NodeId::ROOT;
        for segment in path.split('/').map(str::trim).filter(|s| !s.is_empty()) {
            let segment = segment.to_lowercase();
            let Node::Menu(menu) = self.nodes.get(current.index())? else {
                return None;
            };
            current = menu
                .entries
                .iter()
                .find(|(label, _)| label.to_lowercase() == segment)
                .map(|(_, id)| *id)?;
        }
        Some(current)
    }

    pub(crate) fn node(&self, id: NodeId) -> PhoneTreeResult<&Node<S>> {
        self.nodes.get(id.index()).ok_or(PhoneTreeError::UnknownNode {
            node: id,
            expected: "node",
        })
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> PhoneTreeResult<&mut Node<S>> {
        self.nodes.get_mut(id.index()).ok_or(PhoneTreeError::UnknownNode {
            node: id,
            expected: "node",
        })
    }

    pub(crate) fn menu(&self, id: MenuId) -> PhoneTreeResult<&Menu<S>> {
        match self.nodes.get(id.0.index()) {
            Some(Node::Menu(menu)) => Ok(menu),
            _ => Err(PhoneTreeError::UnknownNode {
                node: id.0,
                expected: "menu",
            }),
        }
    }

    fn menu_mut(&mut self, id: MenuId) -> PhoneTreeResult<&mut Menu<S>> {
        match self.nodes.get_mut(id.0.index()) {
            Some(Node::Menu(menu)) => Ok(menu),
            _ => Err(PhoneTreeError::UnknownNode {
                node: id.0,
                expected: "menu",
            }),
        }
    }

    pub(crate) fn callback_mut(&mut self, id: NodeId) -> PhoneTreeResult<Option<&mut Callback<S>>> {
        Ok(self.callback_slot(id)?.as_mut())
    }

    fn callback_slot(&mut self, id: NodeId) -> PhoneTreeResult<&mut Option<Callback<S>>> {
        Ok(match self.node_mut(id)? {
            Node::Menu(menu) => &mut menu.callback,
            Node::Action(action) => &mut action.callback,
        })
    }

    fn push(&mut self, node: Node<S>) -> NodeId {
        self.nodes.push(node);
        NodeId::from_index(self.nodes.len() - 1)
    }
}

impl<S> Default for PhoneTree<S> {
    fn default() -> Self {
        Self::new(MenuOptions::default())
    }
}
