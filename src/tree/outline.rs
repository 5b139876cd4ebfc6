//! Depth-first listing of a tree for display.

use crate::config::Prompts;
use crate::error::PhoneTreeResult;

use super::{MenuId, Node, NodeId, NodeKind, PhoneTree, Target};

/// One authored entry in depth-first order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    /// 0 for entries of the root menu
    pub depth: usize,
    /// 1-based number shown in the parent menu
    pub number: usize,
    pub label: String,
    pub node: NodeId,
    pub kind: NodeKind,
    pub has_callback: bool,
}

impl<S> PhoneTree<S> {
    /// Every authored entry, parents before children, in menu order.
    pub fn outline(&self) -> Vec<OutlineEntry> {
        let mut result = Vec::new();
        self.outline_from(NodeId::ROOT, 0, &mut result);
        result
    }

    fn outline_from(&self, id: NodeId, depth: usize, result: &mut Vec<OutlineEntry>) {
        let Some(Node::Menu(menu)) = self.nodes.get(id.index()) else {
            return;
        };

        for (i, (label, child)) in menu.entries.iter().enumerate() {
            let (kind, has_callback) = match &self.nodes[child.index()] {
                Node::Menu(m) => (NodeKind::Menu, m.callback.is_some()),
                Node::Action(a) => (NodeKind::Action, a.callback.is_some()),
            };
            result.push(OutlineEntry {
                depth,
                number: i + 1,
                label: label.clone(),
                node: *child,
                kind,
                has_callback,
            });
            if kind == NodeKind::Menu {
                self.outline_from(*child, depth + 1, result);
            }
        }
    }

    /// Indented listing numbered the way each menu presents its options.
    ///
    /// Submenus end in `/`, nodes with a callback are marked `*`, and the
    /// synthesized return and exit entries are bracketed.
    pub fn render_outline(&self, prompts: &Prompts) -> PhoneTreeResult<String> {
        let mut out = String::new();
        self.render_menu_outline(self.root(), 0, prompts, &mut out)?;
        Ok(out)
    }

    fn render_menu_outline(
        &self,
        menu: MenuId,
        depth: usize,
        prompts: &Prompts,
        out: &mut String,
    ) -> PhoneTreeResult<()> {
        let authored = self.menu(menu)?.entries.len();
        let indent = "   ".repeat(depth);

        for (i, option) in self.effective_options_with(menu, prompts)?.iter().enumerate() {
            let number = i + 1;
            match option.target {
                Target::Node(id) if i < authored => {
                    let is_menu = self.kind(id) == Some(NodeKind::Menu);
                    let slash = if is_menu { "/" } else { "" };
                    let star = if self.has_callback(id)? { " *" } else { "" };
                    out.push_str(&format!("{indent}{number}. {}{slash}{star}\n", option.label));
                    if is_menu {
                        self.render_menu_outline(MenuId(id), depth + 1, prompts, out)?;
                    }
                }
                _ => out.push_str(&format!("{indent}{number}. [{}]\n", option.label)),
            }
        }
        Ok(())
    }
}
