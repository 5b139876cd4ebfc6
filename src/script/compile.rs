//! Building a [`PhoneTree`] from a [`TreeDefinition`]

use crate::callback::Bound;
use crate::tree::{MenuId, MenuOptions, NodeId, PhoneTree, SubmenuOptions, Target};

use super::template::interpolate;
use super::types::{OptionDefinition, TreeDefinition, Variables};
use super::ScriptError;

/// Effects of one node, run in order: `set`, `ask`, `say`, `goto`.
#[derive(Debug, Clone, Default)]
struct Effects {
    set: Vec<(String, String)>,
    ask: Option<(String, String)>,
    say: Option<String>,
    goto: Option<Target>,
}

impl Effects {
    fn is_empty(&self) -> bool {
        self.set.is_empty() && self.ask.is_none() && self.say.is_none() && self.goto.is_none()
    }

    /// Parameter names of the callback these effects need.
    fn parameters(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if !self.set.is_empty() || self.ask.is_some() || self.say.is_some() {
            names.push("state");
        }
        if self.ask.is_some() {
            names.push("ask");
        }
        if self.say.is_some() {
            names.push("tell");
        }
        // End of input while asking ends the session.
        if self.ask.is_some() || self.goto.is_some() {
            names.push("flow");
        }
        names
    }

    fn apply(&self, variables: Option<&mut Variables>, bound: &mut Bound<'_>) {
        if let Some(variables) = variables {
            if !self.apply_to(variables, bound) {
                return;
            }
        }

        if let Some(target) = self.goto {
            if let Some(flow) = bound.flow() {
                flow.redirect(target);
            }
        }
    }

    /// Run `set`, `ask` and `say`. Returns `false` if the session ended.
    fn apply_to(&self, variables: &mut Variables, bound: &mut Bound<'_>) -> bool {
        for (name, value) in &self.set {
            let value = interpolate(value, variables);
            variables.insert(name.clone(), value);
        }

        if let Some((question, into)) = &self.ask {
            let answer = bound
                .ask()
                .and_then(|ask| ask.ask(&interpolate(question, variables)));
            match answer {
                Some(answer) => {
                    variables.insert(into.clone(), answer);
                }
                None => {
                    tracing::debug!(question = %question, "no answer, ending session");
                    if let Some(flow) = bound.flow() {
                        flow.exit();
                    }
                    return false;
                }
            }
        }

        if let Some(message) = &self.say {
            if let Some(tell) = bound.tell() {
                tell.tell(&interpolate(message, variables));
            }
        }
        true
    }
}

/// A node whose callback is attached once every node exists.
struct Pending<'d> {
    node: NodeId,
    path: String,
    option: &'d OptionDefinition,
}

/// Build the tree described by `definition`.
pub fn compile(definition: &TreeDefinition) -> Result<PhoneTree<Variables>, ScriptError> {
    let mut tree = PhoneTree::new(MenuOptions {
        include_exit: definition.include_exit,
        include_exit_on_submenus: definition.include_exit_on_submenus,
    });
    let root = tree.root();

    let mut pending = Vec::new();
    add_options(&mut tree, root, "", &definition.options, &mut pending)?;

    if let Some(greeting) = &definition.say {
        let effects = Effects {
            say: Some(greeting.clone()),
            ..Effects::default()
        };
        attach(&mut tree, root.into(), effects)?;
    }

    for Pending { node, path, option } in pending {
        let effects = effects_of(&tree, &path, option)?;
        if !effects.is_empty() {
            attach(&mut tree, node, effects)?;
        }
    }

    tracing::debug!(nodes = tree.len(), "compiled tree definition");
    Ok(tree)
}

fn add_options<'d>(
    tree: &mut PhoneTree<Variables>,
    parent: MenuId,
    parent_path: &str,
    options: &'d [OptionDefinition],
    pending: &mut Vec<Pending<'d>>,
) -> Result<(), ScriptError> {
    for option in options {
        let label = option.label.trim();
        if label.is_empty() {
            return Err(ScriptError::EmptyLabel {
                path: display_path(parent_path),
            });
        }
        let path = if parent_path.is_empty() {
            label.to_string()
        } else {
            format!("{parent_path}/{label}")
        };

        let folded = label.to_lowercase();
        if tree
            .entries(parent)?
            .any(|(existing, _)| existing.to_lowercase() == folded)
        {
            tracing::warn!(path = %path, "duplicate label; goto paths reach the first one only");
        }

        let node: NodeId = if option.is_menu() {
            let menu = tree.add_submenu_with(
                parent,
                label,
                SubmenuOptions {
                    include_exit: option.include_exit,
                    include_exit_on_submenus: option.include_exit_on_submenus,
                },
            )?;
            add_options(tree, menu, &path, &option.options, pending)?;
            menu.into()
        } else {
            if !option.options.is_empty() {
                return Err(ScriptError::ActionWithOptions { path });
            }
            tree.add_action(parent, label)?.into()
        };

        pending.push(Pending { node, path, option });
    }
    Ok(())
}

fn effects_of(
    tree: &PhoneTree<Variables>,
    path: &str,
    option: &OptionDefinition,
) -> Result<Effects, ScriptError> {
    let ask = match (&option.ask, &option.into) {
        (Some(question), Some(into)) => Some((question.clone(), into.clone())),
        (None, None) => None,
        (Some(_), None) => {
            return Err(ScriptError::AskWithoutInto {
                path: path.to_string(),
            })
        }
        (None, Some(_)) => {
            return Err(ScriptError::IntoWithoutAsk {
                path: path.to_string(),
            })
        }
    };

    let goto = option
        .goto
        .as_deref()
        .map(|goto| resolve_goto(tree, path, goto))
        .transpose()?;

    Ok(Effects {
        set: option
            .set
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect(),
        ask,
        say: option.say.clone(),
        goto,
    })
}

/// `exit`, `root`, or a label path from the root.
fn resolve_goto(tree: &PhoneTree<Variables>, path: &str, goto: &str) -> Result<Target, ScriptError> {
    let trimmed = goto.trim();
    let unknown = || ScriptError::UnknownGoto {
        path: path.to_string(),
        goto: goto.to_string(),
    };
    if trimmed.split('/').all(|segment| segment.trim().is_empty()) {
        return Err(unknown());
    }
    if trimmed.eq_ignore_ascii_case("exit") {
        return Ok(Target::Terminal);
    }
    if trimmed.eq_ignore_ascii_case("root") {
        return Ok(tree.root().into());
    }

    tree.find(trimmed).map(Target::Node).ok_or_else(unknown)
}

fn attach(
    tree: &mut PhoneTree<Variables>,
    node: NodeId,
    effects: Effects,
) -> Result<(), ScriptError> {
    let parameters = effects.parameters();
    tree.set_declared_callback(
        node,
        parameters,
        move |variables: Option<&mut Variables>, mut bound: Bound<'_>| {
            effects.apply(variables, &mut bound)
        },
    )?;
    Ok(())
}

fn display_path(path: &str) -> String {
    if path.is_empty() {
        "<root>".to_string()
    } else {
        path.to_string()
    }
}
