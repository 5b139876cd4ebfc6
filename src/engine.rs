//! Traversal engine
//!
//! Drives a [`PhoneTree`] from its root until the session ends:
//! - a menu runs its callback, then prompts until the input resolves to one of
//!   its effective options;
//! - an action runs its callback and returns to its parent.
//!
//! A callback may redirect either kind of node anywhere in the tree or to the
//! end of the session. A redirecting menu callback skips the prompt.
//!
//! ## Usage
//!
//! ```ignore
//! let mut engine = Engine::new(&mut tree).with_config(config);
//! let state = engine.run(state, &mut ask, &mut tell)?;
//! ```
//!
//! There is no step limit and no cap on re-prompts: a tree whose menus can
//! neither exit nor return keeps asking for as long as input keeps coming.

use crate::config::Config;
use crate::error::{PhoneTreeError, PhoneTreeResult};
use crate::io::{Ask, Tell};
use crate::resolve::resolve;
use crate::tree::{ActionId, MenuId, MenuOption, NodeId, NodeKind, PhoneTree, Target};

/// Result of one transition: where to go and the state to carry there.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition<S> {
    pub next: Target,
    pub state: S,
}

impl<S> Transition<S> {
    fn new(next: Target, state: S) -> Self {
        Self { next, state }
    }
}

/// Runs a phone tree against an `ask`/`tell` pair.
pub struct Engine<'a, S> {
    tree: &'a mut PhoneTree<S>,
    config: Config,
}

impl<'a, S> Engine<'a, S> {
    /// Engine with default prompts and threshold.
    pub fn new(tree: &'a mut PhoneTree<S>) -> Self {
        Self {
            tree,
            config: Config::default(),
        }
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run from the root until the session ends; returns the final state.
    pub fn run(&mut self, state: S, ask: &mut dyn Ask, tell: &mut dyn Tell) -> PhoneTreeResult<S> {
        let root = self.tree.root();
        self.run_from(root, state, ask, tell)
    }

    /// Run from `start` until the session ends.
    pub fn run_from(
        &mut self,
        start: impl Into<Target>,
        state: S,
        ask: &mut dyn Ask,
        tell: &mut dyn Tell,
    ) -> PhoneTreeResult<S> {
        let mut current = start.into();
        let mut state = state;
        let mut steps = 0usize;

        while let Target::Node(node) = current {
            let transition = self.step(node, state, ask, tell)?;
            current = transition.next;
            state = transition.state;
            steps += 1;
        }

        tracing::debug!(steps, "session ended");
        Ok(state)
    }

    /// Apply the transition of whichever kind of node `node` is.
    pub fn step(
        &mut self,
        node: NodeId,
        state: S,
        ask: &mut dyn Ask,
        tell: &mut dyn Tell,
    ) -> PhoneTreeResult<Transition<S>> {
        match self.tree.kind(node) {
            Some(NodeKind::Menu) => self.step_menu(MenuId(node), state, ask, tell),
            Some(NodeKind::Action) => self.step_action(ActionId(node), state, ask, tell),
            None => Err(PhoneTreeError::UnknownNode {
                node,
                expected: "node",
            }),
        }
    }

    /// Menu transition: callback, then prompt until the input resolves.
    ///
    /// End of input ends the session. Input that resolves to nothing replaces
    /// the prompt with the `invalid` line and asks again; the state is left
    /// alone.
    pub fn step_menu(
        &mut self,
        menu: MenuId,
        state: S,
        ask: &mut dyn Ask,
        tell: &mut dyn Tell,
    ) -> PhoneTreeResult<Transition<S>> {
        tracing::debug!(node = %NodeId::from(menu), "entering menu");
        let mut state = state;

        if let Some(callback) = self.tree.callback_mut(menu.into())? {
            let outcome = callback.invoke(state, ask, tell, menu.into());
            state = outcome.state;
            if let Some(redirect) = outcome.redirect {
                tracing::debug!(node = %NodeId::from(menu), to = %redirect, "menu callback redirected");
                return Ok(Transition::new(redirect, state));
            }
        }

        let options = self.tree.effective_options_with(menu, &self.config.prompts)?;
        let mut prompt = render_menu(&self.config.prompts.select, &options);

        loop {
            let Some(answer) = ask.ask(&prompt) else {
                tracing::debug!(node = %NodeId::from(menu), "input ended at menu");
                return Ok(Transition::new(Target::Terminal, state));
            };

            match resolve(&options, &answer, self.config.matching.threshold) {
                Some(target) => {
                    tracing::debug!(answer = %answer, to = %target, "option selected");
                    return Ok(Transition::new(target, state));
                }
                None => {
                    tracing::debug!(answer = %answer, "no option matched");
                    prompt.clone_from(&self.config.prompts.invalid);
                }
            }
        }
    }

    /// Action transition: callback, then back to the parent unless redirected.
    pub fn step_action(
        &mut self,
        action: ActionId,
        state: S,
        ask: &mut dyn Ask,
        tell: &mut dyn Tell,
    ) -> PhoneTreeResult<Transition<S>> {
        tracing::debug!(node = %NodeId::from(action), "running action");
        let parent = self
            .tree
            .parent(action)?
            .map_or(Target::Terminal, Target::from);

        let Some(callback) = self.tree.callback_mut(action.into())? else {
            return Ok(Transition::new(parent, state));
        };

        let outcome = callback.invoke(state, ask, tell, parent);
        if let Some(redirect) = outcome.redirect {
            tracing::debug!(node = %NodeId::from(action), to = %redirect, "action callback redirected");
        }
        Ok(Transition::new(
            outcome.redirect.unwrap_or(parent),
            outcome.state,
        ))
    }
}

impl<S> PhoneTree<S> {
    /// Run this tree from its root with default configuration.
    pub fn run(&mut self, state: S, ask: &mut dyn Ask, tell: &mut dyn Tell) -> PhoneTreeResult<S> {
        Engine::new(self).run(state, ask, tell)
    }
}

/// The prompt line followed by the options numbered from 1.
pub fn render_menu(select: &str, options: &[MenuOption]) -> String {
    let mut rendered = String::from(select);
    for (i, option) in options.iter().enumerate() {
        rendered.push('\n');
        rendered.push_str(&format!("{}. {}", i + 1, option.label));
    }
    rendered
}
