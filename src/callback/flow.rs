//! Flow control handle passed to callbacks.

use crate::tree::Target;

/// Single-slot redirect target for one transition.
///
/// Starts at the node's natural successor: an action's parent, or the menu
/// itself. A callback overwrites it to jump anywhere in the tree or to end
/// the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flow {
    default: Target,
    next: Target,
}

impl Flow {
    pub fn new(default: Target) -> Self {
        Self {
            default,
            next: default,
        }
    }

    /// Where the engine goes after the callback returns.
    pub fn next(&self) -> Target {
        self.next
    }

    /// Send the engine to `target` instead of the natural successor.
    pub fn redirect(&mut self, target: impl Into<Target>) {
        self.next = target.into();
    }

    /// End the whole session after this callback.
    pub fn exit(&mut self) {
        self.next = Target::Terminal;
    }

    /// Whether the slot now differs from its default.
    pub fn is_redirected(&self) -> bool {
        self.next != self.default
    }

    /// The redirect, if any.
    pub fn redirect_target(&self) -> Option<Target> {
        self.is_redirected().then_some(self.next)
    }
}
