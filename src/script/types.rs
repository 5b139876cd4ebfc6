//! Tree definition file format

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Conversation state of scripted trees: named string variables.
pub type Variables = BTreeMap<String, String>;

/// Keys the definition format knows, for "did you mean" hints.
pub(crate) const DEFINITION_KEYS: &[&str] = &[
    "include_exit",
    "include_exit_on_submenus",
    "variables",
    "option",
    "label",
    "menu",
    "say",
    "ask",
    "into",
    "set",
    "goto",
];

/// A whole tree: root flags, initial variables and the root's options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeDefinition {
    #[serde(default)]
    pub include_exit: bool,

    #[serde(default)]
    pub include_exit_on_submenus: bool,

    /// Initial state of the session
    #[serde(default)]
    pub variables: Variables,

    /// Said every time the root menu is entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub say: Option<String>,

    #[serde(default, rename = "option", skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDefinition>,
}

/// One entry of a menu: a submenu or an action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionDefinition {
    pub label: String,

    /// Force a menu even without child options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub menu: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_exit: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_exit_on_submenus: Option<bool>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub set: Variables,

    /// Question whose answer is stored in `into`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ask: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub into: Option<String>,

    /// Message with `{variable}` interpolation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub say: Option<String>,

    /// `exit`, `root`, or a `/`-separated label path from the root
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goto: Option<String>,

    #[serde(default, rename = "option", skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDefinition>,
}

impl OptionDefinition {
    pub fn is_menu(&self) -> bool {
        self.menu.unwrap_or(!self.options.is_empty())
    }

    /// Whether any effect needs a callback.
    pub fn has_effects(&self) -> bool {
        !self.set.is_empty() || self.ask.is_some() || self.say.is_some() || self.goto.is_some()
    }
}
