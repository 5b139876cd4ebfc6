//! phonetree - menu-driven conversation trees
//!
//! A phone tree is a hierarchy of menus and actions navigated by free-text
//! replies. Menus present numbered options; replies are matched against the
//! option labels and numbers by string similarity, so "billng" or "2." still
//! select the right entry. Callbacks of several shapes can be attached to any
//! node to read and update the caller's state, ask follow-up questions,
//! display messages, or redirect the flow.
//!
//! Trees are built in code with [`PhoneTree`] or loaded from a TOML
//! definition with [`load_script`].

pub mod callback;
pub mod config;
pub mod engine;
pub mod error;
pub mod io;
pub mod resolve;
pub mod script;
pub mod similarity;
pub mod tree;

// Re-exports for convenience
pub use callback::{Bound, Callback, CallbackError, Flow, IntoCallback, Io, Outcome, Signature};
pub use config::{Config, ConfigWarning};
pub use engine::{render_menu, Engine, Transition};
pub use error::{PhoneTreeError, PhoneTreeResult};
pub use io::{Ask, LineAsk, LineTell, Tell};
pub use resolve::resolve;
pub use script::{load_script, Script, ScriptError, Variables};
pub use similarity::similarity;
pub use tree::{
    ActionId, MenuId, MenuOption, MenuOptions, NodeId, NodeKind, PhoneTree, SubmenuOptions, Target,
};
