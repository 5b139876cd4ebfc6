//! Scenario: Hotline defined in a TOML file
//!
//! Journey: A caller navigates a tree loaded from a definition file, leaves
//! their name, hears it read back, and is sent to the support menu by a
//! `goto` effect.
//!
//! Success Criteria:
//! - Definition effects run in order: set, ask, say, goto
//! - Variables from the file and from answers reach the final state

use std::path::Path;

use phonetree::script::parse_script;
use phonetree::Engine;

use crate::common::*;

const HOTLINE: &str = r#"
include_exit_on_submenus = true
say = "Welcome, {name}."

[variables]
name = "caller"
balance = "120.00"

[[option]]
label = "Balance"
say = "Your balance is {balance}."

[[option]]
label = "Callback"
set = { queue = "callbacks" }
ask = "What is your name?"
into = "name"
say = "Thanks {name}, you are in the {queue} queue."
goto = "Support"

[[option]]
label = "Support"
  [[option.option]]
  label = "Opening hours"
  say = "We are open 9 to 5."

  [[option.option]]
  label = "Hang up"
  goto = "exit"
"#;

/// SCENARIO: answer a question, get redirected, then hang up from a submenu
#[test]
fn scenario_callback_request_then_hang_up() {
    let mut script = parse_script(HOTLINE, Path::new("hotline.toml")).unwrap();
    assert!(script.warnings.is_empty());

    let mut replies = Replies::new(&["callback", "Ada", "hang up"]);
    let mut told = Messages::default();
    let variables = script
        .tree
        .run(script.variables, &mut replies, &mut told)
        .unwrap();

    assert_eq!(variables.get("name").map(String::as_str), Some("Ada"));
    assert_eq!(variables.get("queue").map(String::as_str), Some("callbacks"));
    assert_eq!(
        told.0,
        vec![
            "Welcome, caller.",
            "Thanks Ada, you are in the callbacks queue.",
        ]
    );
    assert_eq!(
        replies.prompts,
        vec![
            menu_prompt(&["Balance", "Callback", "Support", "Exit"]),
            "What is your name?".to_string(),
            menu_prompt(&["Opening hours", "Hang up", "Return to previous menu", "Exit"]),
        ]
    );
}

/// SCENARIO: the greeting is repeated each time the root is entered
#[test]
fn scenario_balance_is_read_from_variables() {
    let mut script = parse_script(HOTLINE, Path::new("hotline.toml")).unwrap();
    let mut replies = Replies::new(&["balance", "exit"]);
    let mut told = Messages::default();

    script
        .tree
        .run(script.variables, &mut replies, &mut told)
        .unwrap();

    assert_eq!(
        told.0,
        vec![
            "Welcome, caller.",
            "Your balance is 120.00.",
            "Welcome, caller.",
        ]
    );
}

/// SCENARIO: end of input while a scripted question is open ends the call
#[test]
fn scenario_no_answer_ends_session() {
    let mut script = parse_script(HOTLINE, Path::new("hotline.toml")).unwrap();
    let mut replies = Replies::new(&["callback"]);
    let mut told = Messages::default();

    let variables = script
        .tree
        .run(script.variables, &mut replies, &mut told)
        .unwrap();

    // The set effect ran, the say and goto effects did not.
    assert_eq!(variables.get("queue").map(String::as_str), Some("callbacks"));
    assert_eq!(variables.get("name").map(String::as_str), Some("caller"));
    assert_eq!(told.0, vec!["Welcome, caller."]);
    assert_eq!(replies.prompts.len(), 2);
}

/// SCENARIO: configured prompts replace the built-in wording
#[test]
fn scenario_custom_prompts_from_config() {
    let config: phonetree::Config = toml::from_str(
        r#"
[prompts]
select = "Choose one:"
invalid = "Pardon?"
back = "Back"
exit = "Goodbye"
"#,
    )
    .unwrap();

    let mut script = parse_script(HOTLINE, Path::new("hotline.toml")).unwrap();
    let mut replies = Replies::new(&["mumble", "support", "back", "goodbye"]);
    let mut told = Messages::default();

    Engine::new(&mut script.tree)
        .with_config(config)
        .run(script.variables, &mut replies, &mut told)
        .unwrap();

    assert_eq!(
        replies.prompts,
        vec![
            "Choose one:\n1. Balance\n2. Callback\n3. Support\n4. Goodbye".to_string(),
            "Pardon?".to_string(),
            "Choose one:\n1. Opening hours\n2. Hang up\n3. Back\n4. Goodbye".to_string(),
            "Choose one:\n1. Balance\n2. Callback\n3. Support\n4. Goodbye".to_string(),
        ]
    );
    assert_eq!(replies.remaining(), 0);
}
