//! Scenario: Caller picks an action and then leaves
//!
//! Journey: A caller reaches the main menu, picks "Hang up" (an action with no
//! callback), lands back on the main menu and then ends the session.
//!
//! Success Criteria:
//! - An action without callback returns to its parent
//! - The session ends exactly when input ends or Exit is chosen

use phonetree::PhoneTree;

use crate::common::*;

fn main_menu() -> PhoneTree<()> {
    let mut tree = PhoneTree::default();
    let root = tree.root();
    tree.add_action(root, "Hang up").unwrap();
    tree
}

/// SCENARIO: the action returns to the root, which ends on end of input
#[test]
fn scenario_hang_up_then_end_of_input() {
    let mut tree = main_menu();
    let mut replies = Replies::new(&["hangup"]);
    let mut told = Messages::default();

    tree.run((), &mut replies, &mut told).unwrap();

    let prompt = menu_prompt(&["Hang up", "Exit"]);
    assert_eq!(replies.prompts, vec![prompt.clone(), prompt]);
    assert!(told.0.is_empty());
}

/// SCENARIO: the action returns to the root, where Exit is chosen by number
#[test]
fn scenario_hang_up_then_exit_by_number() {
    let mut tree = main_menu();
    let mut replies = Replies::new(&["Hang up", "2", "never asked"]);

    tree.run((), &mut replies, &mut Messages::default()).unwrap();

    assert_eq!(replies.prompts.len(), 2);
    assert_eq!(replies.remaining(), 1);
}

/// SCENARIO: garbage input reprompts with the error line until something matches
#[test]
fn scenario_reprompts_until_valid_choice() {
    let mut tree: PhoneTree<u32> = PhoneTree::default();
    let root = tree.root();
    tree.add_action(root, "Billing").unwrap();

    let mut replies = Replies::new(&["zzzz", "qqqq", "exit"]);
    let state = tree.run(5, &mut replies, &mut Messages::default()).unwrap();

    assert_eq!(state, 5);
    assert_eq!(
        replies.prompts,
        vec![
            menu_prompt(&["Billing", "Exit"]),
            "Invalid option, please try again.".to_string(),
            "Invalid option, please try again.".to_string(),
        ]
    );
}
