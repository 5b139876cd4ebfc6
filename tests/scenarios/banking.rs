//! Scenario: Bank hotline built in code
//!
//! Journey: A caller checks their balance, makes a deposit, then reports a
//! lost card, which ends the call.
//!
//! Steps:
//! 1. Root greets the caller every time it is entered
//! 2. "Balance" tells the current balance
//! 3. "Deposit" asks for an amount and updates the account
//! 4. "Cards" submenu offers "Report lost card", which hangs up
//!
//! Success Criteria:
//! - State flows through every callback shape
//! - Redirects override the natural successor

use phonetree::{Ask, Flow, MenuId, PhoneTree, SubmenuOptions, Target, Tell};

use crate::common::*;

#[derive(Debug, Clone, Default, PartialEq)]
struct Account {
    balance: i64,
    history: Vec<String>,
}

struct Hotline {
    tree: PhoneTree<Account>,
    root: MenuId,
    cards: MenuId,
}

fn hotline() -> Hotline {
    let mut tree: PhoneTree<Account> = PhoneTree::default();
    let root = tree.root();

    tree.set_callback(root, |tell: &mut dyn Tell| tell.tell("Welcome to Example Bank."))
        .unwrap();

    let balance = tree.add_action(root, "Balance").unwrap();
    tree.set_callback(balance, |account: Account, tell: &mut dyn Tell| {
        tell.tell(&format!("Your balance is {}.", account.balance));
        account
    })
    .unwrap();

    let deposit = tree.add_action(root, "Deposit").unwrap();
    tree.set_callback(
        deposit,
        |mut account: Account, ask: &mut dyn Ask, tell: &mut dyn Tell| {
            let reply = ask.ask("How much?").unwrap_or_default();
            match reply.trim().parse::<i64>() {
                Ok(amount) => {
                    account.balance += amount;
                    account.history.push(format!("deposit {amount}"));
                    tell.tell(&format!("Deposited {amount}."));
                }
                Err(_) => tell.tell("That is not an amount."),
            }
            account
        },
    )
    .unwrap();

    let cards = tree
        .add_submenu_with(
            root,
            "Cards",
            SubmenuOptions {
                include_exit: Some(true),
                ..SubmenuOptions::default()
            },
        )
        .unwrap();

    let lost = tree.add_action(cards, "Report lost card").unwrap();
    tree.set_callback(
        lost,
        |mut account: Account, tell: &mut dyn Tell, flow: &mut Flow| {
            account.history.push("lost card".to_string());
            tell.tell("Your card is blocked. Goodbye.");
            flow.exit();
            account
        },
    )
    .unwrap();

    let start_over = tree.add_action(cards, "Start over").unwrap();
    tree.set_callback(start_over, move |flow: &mut Flow| flow.redirect(root))
        .unwrap();

    let closed = tree.add_submenu(root, "Branch desk").unwrap();
    tree.add_action(closed, "Speak to a clerk").unwrap();
    tree.set_callback(closed, |tell: &mut dyn Tell, flow: &mut Flow| {
        tell.tell("The branch desk is closed.");
        flow.exit();
    })
    .unwrap();

    Hotline { tree, root, cards }
}

/// SCENARIO: balance, deposit, then a lost card ends the call
#[test]
fn scenario_deposit_then_report_lost_card() {
    let Hotline { mut tree, .. } = hotline();
    let mut replies = Replies::new(&["balance", "deposit", "50", "cards", "report lost"]);
    let mut told = Messages::default();

    let start = Account {
        balance: 100,
        history: Vec::new(),
    };
    let account = tree.run(start, &mut replies, &mut told).unwrap();

    assert_eq!(account.balance, 150);
    assert_eq!(account.history, vec!["deposit 50", "lost card"]);
    assert_eq!(
        told.0,
        vec![
            "Welcome to Example Bank.",
            "Your balance is 100.",
            "Welcome to Example Bank.",
            "Deposited 50.",
            "Welcome to Example Bank.",
            "Your card is blocked. Goodbye.",
        ]
    );

    let root_prompt = menu_prompt(&["Balance", "Deposit", "Cards", "Branch desk", "Exit"]);
    assert_eq!(
        replies.prompts,
        vec![
            root_prompt.clone(),
            root_prompt.clone(),
            "How much?".to_string(),
            root_prompt,
            menu_prompt(&["Report lost card", "Start over", "Return to previous menu", "Exit"]),
        ]
    );
}

/// SCENARIO: an action redirect to a menu makes that menu the next node
#[test]
fn scenario_action_redirects_to_root() {
    let Hotline { mut tree, .. } = hotline();
    let mut replies = Replies::new(&["3", "start over"]);
    let mut told = Messages::default();

    tree.run(Account::default(), &mut replies, &mut told).unwrap();

    // Cards, then back at the root instead of Cards, then end of input.
    assert_eq!(replies.prompts.len(), 3);
    assert_eq!(replies.prompts[2], replies.prompts[0]);
    assert_eq!(told.0.len(), 2);
}

/// SCENARIO: a menu whose callback redirects never shows its own prompt
#[test]
fn scenario_closed_menu_hangs_up_without_prompting() {
    let Hotline { mut tree, .. } = hotline();
    let mut replies = Replies::new(&["branch desk", "speak to a clerk"]);
    let mut told = Messages::default();

    tree.run(Account::default(), &mut replies, &mut told).unwrap();

    assert_eq!(replies.prompts.len(), 1);
    assert_eq!(replies.remaining(), 1);
    assert_eq!(told.0.last().map(String::as_str), Some("The branch desk is closed."));
}

/// SCENARIO: leaving a submenu through its return entry
#[test]
fn scenario_return_to_previous_menu() {
    let Hotline {
        mut tree,
        root,
        cards,
    } = hotline();

    let options = tree.effective_options(cards).unwrap();
    let back = options
        .iter()
        .find(|o| o.label == "Return to previous menu")
        .unwrap();
    assert_eq!(back.target, Target::from(root));

    let mut replies = Replies::new(&["cards", "return to previous", "exit"]);
    tree.run(Account::default(), &mut replies, &mut Messages::default())
        .unwrap();
    assert_eq!(replies.prompts.len(), 3);
    assert_eq!(replies.prompts[2], replies.prompts[0]);
    assert_eq!(replies.remaining(), 0);
}

/// SCENARIO: unparseable deposit leaves the balance alone
#[test]
fn scenario_bad_amount_keeps_balance() {
    let Hotline { mut tree, .. } = hotline();
    let mut replies = Replies::new(&["deposit", "lots"]);
    let mut told = Messages::default();

    let account = tree
        .run(
            Account {
                balance: 10,
                history: Vec::new(),
            },
            &mut replies,
            &mut told,
        )
        .unwrap();

    assert_eq!(account.balance, 10);
    assert!(told.0.contains(&"That is not an amount.".to_string()));
}
