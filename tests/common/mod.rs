//! Shared test helpers: scripted `ask` replies and a `tell` recorder.

#![allow(dead_code)]

use std::collections::VecDeque;

use phonetree::{Ask, Tell};

/// Replies handed out in order; `None` once they run out.
#[derive(Debug, Default)]
pub struct Replies {
    replies: VecDeque<String>,
    pub prompts: Vec<String>,
}

impl Replies {
    pub fn new(replies: &[&str]) -> Self {
        Self {
            replies: replies.iter().map(|r| r.to_string()).collect(),
            prompts: Vec::new(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.replies.len()
    }
}

impl Ask for Replies {
    fn ask(&mut self, prompt: &str) -> Option<String> {
        self.prompts.push(prompt.to_string());
        self.replies.pop_front()
    }
}

/// Every message told, in order.
#[derive(Debug, Default)]
pub struct Messages(pub Vec<String>);

impl Tell for Messages {
    fn tell(&mut self, message: &str) {
        self.0.push(message.to_string());
    }
}

/// The menu prompt `render_menu` produces with default prompts.
pub fn menu_prompt(labels: &[&str]) -> String {
    let mut prompt = String::from("Please select an option:");
    for (i, label) in labels.iter().enumerate() {
        prompt.push_str(&format!("\n{}. {}", i + 1, label));
    }
    prompt
}
