//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. Prompt responses are scripted per
//! key; a key prompted repeatedly consumes its queue in order.
//!
//! # Example
//!
//! ```
//! use anf_config::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.queue_input("target_location", &["eastus"]);
//!
//! let value = ui.input("target_location", "Azure Region", None).unwrap();
//! assert_eq!(value, "eastus");
//! assert_eq!(ui.input_count("target_location"), 1);
//! ```

use std::collections::{HashMap, VecDeque};

use crate::error::Result;

use super::UserInterface;

/// Mock UI implementation for testing.
#[derive(Debug, Default)]
pub struct MockUI {
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    headers: Vec<String>,
    sections: Vec<String>,
    input_queues: HashMap<String, VecDeque<String>>,
    confirm_queues: HashMap<String, VecDeque<bool>>,
    input_counts: HashMap<String, usize>,
    confirm_counts: HashMap<String, usize>,
    /// Fallback confirm answer for keys with no queued response.
    default_confirm: bool,
}

impl MockUI {
    /// Create a new MockUI.
    pub fn new() -> Self {
        Self {
            default_confirm: true,
            ..Default::default()
        }
    }

    /// Queue input responses for a prompt key, consumed in order.
    ///
    /// An exhausted queue yields empty strings, matching a user pressing
    /// ENTER through the remaining prompts.
    pub fn queue_input(&mut self, key: &str, responses: &[&str]) {
        let queue = self
            .input_queues
            .entry(key.to_string())
            .or_default();
        for response in responses {
            queue.push_back(response.to_string());
        }
    }

    /// Queue confirm responses for a prompt key.
    pub fn queue_confirm(&mut self, key: &str, responses: &[bool]) {
        let queue = self
            .confirm_queues
            .entry(key.to_string())
            .or_default();
        queue.extend(responses.iter().copied());
    }

    /// Set the answer returned for confirms with no queued response.
    pub fn set_default_confirm(&mut self, answer: bool) {
        self.default_confirm = answer;
    }

    /// How many times a given input key was prompted.
    pub fn input_count(&self, key: &str) -> usize {
        self.input_counts.get(key).copied().unwrap_or(0)
    }

    /// How many times a given confirm key was prompted.
    pub fn confirm_count(&self, key: &str) -> usize {
        self.confirm_counts.get(key).copied().unwrap_or(0)
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured warnings.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured errors.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Check if any message contains the given text.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if any success contains the given text.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if any warning contains the given text.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if any error contains the given text.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a section with the given title was shown.
    pub fn has_section(&self, title: &str) -> bool {
        self.sections.iter().any(|s| s.contains(title))
    }

    fn next_input(&mut self, key: &str) -> String {
        *self.input_counts.entry(key.to_string()).or_insert(0) += 1;
        self.input_queues
            .get_mut(key)
            .and_then(VecDeque::pop_front)
            .unwrap_or_default()
    }
}

impl UserInterface for MockUI {
    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn show_header(&mut self, title: &str) {
        self.headers.push(title.to_string());
    }

    fn show_section(&mut self, title: &str) {
        self.sections.push(title.to_string());
    }

    fn input(
        &mut self,
        key: &str,
        _question: &str,
        _default_display: Option<&str>,
    ) -> Result<String> {
        Ok(self.next_input(key))
    }

    fn password(&mut self, key: &str, _question: &str) -> Result<String> {
        Ok(self.next_input(key))
    }

    fn confirm(&mut self, key: &str, _question: &str, _default: bool) -> Result<bool> {
        *self.confirm_counts.entry(key.to_string()).or_insert(0) += 1;
        Ok(self
            .confirm_queues
            .get_mut(key)
            .and_then(VecDeque::pop_front)
            .unwrap_or(self.default_confirm))
    }

    fn is_interactive(&self) -> bool {
        true
    }
}
