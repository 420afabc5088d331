use anyhow::anyhow;
use dialoguer::console::Term;
use dialoguer::{Confirm, Input, MultiSelect, Select};
use plugs_std::Style;

use crate::{PlugsError, PlugsResult};

/// The interactive surface used by the setup pipeline.
///
/// Every question `plugs setup` asks goes through this trait, which keeps the
/// pipeline itself free of terminal handling and lets tests drive it with a
/// scripted list of answers.
pub trait Prompter {
    /// Pick exactly one of `items`, returning its index.
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> PlugsResult<usize>;

    /// Pick any number of `items`, returning their indices in display order.
    fn multi_select(&mut self, prompt: &str, items: &[String]) -> PlugsResult<Vec<usize>>;

    /// Free-form text input.
    fn input(&mut self, prompt: &str, default: Option<&str>) -> PlugsResult<String>;

    /// Yes/no question.
    fn confirm(&mut self, prompt: &str, default: bool) -> PlugsResult<bool>;
}

/// Prompts on stderr so that stdout stays reserved for command output.
#[derive(Debug)]
pub struct TermPrompter {
    term: Term,
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self {
            term: Term::stderr(),
        }
    }
}

impl TermPrompter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Prompter for TermPrompter {
    fn select(&mut self, prompt: &str, items: &[String], default: usize) -> PlugsResult<usize> {
        let selection = Select::new()
            .with_prompt(Style::Prompt.paint(format!("? {prompt}")))
            .items(items)
            .default(default)
            .interact_on_opt(&self.term)?;
        selection.ok_or_else(|| PlugsError::new(anyhow!("No option selected for \"{prompt}\"")))
    }

    fn multi_select(&mut self, prompt: &str, items: &[String]) -> PlugsResult<Vec<usize>> {
        let selection = MultiSelect::new()
            .with_prompt(Style::Prompt.paint(format!("? {prompt}")))
            .items(items)
            .interact_on_opt(&self.term)?;
        selection.ok_or_else(|| PlugsError::new(anyhow!("Selection cancelled for \"{prompt}\"")))
    }

    fn input(&mut self, prompt: &str, default: Option<&str>) -> PlugsResult<String> {
        let mut input = Input::<String>::new()
            .with_prompt(Style::Prompt.paint(format!("? {prompt}")))
            .allow_empty(true);
        if let Some(default) = default {
            input = input.default(default.to_string());
        }
        Ok(input.interact_text_on(&self.term)?)
    }

    fn confirm(&mut self, prompt: &str, default: bool) -> PlugsResult<bool> {
        let answer = Confirm::new()
            .with_prompt(Style::Prompt.paint(format!("? {prompt}")))
            .default(default)
            .interact_on_opt(&self.term)?;
        answer.ok_or_else(|| PlugsError::new(anyhow!("No answer given for \"{prompt}\"")))
    }
}

#[cfg(test)]
pub(crate) use scripted::{Answer, ScriptedPrompter};
