// The "ask a question, read an answer" side of the wizard

use crate::error::Result;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input};

/// Something that can ask the user questions
pub trait Prompter {
    /// Free-text answer. May be empty.
    fn ask(&mut self, question: &str) -> Result<String>;

    /// Free-text answer with a value used when the user just hits enter
    fn ask_with_default(&mut self, question: &str, default: &str) -> Result<String> {
        let answer = self.ask(question)?;
        if answer.trim().is_empty() {
            Ok(default.to_string())
        } else {
            Ok(answer)
        }
    }

    /// Yes/no answer
    fn confirm(&mut self, question: &str, default: bool) -> Result<bool>;
}

/// Terminal prompts via dialoguer
pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn ask(&mut self, question: &str) -> Result<String> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(question)
            .allow_empty(true)
            .interact_text()?;
        Ok(answer)
    }

    fn ask_with_default(&mut self, question: &str, default: &str) -> Result<String> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(question)
            .default(default.to_string())
            .interact_text()?;
        Ok(answer)
    }

    fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        let answer = Confirm::with_theme(&self.theme)
            .with_prompt(question)
            .default(default)
            .interact()?;
        Ok(answer)
    }
}
