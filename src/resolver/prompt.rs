//! Interactive questions asked during resolution

use std::path::{Path, PathBuf};

use inquire::validator::Validation;
use inquire::{Confirm, Text};

/// Questions the installer may need to ask
pub trait Prompt {
    /// Ask for the data root; `None` when the user cancels
    fn pick_root(&self, products: &[String]) -> Option<PathBuf>;

    /// Ask whether to go on although `product` is running
    fn confirm_continue_while_running(&self, product: &str) -> bool;
}

/// Prompts on the terminal
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn pick_root(&self, products: &[String]) -> Option<PathBuf> {
        let product = products.first().map_or("Quantower", String::as_str);
        let answer = Text::new(&format!("Where is the {product} folder?"))
            .with_help_message("The folder that contains Settings. Press ESC to cancel")
            .with_validator(|input: &str| {
                if Path::new(input.trim()).is_dir() {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid("Not an existing folder".into()))
                }
            })
            .prompt_skippable()
            .ok()
            .flatten()?;

        let answer = answer.trim();
        if answer.is_empty() {
            None
        } else {
            Some(PathBuf::from(answer))
        }
    }

    fn confirm_continue_while_running(&self, product: &str) -> bool {
        Confirm::new(&format!(
            "{product} is running. Close it now, then continue?"
        ))
        .with_default(false)
        .with_help_message("Settings written while it runs may be overwritten on exit")
        .prompt_skippable()
        .ok()
        .flatten()
        .unwrap_or(false)
    }
}

/// Never asks; declines everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NoPrompt;

impl Prompt for NoPrompt {
    fn pick_root(&self, _products: &[String]) -> Option<PathBuf> {
        None
    }

    fn confirm_continue_while_running(&self, _product: &str) -> bool {
        false
    }
}

/// Canned answers that count how often the folder was asked for
#[cfg(test)]
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    pick: Option<PathBuf>,
    confirm: bool,
    picks: std::cell::Cell<usize>,
}

#[cfg(test)]
impl ScriptedPrompt {
    pub fn declining() -> Self {
        Self::default()
    }

    pub fn picking(path: PathBuf) -> Self {
        Self {
            pick: Some(path),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn confirming(mut self) -> Self {
        self.confirm = true;
        self
    }

    pub fn picks(&self) -> usize {
        self.picks.get()
    }
}

#[cfg(test)]
impl Prompt for ScriptedPrompt {
    fn pick_root(&self, _products: &[String]) -> Option<PathBuf> {
        self.picks.set(self.picks.get() + 1);
        self.pick.clone()
    }

    fn confirm_continue_while_running(&self, _product: &str) -> bool {
        self.confirm
    }
}
