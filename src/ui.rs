// src/ui.rs

use dialoguer::{theme::ColorfulTheme, Select};

/// Something that can ask the user to choose one of several labels.
pub trait Selector {
    /// Blocks until the user picks an entry. Returns its index, or `None`
    /// if the menu was dismissed.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal interaction fails.
    fn select(&mut self, title: &str, labels: &[String]) -> Result<Option<usize>, dialoguer::Error>;
}

/// Terminal menu backed by `dialoguer::Select`.
pub struct TerminalSelector {
    theme: ColorfulTheme,
}

impl TerminalSelector {
    pub fn new() -> Self {
        TerminalSelector {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl Selector for TerminalSelector {
    fn select(&mut self, title: &str, labels: &[String]) -> Result<Option<usize>, dialoguer::Error> {
        // Newest recording is last; start the cursor there.
        let default = labels.len().saturating_sub(1);
        Select::with_theme(&self.theme)
            .with_prompt(title)
            .items(labels)
            .default(default)
            .interact_opt()
    }
}
