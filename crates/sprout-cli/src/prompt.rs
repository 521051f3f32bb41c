//! Terminal prompter backed by `dialoguer`.

use dialoguer::{
    Confirm, Input, Select,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};

use sprout_core::{
    application::{ApplicationError, InputValidator, Prompter},
    error::{SproutError, SproutResult},
};

/// Asks on stderr, so generated-file reports on stdout stay clean.
///
/// Every prompt fails with `PromptFailed` when stderr is not a terminal.
pub struct DialoguerPrompter {
    theme: Box<dyn Theme>,
}

impl DialoguerPrompter {
    pub fn new(no_color: bool) -> Self {
        let theme: Box<dyn Theme> = if no_color {
            Box::new(SimpleTheme)
        } else {
            Box::new(ColorfulTheme::default())
        };
        Self { theme }
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, items: &[&str]) -> SproutResult<usize> {
        Select::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .items(items)
            .default(0)
            .interact()
            .map_err(prompt_failed)
    }

    fn input(
        &self,
        prompt: &str,
        default: Option<&str>,
        validate: InputValidator<'_>,
    ) -> SproutResult<String> {
        let mut input = Input::<String>::with_theme(self.theme.as_ref()).with_prompt(prompt);
        if let Some(default) = default {
            input = input.with_initial_text(default);
        }

        input
            .validate_with(|text: &String| validate(text))
            .interact_text()
            .map_err(prompt_failed)
    }

    fn confirm(&self, prompt: &str) -> SproutResult<bool> {
        Confirm::with_theme(self.theme.as_ref())
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(prompt_failed)
    }
}

fn prompt_failed(err: dialoguer::Error) -> SproutError {
    ApplicationError::PromptFailed {
        reason: err.to_string(),
    }
    .into()
}
