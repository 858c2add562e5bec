use crate::types::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};

/// Standardized confirmation prompt used across binaries.
pub fn ask_confirmation(prompt: &str, default_yes: bool) -> Result<bool> {
    let choice = Confirm::new()
        .with_prompt(prompt)
        .default(default_yes)
        .show_default(true)
        .interact()?;
    Ok(choice)
}

/// Single-line text input with the shared theme.
pub fn ask_text(prompt: &str) -> Result<String> {
    let value: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(value)
}

/// Hidden password input.
pub fn ask_password(prompt: &str) -> Result<String> {
    let value = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()?;
    Ok(value)
}
