use console::style;
use dialoguer::{theme::ColorfulTheme, Input};

use crate::error::Result;
use crate::project_config::{validate_project_name, Language};

/// Prompts can only be shown when somebody is at the terminal
pub fn is_attended() -> bool {
    console::user_attended_stderr()
}

pub fn name() -> Result<String> {
    let name = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("🤷 Project name")
        .validate_with(check_name)
        .interact_text()?;
    Ok(name.trim().to_string())
}

pub fn language(default: Option<Language>) -> Result<Language> {
    let theme = ColorfulTheme::default();
    let mut input = Input::<String>::with_theme(&theme)
        .with_prompt("🤷 Language (c, c++/cpp)")
        .validate_with(check_language);
    if let Some(default) = default {
        input = input.default(default.to_string());
    }
    let language = input.interact_text()?;
    Ok(language.parse()?)
}

/// Rejected answers are shown to the user and the prompt asks again
fn check_name(input: &String) -> Result<(), String> {
    validate_project_name(input)
        .map(|_| ())
        .map_err(|e| format!("{}", style(e).red()))
}

fn check_language(input: &String) -> Result<(), String> {
    input
        .parse::<Language>()
        .map(|_| ())
        .map_err(|e| format!("{}", style(e).red()))
}
