use crate::error::{Error, Result};
use crate::interactive;
use crate::project_config::Language;
use crate::user_parsed_input::UserParsedInput;

/// The language from `--language`, else the configured default, else asked for when
/// running at a terminal.
pub fn get_language(user_parsed_input: &UserParsedInput) -> Result<Language> {
    if let Some(token) = user_parsed_input.language() {
        return token.parse();
    }
    let default = user_parsed_input
        .default_language()
        .map(str::parse::<Language>)
        .transpose()?;

    // a name given without a language still counts as non-interactive
    if user_parsed_input.name().is_some() {
        if let Some(language) = default {
            return Ok(language);
        }
    }
    if interactive::is_attended() {
        return interactive::language(default);
    }
    default.ok_or_else(|| {
        Error::invalid_input("missing project language, pass it with `--language <c|cpp>`")
    })
}
