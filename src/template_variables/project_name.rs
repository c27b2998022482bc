use crate::error::{Error, Result};
use crate::interactive;
use crate::project_config::validate_project_name;
use crate::user_parsed_input::UserParsedInput;

/// The project name from `--name`, or asked for when running at a terminal.
pub fn get_project_name(user_parsed_input: &UserParsedInput) -> Result<String> {
    match user_parsed_input.name() {
        Some(name) => validate_project_name(name).map(String::from),
        None if interactive::is_attended() => interactive::name(),
        None => Err(Error::invalid_input(
            "missing project name, pass it with `--name <NAME>`",
        )),
    }
}
