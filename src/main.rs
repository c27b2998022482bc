/// Main file
mod app_config;
mod app_log;
mod args;
mod error;
mod interactive;
mod progressbar;
mod project_builder;
mod project_config;
mod template;
mod template_variables;
mod user_parsed_input;

use app_config::AppConfig;
use app_log::log_env_init;
use args::*;
use project_config::ProjectConfig;
use template_variables::{get_language, get_project_name};
use user_parsed_input::UserParsedInput;

use anyhow::Result;
use console::style;
use log::{debug, info};
use std::path::PathBuf;

fn main() -> Result<()> {
    let args = resolve_args();
    log_env_init(args.verbose);
    generate(args)?;
    Ok(())
}

/// To generate a C/C++ CMake project
fn generate(args: AppArgs) -> Result<PathBuf> {
    let config = AppConfig::load(args.config.as_deref())?;
    // mash AppConfig and CLI arguments together into UserParsedInput
    let user_parsed_input = UserParsedInput::try_from_args(&args, &config)?;
    if user_parsed_input.is_verbose() {
        debug!("{:?}", user_parsed_input);
    }

    let project_name = get_project_name(&user_parsed_input)?;
    let language = get_language(&user_parsed_input)?;
    let project = ProjectConfig::new(&project_name, language)?;

    let project_dir = project_builder::expand(&project, &user_parsed_input)?;
    info!(
        "✨ {} {} {}",
        style("Done!").bold().green(),
        style("New project created").bold(),
        style(&project_dir.display()).underlined()
    );

    Ok(project_dir)
}
