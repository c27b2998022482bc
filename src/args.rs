use std::path::PathBuf;

use clap::Parser;

/// Styles from <https://github.com/rust-lang/cargo/blob/master/src/cargo/util/style.rs>
mod style {
    use anstyle::*;
    use clap::builder::Styles;

    const HEADER: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const USAGE: Style = AnsiColor::Green.on_default().effects(Effects::BOLD);
    const LITERAL: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const PLACEHOLDER: Style = AnsiColor::Cyan.on_default();
    const ERROR: Style = AnsiColor::Red.on_default().effects(Effects::BOLD);
    const VALID: Style = AnsiColor::Cyan.on_default().effects(Effects::BOLD);
    const INVALID: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);

    pub const STYLES: Styles = {
        Styles::styled()
            .header(HEADER)
            .usage(USAGE)
            .literal(LITERAL)
            .placeholder(PLACEHOLDER)
            .error(ERROR)
            .valid(VALID)
            .invalid(INVALID)
    };
}

mod heading {
    pub const PROJECT_PARAMETERS: &str = "Project Parameters";
    pub const OUTPUT_PARAMETERS: &str = "Output Parameters";
}

/// Create a minimal C/C++ CMake project. Run without arguments for interactive mode.
#[derive(Clone, Debug, Default, Parser)]
#[command(
    name = "cppgen",
    version,
    about,
    next_line_help(false),
    styles(style::STYLES)
)]
pub struct AppArgs {
    /// Project name, also used as the directory name and the CMake project identifier
    #[arg(long, short, value_parser, help_heading = heading::PROJECT_PARAMETERS)]
    pub name: Option<String>,

    /// Project language: `c` or `cpp` (`c++` is accepted too)
    #[arg(long, short, value_parser, value_name = "LANGUAGE", help_heading = heading::PROJECT_PARAMETERS)]
    pub language: Option<String>,

    /// Create the project inside the given directory instead of the current one.
    #[arg(long, short, value_parser, value_name = "PATH", help_heading = heading::OUTPUT_PARAMETERS)]
    pub destination: Option<PathBuf>,

    /// Also write a `build.sh` that configures, builds and runs the project.
    #[arg(long, short, action, help_heading = heading::OUTPUT_PARAMETERS)]
    pub build_script: bool,

    /// Read defaults from this file instead of `$HOME/.cppgen.toml`.
    #[arg(long, short, value_parser, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enables more verbose output.
    #[arg(long, short, action)]
    pub verbose: bool,
}

/// To get the arguments list from terminal
pub fn resolve_args() -> AppArgs {
    AppArgs::parse()
}
