use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::{Error, Result};

/// Characters CMake accepts in a target name, all of them safe in a path component.
const VALID_NAME: &str = r"^[A-Za-z0-9_.+-]+$";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Language {
    C,
    Cpp,
}

impl Language {
    pub const fn main_file(self) -> &'static str {
        match self {
            Self::C => "main.c",
            Self::Cpp => "main.cpp",
        }
    }

    /// Language keyword for the CMake `project()` command
    pub const fn cmake_language(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::Cpp => "CXX",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Self::C => "C",
            Self::Cpp => "C++",
        }
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "c" => Ok(Self::C),
            "c++" | "cpp" => Ok(Self::Cpp),
            _ => Err(Error::invalid_input(format!(
                "unknown language `{}`, only `c` and `cpp` (C++) are available",
                s.trim()
            ))),
        }
    }
}

impl Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::C => f.write_str("c"),
            Self::Cpp => f.write_str("cpp"),
        }
    }
}

/// The validated (name, language) pair a project is generated from.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ProjectConfig {
    name: String,
    language: Language,
}

impl ProjectConfig {
    pub fn new(name: &str, language: Language) -> Result<Self> {
        let name = validate_project_name(name)?;
        Ok(Self {
            name: name.to_string(),
            language,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn language(&self) -> Language {
        self.language
    }
}

/// Check that `name` can be used both as a directory name and as a CMake identifier.
/// Returns the trimmed name.
pub fn validate_project_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::invalid_input("project name must not be empty"));
    }
    if name == "." || name == ".." {
        return Err(Error::invalid_input(format!(
            "`{name}` is not a valid project name"
        )));
    }
    let valid_name = regex::Regex::new(VALID_NAME).expect("valid regex literal");
    if !valid_name.is_match(name) {
        return Err(Error::invalid_input(format!(
            "invalid character in project name `{name}`, use letters, digits, `_`, `-`, `.` or `+`"
        )));
    }
    Ok(name)
}
