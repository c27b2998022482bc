//! The templates every project is rendered from, embedded at compile time.

use liquid::{Parser, ParserBuilder};
use liquid_core::{Object, Value};

use crate::error::{Error, Result};
use crate::project_config::{Language, ProjectConfig};
use crate::user_parsed_input::UserParsedInput;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Template {
    pub name: &'static str,
    source: &'static str,
}

pub const CMAKE_LISTS: Template = Template {
    name: "CMakeLists.txt",
    source: include_str!("../templates/CMakeLists.txt.liquid"),
};

pub const MAIN_C: Template = Template {
    name: "main.c",
    source: include_str!("../templates/main.c.liquid"),
};

pub const MAIN_CPP: Template = Template {
    name: "main.cpp",
    source: include_str!("../templates/main.cpp.liquid"),
};

pub const C_GITIGNORE: Template = Template {
    name: "c.gitignore",
    source: include_str!("../templates/c.gitignore.liquid"),
};

pub const CPP_GITIGNORE: Template = Template {
    name: "cpp.gitignore",
    source: include_str!("../templates/cpp.gitignore.liquid"),
};

pub const BUILD_SCRIPT: Template = Template {
    name: "build.sh",
    source: include_str!("../templates/build.sh.liquid"),
};

pub const fn main_source(language: Language) -> Template {
    match language {
        Language::C => MAIN_C,
        Language::Cpp => MAIN_CPP,
    }
}

pub const fn gitignore(language: Language) -> Template {
    match language {
        Language::C => C_GITIGNORE,
        Language::Cpp => CPP_GITIGNORE,
    }
}

pub fn create_liquid_engine() -> Result<Parser> {
    ParserBuilder::with_stdlib()
        .build()
        .map_err(|source| Error::Render {
            template: "<engine>",
            source,
        })
}

/// create liquid object for the templates, pre-filled with every known variable
pub fn create_liquid_object(project: &ProjectConfig, user_parsed_input: &UserParsedInput) -> Object {
    let language = project.language();
    let mut liquid_object = Object::new();

    liquid_object.insert(
        "project-name".into(),
        Value::Scalar(project.name().to_owned().into()),
    );
    liquid_object.insert(
        "cmake-language".into(),
        Value::Scalar(language.cmake_language().into()),
    );
    liquid_object.insert("main-file".into(), Value::Scalar(language.main_file().into()));
    liquid_object.insert(
        "cmake-minimum-version".into(),
        Value::Scalar(user_parsed_input.cmake_minimum_version().to_owned().into()),
    );
    liquid_object.insert(
        "generator".into(),
        Value::Scalar(user_parsed_input.generator().to_owned().into()),
    );

    liquid_object
}

pub fn render(parser: &Parser, template: Template, liquid_object: &Object) -> Result<String> {
    let to_error = |source| Error::Render {
        template: template.name,
        source,
    };
    parser
        .parse(template.source)
        .map_err(to_error)?
        .render(liquid_object)
        .map_err(to_error)
}
