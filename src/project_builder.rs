use std::fs;
use std::path::{Path, PathBuf};

use console::style;
use indicatif::ProgressBar;
use log::{debug, info};

use crate::error::{Error, Result};
use crate::progressbar;
use crate::project_config::ProjectConfig;
use crate::template::{self, Template};
use crate::template_variables::ProjectDir;
use crate::user_parsed_input::UserParsedInput;

/// Sub directories of every project, in creation order
pub const PROJECT_DIRS: [&str; 3] = ["include", "build", "src"];

/// A rendered file waiting to be written, `path` is relative to the project root
#[derive(Debug)]
struct RenderedFile {
    path: String,
    contents: String,
    executable: bool,
}

/// Create the project tree for `project` under the destination of `user_parsed_input`.
///
/// Writes happen in order and are not rolled back: on failure whatever was already
/// created stays on disk and the error names the path that failed.
pub fn expand(project: &ProjectConfig, user_parsed_input: &UserParsedInput) -> Result<PathBuf> {
    // render everything first so a template problem can't leave a half-written tree
    let files = render_files(project, user_parsed_input)?;

    let destination = ProjectDir::from((project, user_parsed_input.destination()));
    info!(
        "🔧 {}",
        style(format!("Destination: {destination} ...")).bold().yellow()
    );
    destination.create()?;
    for dir in PROJECT_DIRS {
        destination.create_subdir(dir)?;
    }

    info!(
        "🔧 {}",
        style(format!(
            "Generating {} project `{}` ...",
            project.language().display_name(),
            project.name()
        ))
        .bold()
        .yellow()
    );
    write_files(&destination, &files)?;

    Ok(destination.as_ref().to_owned())
}

fn render_files(
    project: &ProjectConfig,
    user_parsed_input: &UserParsedInput,
) -> Result<Vec<RenderedFile>> {
    let language = project.language();
    let liquid_engine = template::create_liquid_engine()?;
    let liquid_object = template::create_liquid_object(project, user_parsed_input);

    let mut plan: Vec<(String, Template, bool)> = vec![
        (format!("src/{}", language.main_file()), template::main_source(language), false),
        ("CMakeLists.txt".to_string(), template::CMAKE_LISTS, false),
        (".gitignore".to_string(), template::gitignore(language), false),
    ];
    if user_parsed_input.build_script() {
        plan.push(("build.sh".to_string(), template::BUILD_SCRIPT, true));
    }

    plan.into_iter()
        .map(|(path, tpl, executable)| -> Result<RenderedFile> {
            debug!("rendering {} into {path}", tpl.name);
            Ok(RenderedFile {
                path,
                contents: template::render(&liquid_engine, tpl, &liquid_object)?,
                executable,
            })
        })
        .collect()
}

fn write_files(destination: &ProjectDir, files: &[RenderedFile]) -> Result<()> {
    let mp = progressbar::new();
    let spinner_style = progressbar::spinner();

    let total = files.len().to_string();
    for (progress, file) in files.iter().enumerate() {
        let pb = mp.add(ProgressBar::new(50));
        pb.set_style(spinner_style.clone());
        pb.set_prefix(format!(
            "[{:width$}/{}]",
            progress + 1,
            total,
            width = total.len()
        ));
        pb.set_message(format!("Writing: {}", file.path));

        let path = destination.join(&file.path);
        fs::write(&path, &file.contents).map_err(|e| Error::from_io(&path, e))?;
        pb.inc(25);
        if file.executable {
            make_executable(&path)?;
        }
        pb.inc(25);
        pb.finish_with_message(format!("Done: {}", file.path));
        debug!("wrote {}", path.display());
    }

    Ok(())
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    fs::set_permissions(path, fs::Permissions::from_mode(0o755))
        .map_err(|e| Error::from_io(path, e))
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}
