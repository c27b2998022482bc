mod language;
mod project_dir;
pub mod project_name;

pub use language::get_language;
pub use project_dir::ProjectDir;
pub use project_name::get_project_name;
