pub mod commands;
pub mod config;
pub mod events;
pub mod monitors;
pub mod project;
pub mod tasks;
pub mod validation;

/// Name of the project file expected at the root of a project directory
pub const PROJECT_FILE_NAME: &str = "vigil_project.yml";
