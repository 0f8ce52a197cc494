//! td-project: design document file format and validation.

pub mod schema;
pub mod validate;

pub use schema::{LimitsDef, SpecFile};
pub use validate::{ValidationError, validate_spec};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<SpecFile> {
    let content = std::fs::read_to_string(path)?;
    let file: SpecFile = serde_yaml::from_str(&content)?;
    first_problem(&file)?;
    Ok(file)
}

pub fn save_yaml(path: &std::path::Path, file: &SpecFile) -> ProjectResult<()> {
    first_problem(file)?;
    let content = serde_yaml::to_string(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<SpecFile> {
    let content = std::fs::read_to_string(path)?;
    let file: SpecFile = serde_json::from_str(&content)?;
    first_problem(&file)?;
    Ok(file)
}

pub fn save_json(path: &std::path::Path, file: &SpecFile) -> ProjectResult<()> {
    first_problem(file)?;
    let content = serde_json::to_string_pretty(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

// Load/save stop at the first problem; callers that want the full list
// run `validate_spec` on a parsed document themselves.
fn first_problem(file: &SpecFile) -> ProjectResult<()> {
    match validate_spec(file).into_iter().next() {
        Some(problem) => Err(ProjectError::Validation(problem)),
        None => Ok(()),
    }
}
