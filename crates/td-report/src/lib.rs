//! td-report: design reports, dimension diagrams, and the design store.

pub mod diagram;
pub mod hash;
pub mod render;
pub mod store;
pub mod types;

pub use diagram::render_diagram;
pub use hash::compute_design_id;
pub use render::render_text;
pub use store::DesignStore;
pub use types::*;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Design not found: {design_id}")]
    DesignNotFound { design_id: String },

    #[error("Invalid path: {message}")]
    InvalidPath { message: String },
}
