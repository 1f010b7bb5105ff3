//! Writes the sample workout document to disk.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::builder::{DocumentBuilder, PdfBuildError};
use crate::model::WorkoutPlan;

/// Directory, relative to the project root, that receives the document.
pub const OUTPUT_DIR: &str = "examples";

/// File name of the generated document.
pub const OUTPUT_FILE_NAME: &str = "test-workout.pdf";

/// Returns `<project_root>/examples/test-workout.pdf`.
pub fn default_output_path(project_root: &Path) -> PathBuf {
    project_root.join(OUTPUT_DIR).join(OUTPUT_FILE_NAME)
}

/// Errors that abort a generator run.
#[derive(Debug)]
pub enum GenerateError {
    /// The directory holding the output file could not be created.
    CreateDir { path: PathBuf, source: io::Error },
    /// The document could not be rendered.
    Build(PdfBuildError),
    /// The rendered bytes could not be written.
    Write { path: PathBuf, source: io::Error },
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDir { path, .. } => {
                write!(f, "Failed to create output directory {}", path.display())
            }
            Self::Build(_) => write!(f, "Failed to render workout PDF"),
            Self::Write { path, .. } => write!(f, "Failed to write {}", path.display()),
        }
    }
}

impl std::error::Error for GenerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateDir { source, .. } | Self::Write { source, .. } => Some(source),
            Self::Build(err) => Some(err),
        }
    }
}

impl From<PdfBuildError> for GenerateError {
    fn from(err: PdfBuildError) -> Self {
        Self::Build(err)
    }
}

/// Renders the sample plan to `output_path` and prints the confirmation line.
pub fn generate_workout_pdf(output_path: impl AsRef<Path>) -> Result<PathBuf, GenerateError> {
    generate_plan_pdf(&WorkoutPlan::sample(), output_path)
}

/// Renders `plan` to `output_path`, creating missing parent directories.
///
/// An existing file is overwritten.  On success `PDF creado: <path>` is
/// printed to stdout and the written path is returned.
pub fn generate_plan_pdf(
    plan: &WorkoutPlan,
    output_path: impl AsRef<Path>,
) -> Result<PathBuf, GenerateError> {
    let output_path = output_path.as_ref();

    if let Some(parent) = output_path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        debug!("Ensuring output directory {}", parent.display());
        fs::create_dir_all(parent).map_err(|source| GenerateError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let pdf = DocumentBuilder::new().render(plan)?;
    fs::write(output_path, &pdf.bytes).map_err(|source| GenerateError::Write {
        path: output_path.to_path_buf(),
        source,
    })?;

    println!("PDF creado: {}", output_path.display());
    Ok(output_path.to_path_buf())
}
