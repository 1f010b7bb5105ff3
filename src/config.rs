//! Environment-driven configuration for the generator.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use log::debug;

use crate::generator;

/// Overrides the project root the default output path is resolved against.
pub const PROJECT_ROOT_ENV: &str = "WORKOUT_PDF_PROJECT_ROOT";

/// Overrides the output path entirely.
pub const OUTPUT_ENV: &str = "WORKOUT_PDF_OUTPUT";

/// Root of the project the tool ships in.
pub fn default_project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

fn env_path<F>(lookup: &F, var: &str) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    lookup(var).and_then(|value| {
        let path = PathBuf::from(value);
        if path.as_os_str().to_string_lossy().trim().is_empty() {
            None
        } else {
            Some(path)
        }
    })
}

/// Where the generator writes its document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    output_path: PathBuf,
}

impl GeneratorConfig {
    /// Resolves the output path from explicit overrides.
    ///
    /// `output` wins over `project_root`; without either the path is
    /// `<crate root>/examples/test-workout.pdf`.
    pub fn resolve(project_root: Option<PathBuf>, output: Option<PathBuf>) -> Self {
        let output_path = match output {
            Some(path) => path,
            None => {
                let root = project_root.unwrap_or_else(default_project_root);
                generator::default_output_path(&root)
            }
        };

        Self { output_path }
    }

    /// Reads `WORKOUT_PDF_OUTPUT` and `WORKOUT_PDF_PROJECT_ROOT`; blank values are ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| env::var_os(var))
    }

    /// Same as [`GeneratorConfig::from_env`] with variables read through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let config = Self::resolve(
            env_path(&lookup, PROJECT_ROOT_ENV),
            env_path(&lookup, OUTPUT_ENV),
        );
        debug!("Resolved output path {}", config.output_path.display());
        config
    }

    /// Applies an explicit output path, such as a command-line flag, over
    /// whatever the environment resolved.
    pub fn with_output_override(self, output: Option<PathBuf>) -> Self {
        match output {
            Some(path) => self.with_output_path(path),
            None => self,
        }
    }

    /// Replaces the output path and returns the updated configuration.
    pub fn with_output_path(mut self, output_path: impl Into<PathBuf>) -> Self {
        self.output_path = output_path.into();
        self
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::resolve(None, None)
    }
}
