//! Generator for the sample workout PDF used to exercise the routine importer.

pub mod builder;
pub mod config;
pub mod fonts;
pub mod generator;
pub mod inspect;
pub mod model;

pub use builder::{DocumentBuilder, PdfBuildError, RenderedPdf};
pub use config::GeneratorConfig;
pub use generator::{generate_plan_pdf, generate_workout_pdf, GenerateError};
pub use model::WorkoutPlan;
