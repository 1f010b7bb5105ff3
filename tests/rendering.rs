use std::fs;

use tempfile::TempDir;
use workout_pdf::generator::{default_output_path, GenerateError};
use workout_pdf::inspect::{self, has_pdf_header, verify_plan};
use workout_pdf::model::{SAMPLE_EXERCISES, SAMPLE_TITLE};
use workout_pdf::{
    generate_plan_pdf, generate_workout_pdf, DocumentBuilder, GeneratorConfig, WorkoutPlan,
};

const EXPECTED_TEXT: &str = "Mi Rutina de Fuerza\n\
1. Bench Press - 4x10 @ 60kg\n\
2. Squat - 4x8 @ 80kg\n\
3. Deadlift - 3x5 @ 100kg\n\
4. Shoulder Press - 3x12 @ 30kg\n\
5. Barbell Row - 4x10 @ 50kg";

fn render_sample_pdf() -> Vec<u8> {
    DocumentBuilder::new()
        .render(&WorkoutPlan::sample())
        .expect("render sample pdf")
        .bytes
}

fn scratch_dir() -> TempDir {
    tempfile::tempdir().expect("create scratch directory")
}

#[test]
fn renders_single_valid_page() {
    let bytes = render_sample_pdf();
    assert!(has_pdf_header(&bytes), "rendered PDF should start with %PDF-");

    let summary = inspect::inspect_pdf(&bytes).expect("parse rendered pdf");
    assert_eq!(summary.page_count, 1);
}

#[test]
fn extracted_text_matches_sample_plan() {
    let summary = inspect::inspect_pdf(&render_sample_pdf()).expect("parse rendered pdf");

    assert_eq!(summary.lines().join("\n"), EXPECTED_TEXT);
    assert_eq!(summary.lines()[0], SAMPLE_TITLE);
    assert_eq!(&summary.lines()[1..], &SAMPLE_EXERCISES[..]);
}

#[test]
fn generator_creates_missing_directories() {
    let scratch = scratch_dir();
    let output = default_output_path(scratch.path());
    assert!(!output.parent().unwrap().exists());

    let written = generate_workout_pdf(&output).expect("generate workout pdf");

    assert_eq!(written, output);
    assert!(output.is_file());
    let summary = inspect::inspect_file(&output).expect("inspect written file");
    verify_plan(&summary, &WorkoutPlan::sample()).expect("written file matches plan");
}

#[test]
fn project_root_config_resolves_examples_path() {
    let scratch = scratch_dir();
    let config = GeneratorConfig::resolve(Some(scratch.path().to_path_buf()), None);

    generate_workout_pdf(config.output_path()).expect("generate workout pdf");

    assert!(scratch.path().join("examples/test-workout.pdf").is_file());
}

#[test]
fn regenerating_overwrites_existing_file() {
    let scratch = scratch_dir();
    let output = scratch.path().join("examples").join("test-workout.pdf");
    fs::create_dir_all(output.parent().unwrap()).unwrap();
    fs::write(&output, b"stale contents that are not a pdf").unwrap();

    generate_workout_pdf(&output).expect("first generation");
    let first = inspect::inspect_file(&output).expect("inspect first run");

    generate_workout_pdf(&output).expect("second generation");
    let second = inspect::inspect_file(&output).expect("inspect second run");

    assert_eq!(first.lines(), second.lines());
    assert_eq!(second.lines().join("\n"), EXPECTED_TEXT);
}

#[test]
fn directory_creation_failure_propagates() {
    let scratch = scratch_dir();
    let blocker = scratch.path().join("blocker");
    fs::write(&blocker, b"not a directory").unwrap();
    let output = blocker.join("examples").join("test-workout.pdf");

    let err = generate_workout_pdf(&output).expect_err("parent is a regular file");

    assert!(matches!(err, GenerateError::CreateDir { .. }), "got {err:?}");
    assert!(!output.exists());
    assert_eq!(fs::read(&blocker).unwrap(), b"not a directory");
}

#[test]
fn write_failure_propagates() {
    let scratch = scratch_dir();
    let output = scratch.path().join("taken");
    fs::create_dir(&output).unwrap();

    let err = generate_workout_pdf(&output).expect_err("output is a directory");

    assert!(matches!(err, GenerateError::Write { .. }), "got {err:?}");
    assert!(output.is_dir());
}

#[test]
fn custom_plan_renders_in_order() {
    let scratch = scratch_dir();
    let output = scratch.path().join("legs.pdf");
    let plan = WorkoutPlan::new("Leg Day")
        .with_exercise("1. Front Squat - 5x5 @ 70kg")
        .with_exercise("2. Lunges - 3x12 @ 20kg");

    generate_plan_pdf(&plan, &output).expect("generate custom plan");

    let summary = inspect::inspect_file(&output).expect("inspect custom plan");
    assert_eq!(
        summary.lines(),
        vec![
            "Leg Day",
            "1. Front Squat - 5x5 @ 70kg",
            "2. Lunges - 3x12 @ 20kg"
        ]
    );
}
