//! Read-back of generated documents built on top of `lopdf`.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use lopdf::Document;

use crate::model::WorkoutPlan;

/// Magic bytes every PDF file starts with.
pub const PDF_MAGIC: &[u8] = b"%PDF-";

/// Errors that can occur while reading a PDF back.
#[derive(Debug)]
pub enum InspectError {
    /// The data does not start with `%PDF-`.
    MissingHeader,
    /// The bytes could not be parsed by `lopdf`.
    Parse(lopdf::Error),
    /// The file could not be read.
    Io(io::Error),
}

impl From<lopdf::Error> for InspectError {
    fn from(err: lopdf::Error) -> Self {
        Self::Parse(err)
    }
}

impl From<io::Error> for InspectError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl fmt::Display for InspectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "Data does not start with a PDF header"),
            Self::Parse(err) => write!(f, "Failed to parse PDF bytes: {err}"),
            Self::Io(err) => write!(f, "Failed to read PDF file: {err}"),
        }
    }
}

impl std::error::Error for InspectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Io(err) => Some(err),
            Self::MissingHeader => None,
        }
    }
}

/// Returns whether `data` starts with the PDF magic number.  Empty data is never valid.
pub fn has_pdf_header(data: &[u8]) -> bool {
    data.starts_with(PDF_MAGIC)
}

/// Page count and text content of a parsed document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PdfSummary {
    pub page_count: usize,
    pub text: String,
}

impl PdfSummary {
    /// Extracted text split into trimmed lines, skipping blank ones.
    pub fn lines(&self) -> Vec<&str> {
        self.text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }
}

/// Parses `pdf_bytes` and extracts the text of every page in order.
pub fn inspect_pdf(pdf_bytes: &[u8]) -> Result<PdfSummary, InspectError> {
    if !has_pdf_header(pdf_bytes) {
        return Err(InspectError::MissingHeader);
    }

    let document = Document::load_mem(pdf_bytes)?;
    let page_numbers: Vec<u32> = document.get_pages().keys().copied().collect();
    let text = if page_numbers.is_empty() {
        String::new()
    } else {
        document.extract_text(&page_numbers)?
    };

    Ok(PdfSummary {
        page_count: page_numbers.len(),
        text,
    })
}

/// Reads the file at `path` and inspects it.
pub fn inspect_file(path: impl AsRef<Path>) -> Result<PdfSummary, InspectError> {
    let bytes = fs::read(path)?;
    inspect_pdf(&bytes)
}

/// Mismatch between a generated document and the plan it was rendered from.
#[derive(Debug, PartialEq, Eq)]
pub enum VerifyError {
    /// The document does not have exactly one page.
    PageCount(usize),
    /// The extracted lines differ from the plan's lines.
    Content {
        expected: Vec<String>,
        found: Vec<String>,
    },
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PageCount(count) => write!(f, "Expected a single page, found {count}"),
            Self::Content { expected, found } => write!(
                f,
                "Extracted text does not match the plan: expected {expected:?}, found {found:?}"
            ),
        }
    }
}

impl std::error::Error for VerifyError {}

/// Checks that `summary` is a single page holding the plan's title and exercises in order.
pub fn verify_plan(summary: &PdfSummary, plan: &WorkoutPlan) -> Result<(), VerifyError> {
    if summary.page_count != 1 {
        return Err(VerifyError::PageCount(summary.page_count));
    }

    let expected: Vec<String> = plan
        .lines()
        .iter()
        .map(|line| line.text().trim().to_string())
        .collect();
    let found: Vec<String> = summary.lines().into_iter().map(str::to_string).collect();

    if expected == found {
        Ok(())
    } else {
        Err(VerifyError::Content { expected, found })
    }
}

#[cfg(test)]
mod tests {
    use super::{has_pdf_header, inspect_pdf, verify_plan, InspectError, PdfSummary, VerifyError};
    use crate::model::WorkoutPlan;

    #[test]
    fn header_check() {
        assert!(has_pdf_header(b"%PDF-1.3\n"));
        assert!(!has_pdf_header(b""));
        assert!(!has_pdf_header(b"%PDF"));
        assert!(!has_pdf_header(b"<html>"));
    }

    #[test]
    fn rejects_non_pdf_data() {
        assert!(matches!(
            inspect_pdf(b"plain text"),
            Err(InspectError::MissingHeader)
        ));
    }

    #[test]
    fn lines_skip_blank_entries() {
        let summary = PdfSummary {
            page_count: 1,
            text: "  Title \n\n 1. Squat\n".to_string(),
        };
        assert_eq!(summary.lines(), vec!["Title", "1. Squat"]);
    }

    #[test]
    fn verify_accepts_matching_text() {
        let plan = WorkoutPlan::new("Legs").with_exercise("1. Squat - 4x8 @ 80kg");
        let summary = PdfSummary {
            page_count: 1,
            text: "Legs\n1. Squat - 4x8 @ 80kg\n".to_string(),
        };
        assert_eq!(verify_plan(&summary, &plan), Ok(()));
    }

    #[test]
    fn verify_reports_reordered_lines() {
        let plan = WorkoutPlan::new("Legs").with_exercises(["1. Squat", "2. Lunges"]);
        let summary = PdfSummary {
            page_count: 1,
            text: "Legs\n2. Lunges\n1. Squat\n".to_string(),
        };
        assert!(matches!(
            verify_plan(&summary, &plan),
            Err(VerifyError::Content { .. })
        ));
    }

    #[test]
    fn verify_requires_single_page() {
        let summary = PdfSummary {
            page_count: 2,
            text: "Legs\n".to_string(),
        };
        assert_eq!(
            verify_plan(&summary, &WorkoutPlan::new("Legs")),
            Err(VerifyError::PageCount(2))
        );
    }
}
