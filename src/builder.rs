//! Rendering of a [`WorkoutPlan`] into a single-page PDF.

use std::fmt;
use std::io::{self, BufWriter};

use log::{debug, info};
use printpdf::{IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::fonts::{self, FontFamily};
use crate::model::{HorizontalAlignment, TextLine, WorkoutPlan};

const A4_WIDTH_MM: f64 = 210.0;
const A4_HEIGHT_MM: f64 = 297.0;
const DEFAULT_MARGIN_MM: f64 = 10.0;
const DEFAULT_LINE_HEIGHT_MM: f64 = 10.0;
const DEFAULT_TITLE_GAP_MM: f64 = 10.0;
const MM_PER_POINT: f64 = 25.4 / 72.0;
/// Baseline offset below the cell's vertical centre, as a fraction of the font size.
const BASELINE_FACTOR: f64 = 0.3;
const LAYER_NAME: &str = "Layer 1";

/// Errors raised while producing the PDF bytes.
#[derive(Debug)]
pub enum PdfBuildError {
    /// A built-in font could not be registered with the document.
    Font(printpdf::Error),
    /// The document could not be serialized.
    Serialize(printpdf::Error),
    /// The serialized bytes could not be flushed out of the write buffer.
    Io(io::Error),
}

impl fmt::Display for PdfBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Font(err) => write!(
                f,
                "Failed to register the built-in {} fonts: {err}",
                fonts::DEFAULT_FONT_FAMILY_NAME
            ),
            Self::Serialize(err) => write!(f, "Failed to serialize PDF document: {err}"),
            Self::Io(err) => write!(f, "Failed to flush PDF bytes: {err}"),
        }
    }
}

impl std::error::Error for PdfBuildError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Font(err) | Self::Serialize(err) => Some(err),
            Self::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for PdfBuildError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

/// Output of [`DocumentBuilder::render`].
#[derive(Clone, Debug)]
pub struct RenderedPdf {
    pub bytes: Vec<u8>,
}

/// Page geometry used to lay out the lines of a plan.
///
/// Every line occupies one cell of `line_height` spanning the printable
/// width.  The title is followed by an extra gap of `title_gap`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DocumentBuilder {
    page_width: f64,
    page_height: f64,
    margin: f64,
    line_height: f64,
    title_gap: f64,
}

impl Default for DocumentBuilder {
    fn default() -> Self {
        Self {
            page_width: A4_WIDTH_MM,
            page_height: A4_HEIGHT_MM,
            margin: DEFAULT_MARGIN_MM,
            line_height: DEFAULT_LINE_HEIGHT_MM,
            title_gap: DEFAULT_TITLE_GAP_MM,
        }
    }
}

/// Position of a line's baseline origin in PDF user space (origin at the bottom left).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinePlacement {
    pub x: f64,
    pub y: f64,
}

impl DocumentBuilder {
    /// Creates a builder for A4 portrait pages with 10 mm margins and 10 mm cells.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size in millimetres.
    pub fn with_page_size(mut self, width_mm: f64, height_mm: f64) -> Self {
        self.page_width = width_mm;
        self.page_height = height_mm;
        self
    }

    /// Sets the margin applied on every side, in millimetres.
    pub fn with_margin(mut self, margin_mm: f64) -> Self {
        self.margin = margin_mm;
        self
    }

    /// Sets the height of the cell each line occupies, in millimetres.
    pub fn with_line_height(mut self, line_height_mm: f64) -> Self {
        self.line_height = line_height_mm;
        self
    }

    /// Sets the vertical gap inserted after the title, in millimetres.
    pub fn with_title_gap(mut self, title_gap_mm: f64) -> Self {
        self.title_gap = title_gap_mm;
        self
    }

    fn printable_width(&self) -> f64 {
        self.page_width - 2.0 * self.margin
    }

    fn cell_padding(&self) -> f64 {
        self.margin / 10.0
    }

    /// Computes where each line of `lines` is drawn.
    ///
    /// The first line is treated as the title; the gap is only inserted after it.
    pub fn layout(&self, lines: &[TextLine]) -> Vec<LinePlacement> {
        let mut cell_top = self.margin;
        let mut placements = Vec::with_capacity(lines.len());

        for (index, line) in lines.iter().enumerate() {
            let style = line.style();
            let x = match style.alignment() {
                HorizontalAlignment::Left => self.margin + self.cell_padding(),
                HorizontalAlignment::Center => {
                    let width =
                        fonts::text_width_mm(line.text(), style.weight(), style.font_size());
                    self.margin + (self.printable_width() - width) / 2.0
                }
            };
            let baseline = cell_top
                + self.line_height / 2.0
                + BASELINE_FACTOR * f64::from(style.font_size()) * MM_PER_POINT;

            placements.push(LinePlacement {
                x,
                y: self.page_height - baseline,
            });

            cell_top += self.line_height;
            if index == 0 {
                cell_top += self.title_gap;
            }
        }

        placements
    }

    /// Renders `plan` onto a single page and returns the serialized document.
    pub fn render(&self, plan: &WorkoutPlan) -> Result<RenderedPdf, PdfBuildError> {
        let (mut document, page, layer) = PdfDocument::new(
            plan.title(),
            Mm(self.page_width),
            Mm(self.page_height),
            LAYER_NAME,
        );
        let family = fonts::install_default_fonts(&mut document).map_err(PdfBuildError::Font)?;

        let lines = plan.lines();
        {
            let layer = document.get_page(page).get_layer(layer);
            for (line, placement) in lines.iter().zip(self.layout(&lines)) {
                debug!(
                    "Placing {:?} at ({:.2} mm, {:.2} mm)",
                    line.text(),
                    placement.x,
                    placement.y
                );
                draw_line(&layer, &family, line, placement);
            }
        }

        let mut writer = BufWriter::new(Vec::new());
        document
            .save(&mut writer)
            .map_err(PdfBuildError::Serialize)?;
        let bytes = writer.into_inner().map_err(|err| err.into_error())?;

        info!(
            "Rendered '{}' with {} lines ({} bytes)",
            plan.title(),
            lines.len(),
            bytes.len()
        );
        Ok(RenderedPdf { bytes })
    }
}

fn draw_line(
    layer: &PdfLayerReference,
    family: &FontFamily<IndirectFontRef>,
    line: &TextLine,
    placement: LinePlacement,
) {
    let style = line.style();
    layer.use_text(
        line.text(),
        style.font_size().into(),
        Mm(placement.x),
        Mm(placement.y),
        family.get(style.weight()),
    );
}
