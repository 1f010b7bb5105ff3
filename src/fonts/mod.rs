//! Font selection and metrics for the workout document.
//!
//! The document only uses the base-14 Helvetica family, which every PDF viewer
//! provides, so nothing has to be embedded or loaded from disk.  Centering a
//! line still needs glyph widths; those come from the Adobe AFM tables below.

use log::warn;
use printpdf::{BuiltinFont, IndirectFontRef, PdfDocumentReference};

use crate::model::FontWeight;

/// Name of the font family used for every line.
pub const DEFAULT_FONT_FAMILY_NAME: &str = "Helvetica";

const MM_PER_POINT: f64 = 25.4 / 72.0;

/// Width used for characters outside the ASCII tables (1/1000 em).
const DEFAULT_WIDTH: u16 = 278;

/// Helvetica widths for ASCII 32..=126 in 1/1000 em (Adobe AFM).
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278, // 32..=47
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556, // 48..=63
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778, // 64..=79
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556, // 80..=95
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // 96..=111
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584, // 112..=126
];

/// Helvetica-Bold widths for ASCII 32..=126 in 1/1000 em (Adobe AFM).
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278, // 32..=47
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611, // 48..=63
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778, // 64..=79
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556, // 80..=95
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // 96..=111
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584, // 112..=126
];

/// The two faces of the family registered with a document.
#[derive(Clone, Debug)]
pub struct FontFamily<T> {
    pub regular: T,
    pub bold: T,
}

impl<T> FontFamily<T> {
    /// Returns the face matching `weight`.
    pub fn get(&self, weight: FontWeight) -> &T {
        match weight {
            FontWeight::Regular => &self.regular,
            FontWeight::Bold => &self.bold,
        }
    }
}

/// The built-in faces backing the default family.
pub fn default_font_family() -> FontFamily<BuiltinFont> {
    FontFamily {
        regular: BuiltinFont::Helvetica,
        bold: BuiltinFont::HelveticaBold,
    }
}

/// Registers the default family with `document` and returns the font references.
pub fn install_default_fonts(
    document: &mut PdfDocumentReference,
) -> Result<FontFamily<IndirectFontRef>, printpdf::Error> {
    let family = default_font_family();
    Ok(FontFamily {
        regular: document.add_builtin_font(family.regular)?,
        bold: document.add_builtin_font(family.bold)?,
    })
}

/// Returns the advance width of `ch` in 1/1000 em.
pub fn char_width(weight: FontWeight, ch: char) -> u16 {
    let code = ch as u32;
    if !(32..=126).contains(&code) {
        return DEFAULT_WIDTH;
    }

    let index = (code - 32) as usize;
    match weight {
        FontWeight::Regular => HELVETICA_WIDTHS[index],
        FontWeight::Bold => HELVETICA_BOLD_WIDTHS[index],
    }
}

/// Measures `text` set at `font_size` points and returns its width in millimetres.
pub fn text_width_mm(text: &str, weight: FontWeight, font_size: u8) -> f64 {
    if let Some(ch) = text.chars().find(|ch| !(' '..='~').contains(ch)) {
        warn!(
            "No {} metrics for {:?}; centering of {:?} is approximate",
            DEFAULT_FONT_FAMILY_NAME, ch, text
        );
    }

    let units: u32 = text.chars().map(|ch| u32::from(char_width(weight, ch))).sum();
    f64::from(units) * f64::from(font_size) / 1000.0 * MM_PER_POINT
}

#[cfg(test)]
mod tests {
    use super::{char_width, text_width_mm, DEFAULT_WIDTH};
    use crate::model::FontWeight;

    #[test]
    fn bold_glyphs_are_wider() {
        assert_eq!(char_width(FontWeight::Regular, 'i'), 222);
        assert_eq!(char_width(FontWeight::Bold, 'i'), 278);
        assert_eq!(char_width(FontWeight::Regular, '@'), 1015);
        assert_eq!(char_width(FontWeight::Bold, '~'), 584);
    }

    #[test]
    fn unmapped_characters_use_default_width() {
        assert_eq!(char_width(FontWeight::Bold, 'é'), DEFAULT_WIDTH);
        assert_eq!(char_width(FontWeight::Regular, '\n'), DEFAULT_WIDTH);
    }

    #[test]
    fn width_scales_with_font_size() {
        // "M" is 833/1000 em: 8.33 pt at 10 pt, 16.66 pt at 20 pt.
        let small = text_width_mm("M", FontWeight::Regular, 10);
        let large = text_width_mm("M", FontWeight::Regular, 20);

        assert!((small - 8.33 * 25.4 / 72.0).abs() < 1e-9);
        assert!((large - 2.0 * small).abs() < 1e-9);
    }

    #[test]
    fn title_fits_printable_width() {
        let width = text_width_mm("Mi Rutina de Fuerza", FontWeight::Bold, 16);
        assert!(width > 0.0 && width < 190.0);
    }
}
