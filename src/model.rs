//! Data structures describing the content of the workout document.
//!
//! A [`WorkoutPlan`] is the snapshot that gets rendered: a title followed by
//! exercise descriptors.  Descriptors are display text only; nothing in this
//! crate parses them.  The plan is turned into a flat list of [`TextLine`]
//! values, each carrying the style the renderer applies to it.

/// Title of the built-in sample plan.
pub const SAMPLE_TITLE: &str = "Mi Rutina de Fuerza";

/// Exercise lines of the built-in sample plan, in rendering order.
pub const SAMPLE_EXERCISES: [&str; 5] = [
    "1. Bench Press - 4x10 @ 60kg",
    "2. Squat - 4x8 @ 80kg",
    "3. Deadlift - 3x5 @ 100kg",
    "4. Shoulder Press - 3x12 @ 30kg",
    "5. Barbell Row - 4x10 @ 50kg",
];

/// Font size (in points) used for the title line.
pub const TITLE_FONT_SIZE: u8 = 16;

/// Font size (in points) used for exercise lines.
pub const EXERCISE_FONT_SIZE: u8 = 12;

/// Horizontal placement of a line inside its cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    /// Left aligned, inset by the cell padding.
    #[default]
    Left,
    /// Centered within the printable width.
    Center,
}

/// Font weight of a rendered line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Style attributes applied to a single line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineStyle {
    weight: FontWeight,
    font_size: u8,
    alignment: HorizontalAlignment,
}

impl LineStyle {
    /// Creates a regular, left-aligned style with the given font size.
    pub fn new(font_size: u8) -> Self {
        Self {
            weight: FontWeight::Regular,
            font_size,
            alignment: HorizontalAlignment::Left,
        }
    }

    /// Style of the document title: bold, 16 pt, centered.
    pub fn title() -> Self {
        Self::new(TITLE_FONT_SIZE)
            .with_weight(FontWeight::Bold)
            .with_alignment(HorizontalAlignment::Center)
    }

    /// Style of an exercise line: regular, 12 pt, left aligned.
    pub fn exercise() -> Self {
        Self::new(EXERCISE_FONT_SIZE)
    }

    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    pub fn font_size(&self) -> u8 {
        self.font_size
    }

    pub fn alignment(&self) -> HorizontalAlignment {
        self.alignment
    }

    /// Sets the weight and returns the updated style.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Sets the alignment and returns the updated style.
    pub fn with_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.alignment = alignment;
        self
    }
}

/// A line of text together with the style it is rendered with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextLine {
    text: String,
    style: LineStyle,
}

impl TextLine {
    pub fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Returns the raw text of the line.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the style applied to the line.
    pub fn style(&self) -> LineStyle {
        self.style
    }
}

/// Snapshot of a workout routine: a title and an ordered list of exercise
/// descriptors such as `"2. Squat - 4x8 @ 80kg"`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkoutPlan {
    title: String,
    exercises: Vec<String>,
}

impl WorkoutPlan {
    /// Creates an empty plan with the given title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            exercises: Vec::new(),
        }
    }

    /// The fixed plan written by the generator.
    pub fn sample() -> Self {
        Self::new(SAMPLE_TITLE).with_exercises(SAMPLE_EXERCISES)
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn exercises(&self) -> &[String] {
        &self.exercises
    }

    /// Appends an exercise descriptor and returns the updated plan.
    pub fn with_exercise(mut self, exercise: impl Into<String>) -> Self {
        self.exercises.push(exercise.into());
        self
    }

    /// Extends the plan with multiple descriptors and returns the updated plan.
    pub fn with_exercises<I, S>(mut self, exercises: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exercises.extend(exercises.into_iter().map(Into::into));
        self
    }

    /// Returns the title line followed by one line per exercise, in order.
    pub fn lines(&self) -> Vec<TextLine> {
        std::iter::once(TextLine::new(self.title.as_str(), LineStyle::title()))
            .chain(
                self.exercises
                    .iter()
                    .map(|exercise| TextLine::new(exercise.as_str(), LineStyle::exercise())),
            )
            .collect()
    }
}
