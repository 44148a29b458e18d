//! In-memory document tree the fill engine operates on.
//!
//! The tree is constructed by an external parser and handed back to an
//! external serializer; this crate only mutates run text in place. `Clone`
//! on every type is a deep copy, so a caller can keep a pristine template
//! around (e.g. for previewing structure) and fill an independent copy.

#[derive(Clone, Default)]
pub struct Document {
    pub paragraphs: Vec<Paragraph>,
    pub tables: Vec<Table>,
    pub sections: Vec<Section>,
}

#[derive(Clone, Default)]
pub struct Section {
    pub header: Option<HeaderFooter>,
    pub footer: Option<HeaderFooter>,
}

#[derive(Clone, Default)]
pub struct HeaderFooter {
    pub paragraphs: Vec<Paragraph>,
}

#[derive(Clone, Default)]
pub struct Paragraph {
    pub runs: Vec<Run>,
}

/// Smallest span of uniformly-formatted text. The fill engine only ever
/// changes `text`; formatting is owned by the parser that built the tree.
#[derive(Clone)]
pub struct Run {
    pub text: String,
    pub font_name: String,
    pub font_size: f32,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub color: Option<[u8; 3]>, // None = automatic (black)
}

impl Default for Run {
    fn default() -> Self {
        Self {
            text: String::new(),
            font_name: "Calibri".to_string(),
            font_size: 11.0,
            bold: false,
            italic: false,
            underline: false,
            color: None,
        }
    }
}

impl Run {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

impl Paragraph {
    pub fn from_runs(runs: Vec<Run>) -> Self {
        Self { runs }
    }

    /// Logical text of the paragraph: the concatenation of its run texts.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Rewrite the paragraph's text without inventing formatting: the first
    /// run keeps its style and receives the entire new text, every other
    /// run's text is cleared. The new text is not re-split across the old
    /// run boundaries because the source data carries no attribution for it.
    /// A run-less paragraph gets a single default-format run.
    pub fn set_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        match self.runs.split_first_mut() {
            Some((first, rest)) => {
                first.text = text;
                for run in rest {
                    run.text.clear();
                }
            }
            None => self.runs.push(Run::with_text(text)),
        }
    }
}

#[derive(Clone, Default)]
pub struct Table {
    pub rows: Vec<TableRow>,
}

#[derive(Clone, Default)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Clone, Default)]
pub struct TableCell {
    pub paragraphs: Vec<Paragraph>,
}

impl TableCell {
    /// Cell text: paragraph texts joined by newlines.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (i, p) in self.paragraphs.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.push_str(&p.text());
        }
        out
    }

    /// Rewrite the first paragraph's text (run-preserving); a paragraph-less
    /// cell gets a fresh single-run paragraph.
    pub fn set_text(&mut self, text: impl Into<String>) {
        match self.paragraphs.first_mut() {
            Some(p) => p.set_text(text),
            None => self
                .paragraphs
                .push(Paragraph::from_runs(vec![Run::with_text(text)])),
        }
    }
}
