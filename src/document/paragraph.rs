//! Paragraph and run types for cell content.
use serde::{Deserialize, Serialize};

/// A run of text sharing one set of character properties.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
}

impl Run {
    /// Create a plain run.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            ..Self::default()
        }
    }

    /// Set bold formatting.
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    /// Set italic formatting.
    pub fn italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }

    /// Set underline formatting.
    pub fn underline(mut self, underline: bool) -> Self {
        self.underline = underline;
        self
    }
}

/// A paragraph in a Word document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Paragraph {
    runs: Vec<Run>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the runs in this paragraph.
    #[inline]
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    /// Get the text content of the paragraph.
    pub fn text(&self) -> String {
        self.runs.iter().map(|run| run.text.as_str()).collect()
    }

    /// Whether the paragraph has no text at all.
    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|run| run.text.is_empty())
    }

    /// Append a run.
    pub fn add_run(&mut self, run: Run) -> &mut Self {
        self.runs.push(run);
        self
    }

    /// Append a plain run with text.
    pub fn add_run_with_text(&mut self, text: &str) -> &mut Self {
        self.add_run(Run::new(text))
    }
}
