//! Line accumulator for DOT output.

use serde::Serialize;

/// Collects output lines and is consumed exactly once by [`finish`](Self::finish).
#[derive(Debug, Default)]
pub struct DotWriter {
    text: String,
    line_count: usize,
}

impl DotWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one chunk of output. Chunks are separated by newlines; a chunk
    /// may itself span several lines.
    pub fn line(&mut self, chunk: impl AsRef<str>) {
        let chunk = chunk.as_ref();
        if self.line_count > 0 {
            self.text.push('\n');
        }
        self.text.push_str(chunk);
        self.line_count += 1 + chunk.matches('\n').count();
    }

    pub fn finish(self) -> DotSource {
        DotSource {
            text: self.text,
            line_count: self.line_count,
        }
    }
}

/// Finished DOT text together with its number of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DotSource {
    #[serde(rename = "source")]
    text: String,
    line_count: usize,
}

impl DotSource {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn into_parts(self) -> (String, usize) {
        (self.text, self.line_count)
    }
}
