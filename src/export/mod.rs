//! Document export: pagination over a writer seam.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IvyError, Result};

// Letter-page geometry: 56pt top margin, 18pt body lines, page floor
// at 740pt.
const TOP_MARGIN_PT: f32 = 56.0;
const LINE_HEIGHT_PT: f32 = 18.0;
const PAGE_FLOOR_PT: f32 = 740.0;

/// How many wrapped body lines fit on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLayout {
    pub lines_per_page: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            lines_per_page: ((PAGE_FLOOR_PT - TOP_MARGIN_PT) / LINE_HEIGHT_PT) as usize,
        }
    }
}

/// Sink for exported documents. Implementations own the concrete format
/// (column width, page representation, file extension).
pub trait DocumentWriter: Send {
    /// Start a fresh document, discarding any unsaved one.
    fn new_document(&mut self);

    /// Write one logical line at the current position, wrapping to the
    /// writer's column width. Returns the number of wrapped lines
    /// produced.
    fn write_line(&mut self, text: &str) -> usize;

    /// Begin a new page.
    fn new_page(&mut self);

    /// Persist the document as `filename` (the extension is the
    /// writer's). Returns the path written.
    fn save(&mut self, filename: &str) -> Result<PathBuf>;
}

/// A reply captured for export, snapshotted at the turn that produced
/// it. Re-running the action re-renders the same text even after the
/// conversation has moved on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportAction {
    title: String,
    body: String,
}

impl ExportAction {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Render the captured reply through `writer` and save it.
    pub fn run(&self, writer: &mut dyn DocumentWriter) -> Result<PathBuf> {
        render(writer, PageLayout::default(), &self.title, &self.body)
    }
}

/// Drive `writer` through one paginated document: the body's non-empty
/// lines in order, a page break before any line that would start past
/// capacity. Wrapping is the writer's (a logical line may overflow the
/// floor; breaks never land mid-line).
pub fn render(
    writer: &mut dyn DocumentWriter,
    layout: PageLayout,
    title: &str,
    body: &str,
) -> Result<PathBuf> {
    writer.new_document();

    let mut used = 0usize;
    for line in body.lines().filter(|line| !line.is_empty()) {
        if used >= layout.lines_per_page {
            writer.new_page();
            used = 0;
        }
        used += writer.write_line(line);
    }

    let path = writer.save(&filename_for(title))?;
    debug!(path = %path.display(), "document saved");
    Ok(path)
}

/// Derive a filename stem from a document title: whitespace runs become
/// single underscores. No dedup against earlier exports.
pub fn filename_for(title: &str) -> String {
    title.split_whitespace().collect::<Vec<_>>().join("_")
}

/// Default adapter: plain-text documents, word-wrapped at a fixed
/// column, pages separated by form feeds, saved as `<name>.txt`.
#[derive(Debug, Clone)]
pub struct TextDocumentWriter {
    dir: PathBuf,
    column: usize,
    pages: Vec<Vec<String>>,
}

pub const DEFAULT_COLUMN: usize = 80;

impl TextDocumentWriter {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            column: DEFAULT_COLUMN,
            pages: Vec::new(),
        }
    }

    pub fn with_column(mut self, column: usize) -> Self {
        self.column = column;
        self
    }
}

impl DocumentWriter for TextDocumentWriter {
    fn new_document(&mut self) {
        self.pages = vec![Vec::new()];
    }

    fn write_line(&mut self, text: &str) -> usize {
        let wrapped = wrap(text, self.column);
        let count = wrapped.len();
        if let Some(page) = self.pages.last_mut() {
            page.extend(wrapped);
        } else {
            self.pages.push(wrapped);
        }
        count
    }

    fn new_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn save(&mut self, filename: &str) -> Result<PathBuf> {
        let path = self.dir.join(format!("{filename}.txt"));
        let document = self
            .pages
            .iter()
            .map(|page| page.join("\n"))
            .collect::<Vec<_>>()
            .join("\n\u{c}\n");

        std::fs::create_dir_all(&self.dir)
            .map_err(|e| IvyError::ExportUnavailable(e.to_string()))?;
        std::fs::write(&path, document + "\n")
            .map_err(|e| IvyError::ExportUnavailable(e.to_string()))?;
        Ok(path)
    }
}

/// Greedy word wrap at `column` characters. Words longer than the
/// column are kept whole; breaks never split a word.
fn wrap(text: &str, column: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= column {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
