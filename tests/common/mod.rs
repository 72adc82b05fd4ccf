#![allow(dead_code)]

//! Shared test helpers: renderer and document-writer doubles.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use ivy::error::{IvyError, Result};
use ivy::export::DocumentWriter;
use ivy::gateway::AssistantGateway;
use ivy::render::Renderer;
use ivy::session::ChatSession;
use ivy::types::Message;

/// Renderer double that records every displayed message.
#[derive(Default)]
pub struct RecordingRenderer {
    seen: Arc<Mutex<Vec<Message>>>,
}

impl RecordingRenderer {
    pub fn handle(&self) -> Arc<Mutex<Vec<Message>>> {
        self.seen.clone()
    }
}

impl Renderer for RecordingRenderer {
    fn display_message(&mut self, message: &Message) {
        self.seen.lock().unwrap().push(message.clone());
    }
}

/// Build a session talking to `endpoint`, plus a handle on its display log.
pub fn session_for(endpoint: &str) -> (ChatSession, Arc<Mutex<Vec<Message>>>) {
    let renderer = RecordingRenderer::default();
    let seen = renderer.handle();
    let gateway =
        AssistantGateway::new(endpoint, Duration::from_secs(5)).expect("gateway should build");
    (ChatSession::new(gateway, Box::new(renderer)), seen)
}

/// Writer double that records pagination. Every logical line written
/// reports `wrap_factor` wrapped lines.
pub struct CountingWriter {
    wrap_factor: usize,
    /// Logical lines received, grouped by page.
    pub pages: Vec<Vec<String>>,
    pub saved_as: Option<String>,
}

impl CountingWriter {
    pub fn new() -> Self {
        Self::with_wrap_factor(1)
    }

    pub fn with_wrap_factor(wrap_factor: usize) -> Self {
        Self {
            wrap_factor,
            pages: Vec::new(),
            saved_as: None,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

impl DocumentWriter for CountingWriter {
    fn new_document(&mut self) {
        self.pages = vec![Vec::new()];
        self.saved_as = None;
    }

    fn write_line(&mut self, text: &str) -> usize {
        self.pages
            .last_mut()
            .expect("new_document should come first")
            .push(text.to_string());
        self.wrap_factor
    }

    fn new_page(&mut self) {
        self.pages.push(Vec::new());
    }

    fn save(&mut self, filename: &str) -> Result<PathBuf> {
        self.saved_as = Some(filename.to_string());
        Ok(PathBuf::from(format!("{filename}.doc")))
    }
}

/// Writer double whose save always fails.
pub struct FailingWriter;

impl DocumentWriter for FailingWriter {
    fn new_document(&mut self) {}

    fn write_line(&mut self, _text: &str) -> usize {
        1
    }

    fn new_page(&mut self) {}

    fn save(&mut self, _filename: &str) -> Result<PathBuf> {
        Err(IvyError::ExportUnavailable("writer offline".to_string()))
    }
}
