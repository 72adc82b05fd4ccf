//! Convenience re-exports for common use.

pub use crate::error::{IvyError, Result};
pub use crate::types::{Message, Role};
pub use crate::config::IvyConfig;
pub use crate::conversation::Conversation;
pub use crate::export::{DocumentWriter, ExportAction, PageLayout, TextDocumentWriter};
pub use crate::gateway::AssistantGateway;
pub use crate::render::{Renderer, TerminalRenderer};
pub use crate::session::{ChatSession, TurnOutcome};
pub use crate::tools::{StudyTool, ToolSession};
