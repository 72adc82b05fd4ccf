//! The chat session: one conversation, one turn at a time.

use tracing::{debug, warn};

use crate::conversation::Conversation;
use crate::export::ExportAction;
use crate::gateway::AssistantGateway;
use crate::render::Renderer;
use crate::tools::{greeting, StudyTool, ToolSession};
use crate::types::Message;

/// Turn lifecycle. At most one turn is ever `Sending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum TurnState {
    #[default]
    Idle,
    Sending,
}

/// What a call to [`ChatSession::send`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// The backend answered and the reply is in the conversation.
    /// `export` is set when a tool was armed for this turn.
    Completed {
        reply: String,
        export: Option<ExportAction>,
    },
    /// The turn failed. An error bubble was displayed; nothing beyond
    /// the user message was recorded.
    Failed { detail: String },
    /// Blank input; nothing happened.
    Ignored,
    /// A turn is already in flight; nothing happened.
    Busy,
}

/// Owns the conversation, the tool arming slot, and the renderer, and
/// drives turns through the gateway one at a time.
pub struct ChatSession {
    gateway: AssistantGateway,
    renderer: Box<dyn Renderer>,
    conversation: Conversation,
    tools: ToolSession,
    state: TurnState,
    last_export: Option<ExportAction>,
}

impl ChatSession {
    pub fn new(gateway: AssistantGateway, renderer: Box<dyn Renderer>) -> Self {
        Self {
            gateway,
            renderer,
            conversation: Conversation::new(),
            tools: ToolSession::new(),
            state: TurnState::Idle,
            last_export: None,
        }
    }

    /// Show the intro bubble. Display-only: the greeting is never part
    /// of the history replayed to the backend.
    pub fn greet(&mut self) {
        self.renderer.display_message(&Message::assistant(greeting()));
    }

    /// Arm `tool` for the next sent message and announce it. The notice
    /// is display-only, like the greeting.
    pub fn arm_tool(&mut self, tool: StudyTool) {
        self.tools.arm(tool);
        self.renderer
            .display_message(&Message::assistant(tool.armed_notice()));
    }

    pub fn armed_tool(&self) -> Option<StudyTool> {
        self.tools.armed()
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    /// The most recent export action any turn produced, if one exists.
    pub fn last_export(&self) -> Option<&ExportAction> {
        self.last_export.as_ref()
    }

    /// Run one turn against the backend.
    ///
    /// Blank input is ignored and a turn already in flight is rejected,
    /// both without side effects. Otherwise the armed tool (if any) is
    /// consumed up front, the user message is echoed and recorded, and
    /// the turn resolves to `Completed` or `Failed`. Whatever happens,
    /// the session is idle again when this returns.
    pub async fn send(&mut self, input: &str) -> TurnOutcome {
        if self.state == TurnState::Sending {
            return TurnOutcome::Busy;
        }
        let text = input.trim();
        if text.is_empty() {
            return TurnOutcome::Ignored;
        }

        self.state = TurnState::Sending;
        let armed = self.tools.consume_armed();
        // History is the record of prior turns only; the new text
        // travels in the prompt field.
        let history = self.conversation.messages().to_vec();

        let user = Message::user(text);
        self.conversation.push(user.clone());
        self.renderer.display_message(&user);

        debug!(history_len = history.len(), armed = ?armed, "turn started");

        let outcome = match self.gateway.send(text, &history).await {
            Ok(reply) => {
                let assistant = Message::assistant(reply.clone());
                self.conversation.push(assistant.clone());
                self.renderer.display_message(&assistant);

                let export = armed.map(|tool| ExportAction::new(tool.title(), &reply));
                if let Some(action) = &export {
                    self.last_export = Some(action.clone());
                }
                debug!(chars = reply.len(), export = export.is_some(), "turn completed");
                TurnOutcome::Completed { reply, export }
            }
            Err(err) => {
                warn!(error = %err, "turn failed");
                let detail = err.to_string();
                self.renderer
                    .display_message(&Message::error(format!("Error: {detail}")));
                TurnOutcome::Failed { detail }
            }
        };

        // Both arms land here; Sending never survives past the turn.
        self.state = TurnState::Idle;
        outcome
    }
}
