//! The per-turn tool arming slot.

use super::StudyTool;

/// Holds the tool that will shape the next sent message. At most one
/// tool is armed at a time; arming again replaces the previous choice.
#[derive(Debug, Clone, Default)]
pub struct ToolSession {
    armed: Option<StudyTool>,
}

impl ToolSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `tool` for the next turn. Last selection wins.
    pub fn arm(&mut self, tool: StudyTool) {
        self.armed = Some(tool);
    }

    /// Take the armed tool, leaving the slot empty. Called once at the
    /// start of a turn, so the tool applies to exactly one exchange.
    pub fn consume_armed(&mut self) -> Option<StudyTool> {
        self.armed.take()
    }

    /// The currently armed tool, if any, without consuming it.
    pub fn armed(&self) -> Option<StudyTool> {
        self.armed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_unarmed() {
        let mut session = ToolSession::new();
        assert_eq!(session.armed(), None);
        assert_eq!(session.consume_armed(), None);
    }

    #[test]
    fn arming_twice_keeps_the_last_selection() {
        let mut session = ToolSession::new();
        session.arm(StudyTool::Flashcards);
        session.arm(StudyTool::Guide);
        assert_eq!(session.consume_armed(), Some(StudyTool::Guide));
    }

    #[test]
    fn consume_clears_the_slot() {
        let mut session = ToolSession::new();
        session.arm(StudyTool::Test);
        assert_eq!(session.consume_armed(), Some(StudyTool::Test));
        assert_eq!(session.consume_armed(), None);
        assert_eq!(session.armed(), None);
    }
}
