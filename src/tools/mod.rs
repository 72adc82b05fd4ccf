//! Study tool registry and per-turn arming.

pub mod session;

pub use session::ToolSession;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The four study tools. The set is closed: `title` and `template` are
/// total over it and have no failure mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StudyTool {
    Flashcards,
    Test,
    Guide,
    Solution,
}

impl StudyTool {
    /// Every tool, in menu order.
    pub const ALL: [StudyTool; 4] = [
        StudyTool::Flashcards,
        StudyTool::Test,
        StudyTool::Guide,
        StudyTool::Solution,
    ];

    /// Display title, also used to derive export filenames.
    pub fn title(self) -> &'static str {
        match self {
            StudyTool::Flashcards => "Flashcards",
            StudyTool::Test => "Test mode",
            StudyTool::Guide => "Study guide",
            StudyTool::Solution => "Solution",
        }
    }

    /// Prompt template inserted into the composer when the tool is armed.
    pub fn template(self) -> &'static str {
        match self {
            StudyTool::Flashcards => FLASHCARDS_TEMPLATE,
            StudyTool::Test => TEST_TEMPLATE,
            StudyTool::Guide => GUIDE_TEMPLATE,
            StudyTool::Solution => SOLUTION_TEMPLATE,
        }
    }

    /// Notice shown when the tool is armed. Display-only, never recorded.
    pub fn armed_notice(self) -> String {
        format!("{} template inserted below. Customize and send!", self.title())
    }
}

const FLASHCARDS_TEMPLATE: &str = r#"You are Ivy, a helpful study assistant. Build concise front/back flashcards.
Prompt format:
Topic: [Insert Topic]
Level: basic | intermediate | advanced
Count: [Insert Count here]]

Return as a bulleted list "Q: ..." then "A: ...". Keep each Q/A short."#;

const TEST_TEMPLATE: &str = "You are Ivy. Create a short practice test.
Choose question types suitable for the subject.
Prompt format:
Topic: [Insert Topic]
Difficulty: easy | medium | hard
NumQuestions: [Number of Questions]";

const GUIDE_TEMPLATE: &str = "You are Ivy. Produce a clean study guide from key ideas.
Prompt format:
Title: [Insert Title]
Key points: [bulleted or comma list]
Return sections with headers, 1–2 sentence explanations, and an overview at top.";

const SOLUTION_TEMPLATE: &str = "You are Ivy. Solve the following problem step by step.
Format:
Problem: [paste here]
Show reasoning clearly, then final answer.";

/// Intro shown when a session opens. Displayed through the renderer,
/// never appended to the conversation.
pub fn greeting() -> &'static str {
    "Hi, I’m Ivy — your personal study tutor.\n\n\
     I can help you:\n\
     • Build Flashcards from any topic and export them to a document\n\
     • Enter Test mode to generate practice questions (by topic, difficulty, or from your own list)\n\
     • Create a structured Study guide from key ideas\n\
     • Ask for a Solution to a problem, step-by-step\n\n\
     Select a tool with /flashcards, /test, /guide or /solution, or just start chatting!"
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn titles_are_total() {
        for tool in StudyTool::ALL {
            assert!(!tool.title().is_empty());
            assert!(!tool.template().is_empty());
        }
    }

    #[test]
    fn titles_match_registry() {
        assert_eq!(StudyTool::Flashcards.title(), "Flashcards");
        assert_eq!(StudyTool::Test.title(), "Test mode");
        assert_eq!(StudyTool::Guide.title(), "Study guide");
        assert_eq!(StudyTool::Solution.title(), "Solution");
    }

    #[test]
    fn lowercase_names_round_trip() {
        for tool in StudyTool::ALL {
            let name = tool.to_string();
            assert_eq!(name, name.to_lowercase());
            let parsed: StudyTool = name.parse().unwrap();
            assert_eq!(parsed, tool);
        }
    }

    #[test]
    fn unknown_name_fails_to_parse() {
        assert!("essay".parse::<StudyTool>().is_err());
    }

    #[test]
    fn templates_carry_prompt_scaffolding() {
        assert!(StudyTool::Flashcards.template().contains("Topic: [Insert Topic]"));
        assert!(StudyTool::Test.template().contains("Difficulty: easy | medium | hard"));
        assert!(StudyTool::Guide.template().contains("Key points:"));
        assert!(StudyTool::Solution.template().contains("Problem: [paste here]"));
    }

    #[test]
    fn armed_notice_names_the_tool() {
        assert_eq!(
            StudyTool::Test.armed_notice(),
            "Test mode template inserted below. Customize and send!"
        );
    }
}
