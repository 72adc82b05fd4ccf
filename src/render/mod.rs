//! Message display seam.

use crate::types::{Message, Role};

/// Sink for messages the session wants shown. The session never prints
/// directly; everything user-visible goes through here.
pub trait Renderer: Send {
    fn display_message(&mut self, message: &Message);
}

/// Terminal renderer: assistant markdown is flattened to plain text,
/// user echoes are literal, errors go to stderr.
#[derive(Debug, Default)]
pub struct TerminalRenderer;

impl Renderer for TerminalRenderer {
    fn display_message(&mut self, message: &Message) {
        match (message.role, message.is_error) {
            (Role::User, _) => println!("> {}", message.content),
            (Role::Assistant, true) => eprintln!("❌ {}", message.content),
            (Role::Assistant, false) => println!("{}\n", flatten_markdown(&message.content)),
        }
    }
}

/// Flatten markdown to terminal text: headings and paragraphs become
/// blank-line separated blocks, list items get a bullet, inline markup
/// is dropped, code is kept literal.
fn flatten_markdown(text: &str) -> String {
    use pulldown_cmark::{Event, Parser, Tag, TagEnd};

    let mut out = String::new();
    for event in Parser::new(text) {
        match event {
            Event::Start(Tag::Item) => out.push_str("• "),
            Event::Text(t) => out.push_str(&t),
            Event::Code(t) => out.push_str(&t),
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::End(TagEnd::Paragraph) | Event::End(TagEnd::Heading(_)) => {
                out.push_str("\n\n");
            }
            Event::End(TagEnd::Item) | Event::End(TagEnd::CodeBlock) | Event::Rule => {
                out.push('\n');
            }
            _ => {}
        }
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn headings_become_blocks() {
        assert_eq!(flatten_markdown("# Title\n\nBody"), "Title\n\nBody");
    }

    #[test]
    fn list_items_get_bullets() {
        assert_eq!(flatten_markdown("- first\n- second"), "• first\n• second");
    }

    #[test]
    fn inline_markup_is_dropped() {
        assert_eq!(flatten_markdown("**Q:** What is `foo`?"), "Q: What is foo?");
    }

    #[test]
    fn soft_breaks_keep_line_structure() {
        assert_eq!(flatten_markdown("line one\nline two"), "line one\nline two");
    }

    #[test]
    fn fenced_code_is_kept_literal() {
        assert_eq!(flatten_markdown("```\nlet x = 1;\n```"), "let x = 1;");
    }
}
