//! Ivy — study tutor chat client
//!
//! Client for a remote study-assistant backend. Holds the conversation,
//! arms one of four study-tool templates for the next message, and can
//! export a tool-shaped reply as a paginated document.
//!
//! # Quick Start
//!
//! ```no_run
//! use ivy::prelude::*;
//!
//! # async fn example() -> ivy::error::Result<()> {
//! let config = IvyConfig::from_env();
//! let gateway = AssistantGateway::new(&config.backend_url, config.timeout)?;
//! let mut session = ChatSession::new(gateway, Box::new(TerminalRenderer));
//! session.send("Explain photosynthesis in two lines").await;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod conversation;
pub mod error;
pub mod export;
pub mod gateway;
pub mod prelude;
pub mod render;
pub mod session;
pub mod tools;
pub mod types;
