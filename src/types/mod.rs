//! Core types for Ivy.

pub mod message;

pub use message::*;
