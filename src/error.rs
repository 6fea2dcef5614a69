// File: src/error.rs
//! Error kinds for the command pipeline.
//!
//! | Kind | Type | Shown with usage |
//! |------|------|------------------|
//! | Field constraint | [`ConstraintViolation`] | yes (wrapped in [`ParseError`]) |
//! | Syntax | [`ParseError`] | yes, except `NothingToEdit` and `UnknownCommand` |
//! | Business rule | [`CommandError`] | no |
//!
//! Data-integrity failures on load surface as a [`ConstraintViolation`]
//! inside an `anyhow::Error` from the storage layer.

use thiserror::Error;

pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format!";
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

/// A single literal failed its field's syntactic constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ConstraintViolation {
    pub message: &'static str,
}

impl ConstraintViolation {
    pub const fn new(message: &'static str) -> Self {
        Self { message }
    }
}

/// Failure to turn a raw line into a [`crate::command::Command`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Blank input after trimming.
    #[error("{MESSAGE_INVALID_COMMAND_FORMAT} No command given.\n{usage}")]
    NoCommand { usage: &'static str },

    /// The first token matches no keyword.
    #[error("{MESSAGE_UNKNOWN_COMMAND}: {word}")]
    UnknownCommand { word: String },

    /// Missing mandatory prefix, forbidden preamble, or similar shape problem.
    #[error("{MESSAGE_INVALID_COMMAND_FORMAT}\n{usage}")]
    InvalidFormat { usage: &'static str },

    #[error("{MESSAGE_INVALID_INDEX}")]
    InvalidIndex,

    #[error("At least one field to edit must be provided.")]
    NothingToEdit,

    #[error(transparent)]
    Field(#[from] ConstraintViolation),
}

impl ParseError {
    /// True when the message already carries the command's usage string.
    pub fn includes_usage(&self) -> bool {
        matches!(
            self,
            ParseError::NoCommand { .. } | ParseError::InvalidFormat { .. }
        )
    }

    /// True when the message should be followed by the command's usage.
    /// `NothingToEdit` names the problem on its own.
    pub fn needs_usage(&self) -> bool {
        matches!(self, ParseError::InvalidIndex | ParseError::Field(_))
    }
}

/// A well-formed command broke a rule of the current model state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("This member already exists in the roster")]
    DuplicateMember,

    #[error("The member index provided is invalid")]
    InvalidMemberIndex,

    #[error("The task index provided is invalid")]
    InvalidTaskIndex,

    #[error("The event index provided is invalid")]
    InvalidEventIndex,

    #[error("This task already exists in {member}'s task list")]
    DuplicateTask { member: String },

    #[error("This event already exists in the roster")]
    DuplicateEvent,

    #[error("Member not found: {name}")]
    MemberNotFound { name: String },

    #[error("Task not found: {name}")]
    TaskNotFound { name: String },

    #[error("Event not found: {name}")]
    EventNotFound { name: String },
}
