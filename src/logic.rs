// File: src/logic.rs
//! One interactive session: parse a line, apply it, persist the result.
use crate::command::{CommandResult, CommandWord};
use crate::error::{CommandError, ParseError};
use crate::parser;
use crate::storage::Storage;
use crate::store::{AddressBook, Model, ModelManager};
use anyhow::Result;
use std::fmt;
use thiserror::Error;

/// A parse failure together with the usage string of the command it was
/// meant for, if the keyword was recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub error: ParseError,
    pub usage: Option<&'static str>,
}

impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.usage {
            Some(usage) if self.error.needs_usage() => write!(f, "{}\n{}", self.error, usage),
            _ => write!(f, "{}", self.error),
        }
    }
}

#[derive(Debug, Error)]
pub enum LogicError {
    #[error("{0}")]
    Syntax(SyntaxError),

    #[error(transparent)]
    Rule(#[from] CommandError),

    #[error("Could not save data to file: {0:#}")]
    Storage(anyhow::Error),
}

pub struct Logic<S: Storage> {
    model: ModelManager,
    storage: S,
}

impl<S: Storage> Logic<S> {
    pub fn new(model: ModelManager, storage: S) -> Self {
        Self { model, storage }
    }

    /// Loads the snapshot from `storage`. A missing file gives an empty
    /// roster; an unreadable one is an error for the caller to handle.
    pub fn open(storage: S) -> Result<Self> {
        let book = match storage.load()? {
            Some(book) => book,
            None => {
                log::info!("No roster found, starting with an empty one");
                AddressBook::new()
            }
        };
        Ok(Self::new(ModelManager::new(book), storage))
    }

    /// Like `open`, but starts from an empty roster when the file cannot be
    /// read. The storage keeps refusing to save in that case, so the
    /// unreadable file is left alone.
    pub fn open_or_empty(storage: S) -> Self {
        match storage.load() {
            Ok(book) => Self::new(ModelManager::new(book.unwrap_or_default()), storage),
            Err(e) => {
                log::warn!("Could not read roster, starting with an empty one: {:#}", e);
                Self::new(ModelManager::default(), storage)
            }
        }
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn execute(&mut self, line: &str) -> Result<CommandResult, LogicError> {
        let command = parser::parse_command(line).map_err(|error| {
            log::debug!("Rejected input '{}': {}", line, error);
            LogicError::Syntax(SyntaxError {
                usage: parser::keyword_of(line).map(|w: CommandWord| w.usage()),
                error,
            })
        })?;

        let result = command.apply(&mut self.model)?;

        if command.word().is_mutating() {
            self.storage
                .save(self.model.address_book())
                .map_err(|e| {
                    log::warn!("Failed to save roster: {:#}", e);
                    LogicError::Storage(e)
                })?;
        }
        Ok(result)
    }
}
