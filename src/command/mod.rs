// File: src/command/mod.rs
//! The closed set of commands and the single `apply` operation.
//!
//! A `Command` is pure data built by a parser. `apply` performs the checks
//! that need the current model (duplicates, index ranges) and then mutates
//! or reads it. A failed `apply` leaves the model untouched.
mod event;
mod member;
mod task;
pub mod word;

pub use member::EditMemberDescriptor;
pub use word::CommandWord;

use crate::error::CommandError;
use crate::model::{EventDate, Index, Member, Name, NameContainsKeywords, Task};
use crate::parser::tokenizer::{
    PREFIX_ADDRESS, PREFIX_DATE, PREFIX_EMAIL, PREFIX_MEMBER, PREFIX_NAME, PREFIX_PHONE,
    PREFIX_POSITION, PREFIX_TASK,
};
use crate::store::Model;
use std::collections::BTreeSet;
use std::fmt;

pub const MESSAGE_SHOWING_HELP: &str = "Opened help window.";
pub const MESSAGE_EXITING: &str = "Exiting roster as requested ...";

/// Outcome of a successful `apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    pub feedback: String,
    pub show_help: bool,
    pub exit: bool,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddMember(Member),
    DeleteMember(Index),
    EditMember {
        index: Index,
        descriptor: EditMemberDescriptor,
    },
    Find(NameContainsKeywords),
    List,
    Clear,
    AddTask {
        member: Index,
        task: Task,
    },
    DeleteTask {
        member: Index,
        task: Index,
    },
    MarkTask {
        member: Index,
        task: Index,
    },
    ListTasks {
        member: Index,
    },
    AddEvent {
        name: Name,
        date: EventDate,
        members: BTreeSet<Index>,
    },
    EditEvent {
        index: Index,
        name: Option<Name>,
        date: Option<EventDate>,
        members: BTreeSet<Index>,
    },
    DeleteEvent(Index),
    ListEvents,
    Help,
    Exit,
}

impl Command {
    pub fn word(&self) -> CommandWord {
        match self {
            Command::AddMember(_) => CommandWord::Padd,
            Command::DeleteMember(_) => CommandWord::Delete,
            Command::EditMember { .. } => CommandWord::Edit,
            Command::Find(_) => CommandWord::Find,
            Command::List => CommandWord::List,
            Command::Clear => CommandWord::Clear,
            Command::AddTask { .. } => CommandWord::Tadd,
            Command::DeleteTask { .. } => CommandWord::Tdel,
            Command::MarkTask { .. } => CommandWord::Tdone,
            Command::ListTasks { .. } => CommandWord::Tlist,
            Command::AddEvent { .. } => CommandWord::Eadd,
            Command::EditEvent { .. } => CommandWord::Eedit,
            Command::DeleteEvent(_) => CommandWord::Edel,
            Command::ListEvents => CommandWord::Elist,
            Command::Help => CommandWord::Help,
            Command::Exit => CommandWord::Exit,
        }
    }

    pub fn apply(&self, model: &mut dyn Model) -> Result<CommandResult, CommandError> {
        log::debug!("Applying '{}'", self);
        match self {
            Command::AddMember(candidate) => member::add(model, candidate),
            Command::DeleteMember(index) => member::delete(model, *index),
            Command::EditMember { index, descriptor } => member::edit(model, *index, descriptor),
            Command::Find(predicate) => member::find(model, predicate),
            Command::List => member::list(model),
            Command::Clear => member::clear(model),
            Command::AddTask { member, task } => task::add(model, *member, task),
            Command::DeleteTask { member, task } => task::delete(model, *member, *task),
            Command::MarkTask { member, task } => task::toggle(model, *member, *task),
            Command::ListTasks { member } => task::list(model, *member),
            Command::AddEvent {
                name,
                date,
                members,
            } => event::add(model, name, *date, members),
            Command::EditEvent {
                index,
                name,
                date,
                members,
            } => event::edit(model, *index, name.as_ref(), *date, members),
            Command::DeleteEvent(index) => event::delete(model, *index),
            Command::ListEvents => event::list(model),
            Command::Help => Ok(CommandResult {
                show_help: true,
                ..CommandResult::new(MESSAGE_SHOWING_HELP)
            }),
            Command::Exit => Ok(CommandResult {
                exit: true,
                ..CommandResult::new(MESSAGE_EXITING)
            }),
        }
    }
}

/// Looks up a member through the currently displayed member list.
pub(crate) fn member_at(model: &dyn Model, index: Index) -> Result<Member, CommandError> {
    let shown = model.filtered_member_list();
    index
        .checked(shown.len())
        .map(|i| shown[i].clone())
        .ok_or(CommandError::InvalidMemberIndex)
}

/// Canonical input text: parsing it yields an equal command.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word())?;
        match self {
            Command::AddMember(m) => {
                write!(f, " {}{} {}{}", PREFIX_NAME, m.name(), PREFIX_PHONE, m.phone())?;
                if let Some(email) = m.email() {
                    write!(f, " {}{}", PREFIX_EMAIL, email)?;
                }
                if let Some(address) = m.address() {
                    write!(f, " {}{}", PREFIX_ADDRESS, address)?;
                }
                for position in m.positions() {
                    write!(f, " {}{}", PREFIX_POSITION, position)?;
                }
                Ok(())
            }
            Command::DeleteMember(index) | Command::DeleteEvent(index) => write!(f, " {}", index),
            Command::EditMember { index, descriptor } => {
                write!(f, " {}", index)?;
                if let Some(name) = &descriptor.name {
                    write!(f, " {}{}", PREFIX_NAME, name)?;
                }
                if let Some(phone) = &descriptor.phone {
                    write!(f, " {}{}", PREFIX_PHONE, phone)?;
                }
                if let Some(email) = &descriptor.email {
                    write!(f, " {}{}", PREFIX_EMAIL, email)?;
                }
                if let Some(address) = &descriptor.address {
                    write!(f, " {}{}", PREFIX_ADDRESS, address)?;
                }
                match &descriptor.positions {
                    Some(positions) if positions.is_empty() => write!(f, " {}", PREFIX_POSITION)?,
                    Some(positions) => {
                        for position in positions {
                            write!(f, " {}{}", PREFIX_POSITION, position)?;
                        }
                    }
                    None => {}
                }
                Ok(())
            }
            Command::Find(predicate) => {
                for keyword in predicate.keywords() {
                    write!(f, " {}", keyword)?;
                }
                Ok(())
            }
            Command::AddTask { member, task } => {
                write!(f, " {}{} {}{}", PREFIX_MEMBER, member, PREFIX_NAME, task.name())
            }
            Command::DeleteTask { member, task } | Command::MarkTask { member, task } => {
                write!(f, " {}{} {}{}", PREFIX_MEMBER, member, PREFIX_TASK, task)
            }
            Command::ListTasks { member } => write!(f, " {}{}", PREFIX_MEMBER, member),
            Command::AddEvent {
                name,
                date,
                members,
            } => {
                write!(f, " {}{} {}{}", PREFIX_NAME, name, PREFIX_DATE, date)?;
                for member in members {
                    write!(f, " {}{}", PREFIX_MEMBER, member)?;
                }
                Ok(())
            }
            Command::EditEvent {
                index,
                name,
                date,
                members,
            } => {
                write!(f, " {}", index)?;
                if let Some(name) = name {
                    write!(f, " {}{}", PREFIX_NAME, name)?;
                }
                if let Some(date) = date {
                    write!(f, " {}{}", PREFIX_DATE, date)?;
                }
                for member in members {
                    write!(f, " {}{}", PREFIX_MEMBER, member)?;
                }
                Ok(())
            }
            Command::List | Command::Clear | Command::ListEvents | Command::Help | Command::Exit => {
                Ok(())
            }
        }
    }
}
