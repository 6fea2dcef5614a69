// File: ./src/parser/mod.rs
//! Routes a raw input line to the parser registered for its keyword.
pub mod commands;
pub mod tokenizer;

use crate::command::{Command, CommandWord};
use crate::error::ParseError;
use std::str::FromStr;

/// Splits trimmed input into its keyword and the untouched remainder,
/// leading whitespace included.
fn split_keyword(input: &str) -> (&str, &str) {
    match input.find(char::is_whitespace) {
        Some(i) => (&input[..i], &input[i..]),
        None => (input, ""),
    }
}

/// The command word `input` starts with, if it names one.
pub fn keyword_of(input: &str) -> Option<CommandWord> {
    let (keyword, _) = split_keyword(input.trim());
    CommandWord::from_str(keyword).ok()
}

/// Parses one line of user input into a command.
pub fn parse_command(input: &str) -> Result<Command, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ParseError::NoCommand {
            usage: CommandWord::Help.usage(),
        });
    }

    let (keyword, args) = split_keyword(trimmed);
    let word = CommandWord::from_str(keyword).map_err(|_| ParseError::UnknownCommand {
        word: keyword.to_string(),
    })?;
    log::debug!("Routing '{}' with args '{}'", word, args);
    parse_with(word, args)
}

/// Dispatches to the parser for `word`. Keywords without arguments ignore
/// whatever follows them.
pub fn parse_with(word: CommandWord, args: &str) -> Result<Command, ParseError> {
    match word {
        CommandWord::Padd => commands::parse_add_member(args),
        CommandWord::Delete => commands::parse_delete_member(args),
        CommandWord::Edit => commands::parse_edit_member(args),
        CommandWord::Find => commands::parse_find(args),
        CommandWord::List => Ok(Command::List),
        CommandWord::Clear => Ok(Command::Clear),
        CommandWord::Tadd => commands::parse_add_task(args),
        CommandWord::Tdel => commands::parse_delete_task(args),
        CommandWord::Tdone => commands::parse_mark_task(args),
        CommandWord::Tlist => commands::parse_list_tasks(args),
        CommandWord::Eadd => commands::parse_add_event(args),
        CommandWord::Eedit => commands::parse_edit_event(args),
        CommandWord::Edel => commands::parse_delete_event(args),
        CommandWord::Elist => Ok(Command::ListEvents),
        CommandWord::Help => Ok(Command::Help),
        CommandWord::Exit => Ok(Command::Exit),
    }
}
