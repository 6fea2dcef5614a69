// File: src/parser/commands.rs
//! One parser per command keyword.
//!
//! Each parser tokenizes with the prefixes its command understands, checks
//! the shape (mandatory prefixes, preamble), runs the field validators and
//! builds the command. The first problem found is returned; errors are never
//! aggregated across fields.
use crate::command::{Command, CommandWord, EditMemberDescriptor};
use crate::error::{ConstraintViolation, ParseError};
use crate::model::{
    Address, Email, EventDate, Index, Member, Name, NameContainsKeywords, Phone, Position, Task,
    TaskName,
};
use crate::parser::tokenizer::{
    ArgumentMultimap, PREFIX_ADDRESS, PREFIX_DATE, PREFIX_EMAIL, PREFIX_MEMBER, PREFIX_NAME,
    PREFIX_PHONE, PREFIX_POSITION, PREFIX_TASK, Prefix, tokenize,
};
use std::collections::BTreeSet;

fn invalid_format(word: CommandWord) -> ParseError {
    ParseError::InvalidFormat {
        usage: word.usage(),
    }
}

/// Tokenizes and checks that every mandatory prefix is present and that no
/// preamble was given.
fn tokenize_prefixed(
    word: CommandWord,
    args: &str,
    prefixes: &[Prefix],
    mandatory: &[Prefix],
) -> Result<ArgumentMultimap, ParseError> {
    let map = tokenize(args, prefixes);
    if !map.contains_all(mandatory) || !map.is_preamble_blank() {
        return Err(invalid_format(word));
    }
    Ok(map)
}

/// Parses an index given as the whole preamble, e.g. `delete 3`.
fn preamble_index(word: CommandWord, preamble: &str) -> Result<Index, ParseError> {
    if preamble.trim().is_empty() {
        return Err(invalid_format(word));
    }
    Index::parse(preamble).map_err(|_| invalid_format(word))
}

/// Validates a single optional field. Absent prefixes give `None` without
/// calling the validator; a present but empty value is still validated.
fn optional<T>(
    map: &ArgumentMultimap,
    prefix: Prefix,
    parse: fn(&str) -> Result<T, ConstraintViolation>,
) -> Result<Option<T>, ParseError> {
    map.value(prefix)
        .map(parse)
        .transpose()
        .map_err(ParseError::from)
}

pub fn parse_positions(values: &[String]) -> Result<BTreeSet<Position>, ConstraintViolation> {
    values.iter().map(|v| Position::parse(v)).collect()
}

/// `pos/` given once with an empty value clears the set.
fn positions_for_edit(values: &[String]) -> Result<Option<BTreeSet<Position>>, ParseError> {
    if values.is_empty() {
        return Ok(None);
    }
    if values.len() == 1 && values[0].trim().is_empty() {
        return Ok(Some(BTreeSet::new()));
    }
    Ok(Some(parse_positions(values)?))
}

fn member_indices(map: &ArgumentMultimap) -> Result<BTreeSet<Index>, ParseError> {
    map.all_values(PREFIX_MEMBER)
        .iter()
        .map(|v| Index::parse(v))
        .collect()
}

fn mandatory<T>(
    map: &ArgumentMultimap,
    prefix: Prefix,
    parse: fn(&str) -> Result<T, ConstraintViolation>,
) -> Result<T, ParseError> {
    // Presence is checked by `tokenize_prefixed` before any field is parsed.
    let raw = map.value(prefix).unwrap_or_default();
    parse(raw).map_err(ParseError::from)
}

pub fn parse_add_member(args: &str) -> Result<Command, ParseError> {
    let map = tokenize_prefixed(
        CommandWord::Padd,
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_POSITION,
        ],
        &[PREFIX_NAME, PREFIX_PHONE],
    )?;

    let name = mandatory(&map, PREFIX_NAME, Name::parse)?;
    let phone = mandatory(&map, PREFIX_PHONE, Phone::parse)?;
    let email = optional(&map, PREFIX_EMAIL, Email::parse)?;
    let address = optional(&map, PREFIX_ADDRESS, Address::parse)?;
    let positions = parse_positions(map.all_values(PREFIX_POSITION))?;

    Ok(Command::AddMember(Member::new(
        name, phone, email, address, positions,
    )))
}

pub fn parse_delete_member(args: &str) -> Result<Command, ParseError> {
    preamble_index(CommandWord::Delete, args).map(Command::DeleteMember)
}

pub fn parse_edit_member(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(
        args,
        &[
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_POSITION,
        ],
    );
    let index = preamble_index(CommandWord::Edit, map.preamble())?;

    let descriptor = EditMemberDescriptor {
        name: optional(&map, PREFIX_NAME, Name::parse)?,
        phone: optional(&map, PREFIX_PHONE, Phone::parse)?,
        email: optional(&map, PREFIX_EMAIL, Email::parse)?,
        address: optional(&map, PREFIX_ADDRESS, Address::parse)?,
        positions: positions_for_edit(map.all_values(PREFIX_POSITION))?,
    };
    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NothingToEdit);
    }
    Ok(Command::EditMember { index, descriptor })
}

pub fn parse_find(args: &str) -> Result<Command, ParseError> {
    if args.trim().is_empty() {
        return Err(invalid_format(CommandWord::Find));
    }
    Ok(Command::Find(NameContainsKeywords::from_input(args)))
}

pub fn parse_add_task(args: &str) -> Result<Command, ParseError> {
    let map = tokenize_prefixed(
        CommandWord::Tadd,
        args,
        &[PREFIX_MEMBER, PREFIX_NAME],
        &[PREFIX_MEMBER, PREFIX_NAME],
    )?;
    let member = Index::parse(map.value(PREFIX_MEMBER).unwrap_or_default())?;
    let name = mandatory(&map, PREFIX_NAME, TaskName::parse)?;
    Ok(Command::AddTask {
        member,
        task: Task::new(name),
    })
}

/// Shared by `tdel` and `tdone`: both take `m/MEMBER_INDEX t/TASK_INDEX`.
fn parse_task_target(word: CommandWord, args: &str) -> Result<(Index, Index), ParseError> {
    let map = tokenize_prefixed(
        word,
        args,
        &[PREFIX_MEMBER, PREFIX_TASK],
        &[PREFIX_MEMBER, PREFIX_TASK],
    )?;
    let member = Index::parse(map.value(PREFIX_MEMBER).unwrap_or_default())?;
    let task = Index::parse(map.value(PREFIX_TASK).unwrap_or_default())?;
    Ok((member, task))
}

pub fn parse_delete_task(args: &str) -> Result<Command, ParseError> {
    let (member, task) = parse_task_target(CommandWord::Tdel, args)?;
    Ok(Command::DeleteTask { member, task })
}

pub fn parse_mark_task(args: &str) -> Result<Command, ParseError> {
    let (member, task) = parse_task_target(CommandWord::Tdone, args)?;
    Ok(Command::MarkTask { member, task })
}

pub fn parse_list_tasks(args: &str) -> Result<Command, ParseError> {
    let map = tokenize_prefixed(
        CommandWord::Tlist,
        args,
        &[PREFIX_MEMBER],
        &[PREFIX_MEMBER],
    )?;
    let member = Index::parse(map.value(PREFIX_MEMBER).unwrap_or_default())?;
    Ok(Command::ListTasks { member })
}

pub fn parse_add_event(args: &str) -> Result<Command, ParseError> {
    let map = tokenize_prefixed(
        CommandWord::Eadd,
        args,
        &[PREFIX_NAME, PREFIX_DATE, PREFIX_MEMBER],
        &[PREFIX_NAME, PREFIX_DATE],
    )?;
    let name = mandatory(&map, PREFIX_NAME, Name::parse)?;
    let date = mandatory(&map, PREFIX_DATE, EventDate::parse)?;
    let members = member_indices(&map)?;
    Ok(Command::AddEvent {
        name,
        date,
        members,
    })
}

/// Members are attached, not replaced; at least one field must be given.
pub fn parse_edit_event(args: &str) -> Result<Command, ParseError> {
    let map = tokenize(args, &[PREFIX_NAME, PREFIX_DATE, PREFIX_MEMBER]);
    let index = preamble_index(CommandWord::Eedit, map.preamble())?;

    let name = optional(&map, PREFIX_NAME, Name::parse)?;
    let date = optional(&map, PREFIX_DATE, EventDate::parse)?;
    let members = member_indices(&map)?;
    if name.is_none() && date.is_none() && members.is_empty() {
        return Err(ParseError::NothingToEdit);
    }
    Ok(Command::EditEvent {
        index,
        name,
        date,
        members,
    })
}

pub fn parse_delete_event(args: &str) -> Result<Command, ParseError> {
    preamble_index(CommandWord::Edel, args).map(Command::DeleteEvent)
}
