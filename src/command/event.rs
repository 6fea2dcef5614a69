// File: src/command/event.rs
use super::{CommandResult, member_at};
use crate::error::CommandError;
use crate::model::{Event, EventDate, Index, Member, Name};
use crate::store::{Model, show_all};
use std::collections::BTreeSet;

pub(super) fn add(
    model: &mut dyn Model,
    name: &Name,
    date: EventDate,
    members: &BTreeSet<Index>,
) -> Result<CommandResult, CommandError> {
    // Resolve every index before touching the model.
    let attendees: Vec<Member> = members
        .iter()
        .map(|i| member_at(&*model, *i))
        .collect::<Result<_, _>>()?;

    let event = Event::new(name.clone(), date);
    if model.has_event(&event) {
        return Err(CommandError::DuplicateEvent);
    }
    let event = event.with_members(attendees.iter().map(|m| m.name().clone()));
    model.add_event(event.clone())?;
    log::info!("Added event {} with {} member(s)", event.name(), attendees.len());
    Ok(CommandResult::new(format!("New event added: {}", event)))
}

/// Looks up an event through the currently displayed event list.
fn event_at(model: &dyn Model, index: Index) -> Result<Event, CommandError> {
    let shown = model.filtered_event_list();
    index
        .checked(shown.len())
        .map(|i| shown[i].clone())
        .ok_or(CommandError::InvalidEventIndex)
}

pub(super) fn edit(
    model: &mut dyn Model,
    index: Index,
    name: Option<&Name>,
    date: Option<EventDate>,
    members: &BTreeSet<Index>,
) -> Result<CommandResult, CommandError> {
    let target = event_at(&*model, index)?;
    let attendees: Vec<Member> = members
        .iter()
        .map(|i| member_at(&*model, *i))
        .collect::<Result<_, _>>()?;

    let rescheduled = Event::new(
        name.cloned().unwrap_or_else(|| target.name().clone()),
        date.unwrap_or(target.date()),
    )
    .with_members(target.members().iter().cloned());
    if !target.is_same_event(&rescheduled) && model.has_event(&rescheduled) {
        return Err(CommandError::DuplicateEvent);
    }

    model.set_event(&target, rescheduled.clone())?;
    if !attendees.is_empty() {
        model.add_event_members(&rescheduled, &attendees)?;
    }
    let edited = rescheduled.with_members(attendees.iter().map(|m| m.name().clone()));
    log::info!("Edited event {} -> {}", target.name(), edited.name());
    Ok(CommandResult::new(format!("Edited Event: {}", edited)))
}

pub(super) fn delete(model: &mut dyn Model, index: Index) -> Result<CommandResult, CommandError> {
    let target = event_at(&*model, index)?;
    model.delete_event(&target)?;
    log::info!("Deleted event {}", target.name());
    Ok(CommandResult::new(format!("Deleted Event: {}", target)))
}

pub(super) fn list(model: &mut dyn Model) -> Result<CommandResult, CommandError> {
    model.update_filtered_event_list(show_all());
    let events = model.filtered_event_list();
    let mut feedback = format!("Listed {} event(s)", events.len());
    for (i, event) in events.iter().enumerate() {
        feedback.push_str(&format!("\n{}. {}", i + 1, event));
    }
    Ok(CommandResult::new(feedback))
}
