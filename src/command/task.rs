// File: src/command/task.rs
use super::{CommandResult, member_at};
use crate::error::CommandError;
use crate::model::{Index, Task};
use crate::store::{Model, show_all};

pub(super) fn add(
    model: &mut dyn Model,
    member: Index,
    task: &Task,
) -> Result<CommandResult, CommandError> {
    let owner = member_at(model, member)?;
    if model.has_task(&owner, task)? {
        return Err(CommandError::DuplicateTask {
            member: owner.name().to_string(),
        });
    }
    model.add_task(&owner, task.clone())?;
    log::info!("Added task '{}' to {}", task.name(), owner.name());
    Ok(CommandResult::new(format!(
        "New task added to {}: {}",
        owner.name(),
        task
    )))
}

pub(super) fn delete(
    model: &mut dyn Model,
    member: Index,
    task: Index,
) -> Result<CommandResult, CommandError> {
    let owner = member_at(model, member)?;
    let removed = model.delete_task_at(&owner, task)?;
    log::info!("Deleted task '{}' from {}", removed.name(), owner.name());
    Ok(CommandResult::new(format!(
        "Deleted task from {}: {}",
        owner.name(),
        removed
    )))
}

pub(super) fn toggle(
    model: &mut dyn Model,
    member: Index,
    task: Index,
) -> Result<CommandResult, CommandError> {
    let owner = member_at(model, member)?;
    let current = owner
        .tasks()
        .get(task.zero_based())
        .ok_or(CommandError::InvalidTaskIndex)?;
    let toggled = current.toggled();
    model.set_task_at(&owner, task, toggled.clone())?;
    let verb = if toggled.is_done() { "Marked" } else { "Unmarked" };
    Ok(CommandResult::new(format!(
        "{} task of {}: {}",
        verb,
        owner.name(),
        toggled
    )))
}

pub(super) fn list(model: &mut dyn Model, member: Index) -> Result<CommandResult, CommandError> {
    let owner = member_at(model, member)?;
    model.update_filtered_task_list(show_all());
    let tasks = model.filtered_task_list(&owner)?;
    let mut feedback = format!("Listed {} task(s) of {}", tasks.len(), owner.name());
    for (i, task) in tasks.iter().enumerate() {
        feedback.push_str(&format!("\n{}. {}", i + 1, task));
    }
    Ok(CommandResult::new(feedback))
}
