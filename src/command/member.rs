// File: src/command/member.rs
use super::{CommandResult, member_at};
use crate::error::CommandError;
use crate::model::{Address, Email, Index, Member, Name, NameContainsKeywords, Phone, Position};
use crate::store::{AddressBook, Model, show_all};
use std::collections::BTreeSet;

pub const MESSAGE_ADD_SUCCESS: &str = "New member added: ";
pub const MESSAGE_DELETE_SUCCESS: &str = "Deleted Member: ";
pub const MESSAGE_EDIT_SUCCESS: &str = "Edited Member: ";
pub const MESSAGE_LIST_SUCCESS: &str = "Listed all members";
pub const MESSAGE_CLEAR_SUCCESS: &str = "Roster has been cleared!";

/// Fields to overwrite on an existing member. `None` keeps the old value;
/// `positions: Some(empty)` clears every position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditMemberDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub positions: Option<BTreeSet<Position>>,
}

impl EditMemberDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.positions.is_some()
    }

    /// Builds the replacement member. Tasks carry over unchanged.
    pub fn apply_to(&self, target: &Member) -> Member {
        Member::new(
            self.name.clone().unwrap_or_else(|| target.name().clone()),
            self.phone.clone().unwrap_or_else(|| target.phone().clone()),
            self.email.clone().or_else(|| target.email().cloned()),
            self.address.clone().or_else(|| target.address().cloned()),
            self.positions
                .clone()
                .unwrap_or_else(|| target.positions().clone()),
        )
        .with_tasks(target.tasks().to_vec())
    }
}

pub(super) fn add(model: &mut dyn Model, candidate: &Member) -> Result<CommandResult, CommandError> {
    if model.has_member(candidate) {
        return Err(CommandError::DuplicateMember);
    }
    model.add_member(candidate.clone())?;
    log::info!("Added member {}", candidate.name());
    Ok(CommandResult::new(format!("{}{}", MESSAGE_ADD_SUCCESS, candidate)))
}

pub(super) fn delete(model: &mut dyn Model, index: Index) -> Result<CommandResult, CommandError> {
    let target = member_at(model, index)?;
    model.delete_member(&target)?;
    log::info!("Deleted member {}", target.name());
    Ok(CommandResult::new(format!("{}{}", MESSAGE_DELETE_SUCCESS, target)))
}

pub(super) fn edit(
    model: &mut dyn Model,
    index: Index,
    descriptor: &EditMemberDescriptor,
) -> Result<CommandResult, CommandError> {
    let target = member_at(model, index)?;
    let edited = descriptor.apply_to(&target);
    if !target.is_same_member(&edited) && model.has_member(&edited) {
        return Err(CommandError::DuplicateMember);
    }
    model.set_member(&target, edited.clone())?;
    model.update_filtered_member_list(show_all());
    log::info!("Edited member {} -> {}", target.name(), edited.name());
    Ok(CommandResult::new(format!("{}{}", MESSAGE_EDIT_SUCCESS, edited)))
}

pub(super) fn find(
    model: &mut dyn Model,
    predicate: &NameContainsKeywords,
) -> Result<CommandResult, CommandError> {
    let predicate = predicate.clone();
    model.update_filtered_member_list(Box::new(move |m: &Member| predicate.test(m)));
    let count = model.filtered_member_list().len();
    Ok(CommandResult::new(format!("{} members listed!", count)))
}

pub(super) fn list(model: &mut dyn Model) -> Result<CommandResult, CommandError> {
    model.update_filtered_member_list(show_all());
    Ok(CommandResult::new(MESSAGE_LIST_SUCCESS))
}

pub(super) fn clear(model: &mut dyn Model) -> Result<CommandResult, CommandError> {
    model.set_address_book(AddressBook::new());
    model.update_filtered_member_list(show_all());
    model.update_filtered_event_list(show_all());
    log::info!("Cleared roster");
    Ok(CommandResult::new(MESSAGE_CLEAR_SUCCESS))
}
