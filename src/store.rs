// File: src/store.rs
//! In-memory roster and the `Model` capability commands are applied to.
//!
//! `ModelManager` is the single owner of every collection. Task operations
//! name the owning member explicitly; the member is looked up by loose
//! identity on every call, so there is no "currently loaded" task list to go
//! stale.
use crate::error::CommandError;
use crate::model::{Event, Index, Member, Name, Task};

/// Predicate driving a filtered view. Views are recomputed on each read.
pub type Predicate<T> = Box<dyn Fn(&T) -> bool>;

pub fn show_all<T>() -> Predicate<T> {
    Box::new(|_| true)
}

/// A full snapshot of the roster: members in insertion order and events.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    members: Vec<Member>,
    events: Vec<Event>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a snapshot, rejecting members, tasks of one member, or events
    /// that collide under their loose identity.
    pub fn from_parts(members: Vec<Member>, events: Vec<Event>) -> Result<Self, CommandError> {
        let mut book = Self::new();
        for member in members {
            if book.has_member(&member) {
                return Err(CommandError::DuplicateMember);
            }
            let tasks = member.tasks();
            if tasks
                .iter()
                .enumerate()
                .any(|(i, t)| tasks[..i].iter().any(|u| u.is_same_task(t)))
            {
                return Err(CommandError::DuplicateTask {
                    member: member.name().to_string(),
                });
            }
            book.members.push(member);
        }
        for event in events {
            if book.has_event(&event) {
                return Err(CommandError::DuplicateEvent);
            }
            if let Some(missing) = book.first_unknown_member(&event) {
                return Err(CommandError::MemberNotFound {
                    name: missing.to_string(),
                });
            }
            book.events.push(event);
        }
        Ok(book)
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn has_member(&self, member: &Member) -> bool {
        self.members.iter().any(|m| m.is_same_member(member))
    }

    pub fn has_event(&self, event: &Event) -> bool {
        self.events.iter().any(|e| e.is_same_event(event))
    }

    /// The first member name on `event` that matches nobody in the roster.
    fn first_unknown_member<'a>(&self, event: &'a Event) -> Option<&'a Name> {
        event
            .members()
            .iter()
            .find(|n| !self.members.iter().any(|m| m.name().eq_ignore_case(n)))
    }

    fn member_position(&self, member: &Member) -> Option<usize> {
        self.members.iter().position(|m| m.is_same_member(member))
    }

    fn member_tasks_mut(&mut self, member: &Member) -> Result<&mut Vec<Task>, CommandError> {
        let idx = self
            .member_position(member)
            .ok_or_else(|| CommandError::MemberNotFound {
                name: member.name().to_string(),
            })?;
        Ok(self.members[idx].tasks_mut())
    }
}

/// Everything a command may ask of the roster.
pub trait Model {
    fn address_book(&self) -> &AddressBook;
    fn set_address_book(&mut self, book: AddressBook);

    // --- Members ---
    fn has_member(&self, member: &Member) -> bool;
    fn add_member(&mut self, member: Member) -> Result<(), CommandError>;
    fn delete_member(&mut self, target: &Member) -> Result<(), CommandError>;
    fn set_member(&mut self, target: &Member, edited: Member) -> Result<(), CommandError>;
    fn filtered_member_list(&self) -> Vec<&Member>;
    fn update_filtered_member_list(&mut self, predicate: Predicate<Member>);

    // --- Tasks ---
    fn has_task(&self, member: &Member, task: &Task) -> Result<bool, CommandError>;
    fn add_task(&mut self, member: &Member, task: Task) -> Result<(), CommandError>;
    fn delete_task(&mut self, member: &Member, task: &Task) -> Result<(), CommandError>;
    fn delete_task_at(&mut self, member: &Member, index: Index) -> Result<Task, CommandError>;
    fn set_task(&mut self, member: &Member, target: &Task, edited: Task)
    -> Result<(), CommandError>;
    fn set_task_at(
        &mut self,
        member: &Member,
        index: Index,
        edited: Task,
    ) -> Result<Task, CommandError>;
    fn filtered_task_list(&self, member: &Member) -> Result<Vec<&Task>, CommandError>;
    fn update_filtered_task_list(&mut self, predicate: Predicate<Task>);

    // --- Events ---
    fn has_event(&self, event: &Event) -> bool;
    fn add_event(&mut self, event: Event) -> Result<(), CommandError>;
    fn delete_event(&mut self, target: &Event) -> Result<(), CommandError>;
    fn set_event(&mut self, target: &Event, edited: Event) -> Result<(), CommandError>;
    fn add_event_members(&mut self, event: &Event, members: &[Member])
    -> Result<(), CommandError>;
    fn filtered_event_list(&self) -> Vec<&Event>;
    fn update_filtered_event_list(&mut self, predicate: Predicate<Event>);
}

pub struct ModelManager {
    book: AddressBook,
    member_filter: Predicate<Member>,
    task_filter: Predicate<Task>,
    event_filter: Predicate<Event>,
}

impl Default for ModelManager {
    fn default() -> Self {
        Self::new(AddressBook::new())
    }
}

impl ModelManager {
    pub fn new(book: AddressBook) -> Self {
        Self {
            book,
            member_filter: show_all(),
            task_filter: show_all(),
            event_filter: show_all(),
        }
    }
}

impl Model for ModelManager {
    fn address_book(&self) -> &AddressBook {
        &self.book
    }

    fn set_address_book(&mut self, book: AddressBook) {
        self.book = book;
    }

    fn has_member(&self, member: &Member) -> bool {
        self.book.has_member(member)
    }

    fn add_member(&mut self, member: Member) -> Result<(), CommandError> {
        if self.book.has_member(&member) {
            return Err(CommandError::DuplicateMember);
        }
        self.book.members.push(member);
        self.member_filter = show_all();
        Ok(())
    }

    fn delete_member(&mut self, target: &Member) -> Result<(), CommandError> {
        let idx = self
            .book
            .members
            .iter()
            .position(|m| m == target)
            .ok_or_else(|| CommandError::MemberNotFound {
                name: target.name().to_string(),
            })?;
        let removed = self.book.members.remove(idx);
        for event in &mut self.book.events {
            event
                .members_mut()
                .retain(|n| !n.eq_ignore_case(removed.name()));
        }
        Ok(())
    }

    fn set_member(&mut self, target: &Member, edited: Member) -> Result<(), CommandError> {
        let idx = self
            .book
            .members
            .iter()
            .position(|m| m == target)
            .ok_or_else(|| CommandError::MemberNotFound {
                name: target.name().to_string(),
            })?;
        if !target.is_same_member(&edited) && self.book.has_member(&edited) {
            return Err(CommandError::DuplicateMember);
        }
        if target.name() != edited.name() {
            for event in &mut self.book.events {
                for name in event.members_mut() {
                    if name.eq_ignore_case(target.name()) {
                        *name = edited.name().clone();
                    }
                }
            }
        }
        self.book.members[idx] = edited;
        Ok(())
    }

    fn filtered_member_list(&self) -> Vec<&Member> {
        self.book
            .members
            .iter()
            .filter(|m| (self.member_filter)(*m))
            .collect()
    }

    fn update_filtered_member_list(&mut self, predicate: Predicate<Member>) {
        self.member_filter = predicate;
    }

    fn has_task(&self, member: &Member, task: &Task) -> Result<bool, CommandError> {
        let idx = self
            .book
            .member_position(member)
            .ok_or_else(|| CommandError::MemberNotFound {
                name: member.name().to_string(),
            })?;
        Ok(self.book.members[idx]
            .tasks()
            .iter()
            .any(|t| t.is_same_task(task)))
    }

    fn add_task(&mut self, member: &Member, task: Task) -> Result<(), CommandError> {
        let tasks = self.book.member_tasks_mut(member)?;
        if tasks.iter().any(|t| t.is_same_task(&task)) {
            return Err(CommandError::DuplicateTask {
                member: member.name().to_string(),
            });
        }
        tasks.push(task);
        Ok(())
    }

    fn delete_task(&mut self, member: &Member, task: &Task) -> Result<(), CommandError> {
        let tasks = self.book.member_tasks_mut(member)?;
        let idx = tasks
            .iter()
            .position(|t| t == task)
            .ok_or_else(|| CommandError::TaskNotFound {
                name: task.name().to_string(),
            })?;
        tasks.remove(idx);
        Ok(())
    }

    fn delete_task_at(&mut self, member: &Member, index: Index) -> Result<Task, CommandError> {
        let tasks = self.book.member_tasks_mut(member)?;
        let idx = index
            .checked(tasks.len())
            .ok_or(CommandError::InvalidTaskIndex)?;
        Ok(tasks.remove(idx))
    }

    fn set_task(
        &mut self,
        member: &Member,
        target: &Task,
        edited: Task,
    ) -> Result<(), CommandError> {
        let tasks = self.book.member_tasks_mut(member)?;
        let idx = tasks
            .iter()
            .position(|t| t == target)
            .ok_or_else(|| CommandError::TaskNotFound {
                name: target.name().to_string(),
            })?;
        if tasks
            .iter()
            .enumerate()
            .any(|(i, t)| i != idx && t.is_same_task(&edited))
        {
            return Err(CommandError::DuplicateTask {
                member: member.name().to_string(),
            });
        }
        tasks[idx] = edited;
        Ok(())
    }

    fn set_task_at(
        &mut self,
        member: &Member,
        index: Index,
        edited: Task,
    ) -> Result<Task, CommandError> {
        let target = {
            let tasks = self.book.member_tasks_mut(member)?;
            let idx = index
                .checked(tasks.len())
                .ok_or(CommandError::InvalidTaskIndex)?;
            tasks[idx].clone()
        };
        self.set_task(member, &target, edited)?;
        Ok(target)
    }

    fn filtered_task_list(&self, member: &Member) -> Result<Vec<&Task>, CommandError> {
        let idx = self
            .book
            .member_position(member)
            .ok_or_else(|| CommandError::MemberNotFound {
                name: member.name().to_string(),
            })?;
        Ok(self.book.members[idx]
            .tasks()
            .iter()
            .filter(|t| (self.task_filter)(*t))
            .collect())
    }

    fn update_filtered_task_list(&mut self, predicate: Predicate<Task>) {
        self.task_filter = predicate;
    }

    fn has_event(&self, event: &Event) -> bool {
        self.book.has_event(event)
    }

    fn add_event(&mut self, event: Event) -> Result<(), CommandError> {
        if self.book.has_event(&event) {
            return Err(CommandError::DuplicateEvent);
        }
        if let Some(missing) = self.book.first_unknown_member(&event) {
            return Err(CommandError::MemberNotFound {
                name: missing.to_string(),
            });
        }
        self.book.events.push(event);
        self.event_filter = show_all();
        Ok(())
    }

    fn delete_event(&mut self, target: &Event) -> Result<(), CommandError> {
        let idx = self
            .book
            .events
            .iter()
            .position(|e| e == target)
            .ok_or_else(|| CommandError::EventNotFound {
                name: target.name().to_string(),
            })?;
        self.book.events.remove(idx);
        Ok(())
    }

    fn set_event(&mut self, target: &Event, edited: Event) -> Result<(), CommandError> {
        let idx = self
            .book
            .events
            .iter()
            .position(|e| e == target)
            .ok_or_else(|| CommandError::EventNotFound {
                name: target.name().to_string(),
            })?;
        if !target.is_same_event(&edited) && self.book.has_event(&edited) {
            return Err(CommandError::DuplicateEvent);
        }
        self.book.events[idx] = edited;
        Ok(())
    }

    fn add_event_members(&mut self, event: &Event, members: &[Member]) -> Result<(), CommandError> {
        if let Some(missing) = members.iter().find(|m| !self.book.has_member(m)) {
            return Err(CommandError::MemberNotFound {
                name: missing.name().to_string(),
            });
        }
        let edited = event
            .clone()
            .with_members(members.iter().map(|m| m.name().clone()));
        self.set_event(event, edited)
    }

    fn filtered_event_list(&self) -> Vec<&Event> {
        self.book
            .events
            .iter()
            .filter(|e| (self.event_filter)(*e))
            .collect()
    }

    fn update_filtered_event_list(&mut self, predicate: Predicate<Event>) {
        self.event_filter = predicate;
    }
}
