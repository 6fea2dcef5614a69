// File: src/model/item.rs
//! Members, their tasks, and events.
//!
//! These are value objects: edits build a replacement and the model swaps it
//! in. Only the model reaches into a member's task list directly.
use crate::model::fields::{Address, Email, EventDate, Name, Phone, Position, TaskName};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    name: TaskName,
    done: bool,
}

impl Task {
    pub fn new(name: TaskName) -> Self {
        Self { name, done: false }
    }

    pub fn with_done(name: TaskName, done: bool) -> Self {
        Self { name, done }
    }

    pub fn name(&self) -> &TaskName {
        &self.name
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Same task with the done flag flipped.
    pub fn toggled(&self) -> Self {
        Self {
            name: self.name.clone(),
            done: !self.done,
        }
    }

    /// Loose identity within one member's list: names equal ignoring case.
    /// The done flag is not part of it.
    pub fn is_same_task(&self, other: &Task) -> bool {
        self.name.eq_ignore_case(&other.name)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.done { 'X' } else { ' ' };
        write!(f, "[{}] {}", mark, self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    name: Name,
    phone: Phone,
    email: Option<Email>,
    address: Option<Address>,
    positions: BTreeSet<Position>,
    tasks: Vec<Task>,
}

impl Member {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Option<Email>,
        address: Option<Address>,
        positions: BTreeSet<Position>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            positions,
            tasks: Vec::new(),
        }
    }

    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> &Phone {
        &self.phone
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn positions(&self) -> &BTreeSet<Position> {
        &self.positions
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub(crate) fn tasks_mut(&mut self) -> &mut Vec<Task> {
        &mut self.tasks
    }

    /// Loose identity used for duplicate detection: names equal ignoring case.
    /// Structural equality (`==`) compares every field including tasks.
    pub fn is_same_member(&self, other: &Member) -> bool {
        self.name.eq_ignore_case(&other.name)
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; Phone: {}", self.name, self.phone)?;
        if let Some(email) = &self.email {
            write!(f, "; Email: {}", email)?;
        }
        if let Some(address) = &self.address {
            write!(f, "; Address: {}", address)?;
        }
        if !self.positions.is_empty() {
            f.write_str("; Positions: ")?;
            for position in &self.positions {
                write!(f, "[{}]", position)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    name: Name,
    date: EventDate,
    members: Vec<Name>,
}

impl Event {
    pub fn new(name: Name, date: EventDate) -> Self {
        Self {
            name,
            date,
            members: Vec::new(),
        }
    }

    /// Attaches members by name; repeated names (ignoring case) are dropped.
    pub fn with_members<I>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = Name>,
    {
        for name in names {
            if !self.members.iter().any(|n| n.eq_ignore_case(&name)) {
                self.members.push(name);
            }
        }
        self
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn date(&self) -> EventDate {
        self.date
    }

    pub fn members(&self) -> &[Name] {
        &self.members
    }

    pub fn involves(&self, member: &Name) -> bool {
        self.members.iter().any(|n| n.eq_ignore_case(member))
    }

    pub(crate) fn members_mut(&mut self) -> &mut Vec<Name> {
        &mut self.members
    }

    /// Loose identity: same name ignoring case on the same date.
    pub fn is_same_event(&self, other: &Event) -> bool {
        self.name.eq_ignore_case(&other.name) && self.date == other.date
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.name, self.date)?;
        if !self.members.is_empty() {
            let names: Vec<&str> = self.members.iter().map(Name::as_str).collect();
            write!(f, "; Members: {}", names.join(", "))?;
        }
        Ok(())
    }
}
