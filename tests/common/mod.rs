// File: tests/common/mod.rs
#![allow(dead_code)]
use crewbook::model::{Address, Email, Member, Name, Phone, Position, Task, TaskName};
use crewbook::store::{AddressBook, ModelManager};

pub fn member(name: &str, phone: &str) -> Member {
    Member::new(
        Name::parse(name).unwrap(),
        Phone::parse(phone).unwrap(),
        None,
        None,
        Default::default(),
    )
}

pub fn full_member(name: &str, phone: &str, email: &str, address: &str, positions: &[&str]) -> Member {
    Member::new(
        Name::parse(name).unwrap(),
        Phone::parse(phone).unwrap(),
        Some(Email::parse(email).unwrap()),
        Some(Address::parse(address).unwrap()),
        positions.iter().map(|p| Position::parse(p).unwrap()).collect(),
    )
}

pub fn task(name: &str) -> Task {
    Task::new(TaskName::parse(name).unwrap())
}

pub fn alice() -> Member {
    full_member(
        "Alice Pauline",
        "94351253",
        "alice@example.com",
        "123, Jurong West Ave 6, #08-111",
        &["Treasurer"],
    )
}

pub fn benson() -> Member {
    full_member(
        "Benson Meier",
        "98765432",
        "johnd@example.com",
        "311, Clementi Ave 2, #02-25",
        &["President", "Secretary"],
    )
    .with_tasks(vec![task("Book venue"), task("Order shirts")])
}

pub fn carl() -> Member {
    member("Carl Kurz", "95352563")
}

pub fn daniel() -> Member {
    member("Daniel Meier", "87652533")
}

pub fn elle() -> Member {
    member("Elle Meyer", "9482224")
}

pub fn fiona() -> Member {
    member("Fiona Kunz", "9482427")
}

pub fn george() -> Member {
    member("George Best", "9482442")
}

pub fn typical_members() -> Vec<Member> {
    vec![alice(), benson(), carl(), daniel(), elle(), fiona(), george()]
}

pub fn typical_book() -> AddressBook {
    AddressBook::from_parts(typical_members(), Vec::new()).unwrap()
}

pub fn typical_model() -> ModelManager {
    ModelManager::new(typical_book())
}

use crewbook::error::CommandError;
use crewbook::model::{Event, Index};
use crewbook::store::{Model, Predicate};

/// Delegates to a real `ModelManager` and records the name of every
/// mutating call, so tests can assert that a failed command changed nothing.
#[derive(Default)]
pub struct RecordingModel {
    pub inner: ModelManager,
    pub mutations: Vec<&'static str>,
}

impl RecordingModel {
    pub fn new(inner: ModelManager) -> Self {
        Self {
            inner,
            mutations: Vec::new(),
        }
    }

    fn record<T>(
        &mut self,
        call: &'static str,
        result: Result<T, CommandError>,
    ) -> Result<T, CommandError> {
        if result.is_ok() {
            self.mutations.push(call);
        }
        result
    }
}

impl Model for RecordingModel {
    fn address_book(&self) -> &AddressBook {
        self.inner.address_book()
    }

    fn set_address_book(&mut self, book: AddressBook) {
        self.mutations.push("set_address_book");
        self.inner.set_address_book(book);
    }

    fn has_member(&self, member: &Member) -> bool {
        self.inner.has_member(member)
    }

    fn add_member(&mut self, member: Member) -> Result<(), CommandError> {
        let r = self.inner.add_member(member);
        self.record("add_member", r)
    }

    fn delete_member(&mut self, target: &Member) -> Result<(), CommandError> {
        let r = self.inner.delete_member(target);
        self.record("delete_member", r)
    }

    fn set_member(&mut self, target: &Member, edited: Member) -> Result<(), CommandError> {
        let r = self.inner.set_member(target, edited);
        self.record("set_member", r)
    }

    fn filtered_member_list(&self) -> Vec<&Member> {
        self.inner.filtered_member_list()
    }

    fn update_filtered_member_list(&mut self, predicate: Predicate<Member>) {
        self.inner.update_filtered_member_list(predicate);
    }

    fn has_task(&self, member: &Member, task: &Task) -> Result<bool, CommandError> {
        self.inner.has_task(member, task)
    }

    fn add_task(&mut self, member: &Member, task: Task) -> Result<(), CommandError> {
        let r = self.inner.add_task(member, task);
        self.record("add_task", r)
    }

    fn delete_task(&mut self, member: &Member, task: &Task) -> Result<(), CommandError> {
        let r = self.inner.delete_task(member, task);
        self.record("delete_task", r)
    }

    fn delete_task_at(&mut self, member: &Member, index: Index) -> Result<Task, CommandError> {
        let r = self.inner.delete_task_at(member, index);
        self.record("delete_task_at", r)
    }

    fn set_task(&mut self, member: &Member, target: &Task, edited: Task) -> Result<(), CommandError> {
        let r = self.inner.set_task(member, target, edited);
        self.record("set_task", r)
    }

    fn set_task_at(
        &mut self,
        member: &Member,
        index: Index,
        edited: Task,
    ) -> Result<Task, CommandError> {
        let r = self.inner.set_task_at(member, index, edited);
        self.record("set_task_at", r)
    }

    fn filtered_task_list(&self, member: &Member) -> Result<Vec<&Task>, CommandError> {
        self.inner.filtered_task_list(member)
    }

    fn update_filtered_task_list(&mut self, predicate: Predicate<Task>) {
        self.inner.update_filtered_task_list(predicate);
    }

    fn has_event(&self, event: &Event) -> bool {
        self.inner.has_event(event)
    }

    fn add_event(&mut self, event: Event) -> Result<(), CommandError> {
        let r = self.inner.add_event(event);
        self.record("add_event", r)
    }

    fn delete_event(&mut self, target: &Event) -> Result<(), CommandError> {
        let r = self.inner.delete_event(target);
        self.record("delete_event", r)
    }

    fn set_event(&mut self, target: &Event, edited: Event) -> Result<(), CommandError> {
        let r = self.inner.set_event(target, edited);
        self.record("set_event", r)
    }

    fn add_event_members(&mut self, event: &Event, members: &[Member]) -> Result<(), CommandError> {
        let r = self.inner.add_event_members(event, members);
        self.record("add_event_members", r)
    }

    fn filtered_event_list(&self) -> Vec<&Event> {
        self.inner.filtered_event_list()
    }

    fn update_filtered_event_list(&mut self, predicate: Predicate<Event>) {
        self.inner.update_filtered_event_list(predicate);
    }
}
