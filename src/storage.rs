// Manages the on-disk JSON snapshot of the roster.
//
// ⚠️ VERSION BUMP REQUIRED:
// Changes to the adapted records below require incrementing ROSTER_FILE_VERSION
// so older binaries refuse files they cannot read.
use crate::error::ConstraintViolation;
use crate::model::{Address, Email, Event, EventDate, Member, Name, Phone, Position, Task, TaskName};
use crate::store::AddressBook;
use anyhow::{Context, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::cell::Cell;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

// Version history:
// - v1: members with nested tasks, events referencing members by name
const ROSTER_FILE_VERSION: u32 = 1;

/// Persistence collaborator: hands out a fully validated snapshot and
/// writes one back.
pub trait Storage {
    /// `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<AddressBook>>;
    fn save(&self, book: &AddressBook) -> Result<()>;
}

// --- Adapted records ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct JsonAdaptedTask {
    task_name: String,
    #[serde(default)]
    is_done: bool,
}

impl JsonAdaptedTask {
    fn from_model(task: &Task) -> Self {
        Self {
            task_name: task.name().to_string(),
            is_done: task.is_done(),
        }
    }

    fn to_model(&self) -> Result<Task, ConstraintViolation> {
        Ok(Task::with_done(TaskName::parse(&self.task_name)?, self.is_done))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct JsonAdaptedMember {
    name: String,
    phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<String>,
    #[serde(default)]
    positions: Vec<String>,
    #[serde(default)]
    tasks: Vec<JsonAdaptedTask>,
}

impl JsonAdaptedMember {
    fn from_model(member: &Member) -> Self {
        Self {
            name: member.name().to_string(),
            phone: member.phone().to_string(),
            email: member.email().map(ToString::to_string),
            address: member.address().map(ToString::to_string),
            positions: member.positions().iter().map(ToString::to_string).collect(),
            tasks: member.tasks().iter().map(JsonAdaptedTask::from_model).collect(),
        }
    }

    /// Runs the same validators the command parsers use.
    fn to_model(&self) -> Result<Member, ConstraintViolation> {
        let positions = self
            .positions
            .iter()
            .map(|p| Position::parse(p))
            .collect::<Result<BTreeSet<_>, _>>()?;
        let tasks = self
            .tasks
            .iter()
            .map(JsonAdaptedTask::to_model)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Member::new(
            Name::parse(&self.name)?,
            Phone::parse(&self.phone)?,
            self.email.as_deref().map(Email::parse).transpose()?,
            self.address.as_deref().map(Address::parse).transpose()?,
            positions,
        )
        .with_tasks(tasks))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
struct JsonAdaptedEvent {
    name: String,
    date: String,
    #[serde(default)]
    members: Vec<String>,
}

impl JsonAdaptedEvent {
    fn from_model(event: &Event) -> Self {
        Self {
            name: event.name().to_string(),
            date: event.date().to_string(),
            members: event.members().iter().map(ToString::to_string).collect(),
        }
    }

    fn to_model(&self) -> Result<Event, ConstraintViolation> {
        let members = self
            .members
            .iter()
            .map(|m| Name::parse(m))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Event::new(Name::parse(&self.name)?, EventDate::parse(&self.date)?).with_members(members))
    }
}

/// Versioned envelope written to disk.
#[derive(Serialize, Deserialize)]
struct RosterFile {
    #[serde(default)]
    version: u32,
    members: Vec<JsonAdaptedMember>,
    #[serde(default)]
    events: Vec<JsonAdaptedEvent>,
}

impl RosterFile {
    fn from_model(book: &AddressBook) -> Self {
        Self {
            version: ROSTER_FILE_VERSION,
            members: book.members().iter().map(JsonAdaptedMember::from_model).collect(),
            events: book.events().iter().map(JsonAdaptedEvent::from_model).collect(),
        }
    }

    fn to_model(&self) -> Result<AddressBook> {
        let members = self
            .members
            .iter()
            .map(JsonAdaptedMember::to_model)
            .collect::<Result<Vec<_>, _>>()?;
        let events = self
            .events
            .iter()
            .map(JsonAdaptedEvent::to_model)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(AddressBook::from_parts(members, events)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    /// Never attempted to load
    Uninitialized,
    Success,
    /// Last load failed (deserialization error, invalid data, etc.)
    Failed,
}

/// JSON file storage guarded by a sidecar lock file.
///
/// After a failed load, `save` refuses to run so a roster that could not be
/// read is never overwritten.
#[derive(Debug)]
pub struct JsonStorage {
    path: PathBuf,
    load_state: Cell<LoadState>,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            load_state: Cell::new(LoadState::Uninitialized),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn can_save(&self) -> bool {
        match self.load_state.get() {
            LoadState::Uninitialized => true,
            LoadState::Success => true,
            LoadState::Failed => false,
        }
    }

    fn get_lock_path(file_path: &Path) -> PathBuf {
        let mut lock_path = file_path.to_path_buf();
        if let Some(ext) = lock_path.extension() {
            let mut new_ext = ext.to_os_string();
            new_ext.push(".lock");
            lock_path.set_extension(new_ext);
        } else {
            lock_path.set_extension("lock");
        }
        lock_path
    }

    pub fn with_lock<F, T>(file_path: &Path, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        if let Some(parent) = file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {:?}", parent))?;
        }
        let lock_path = Self::get_lock_path(file_path);
        let file = fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()?;
        let result = f();
        file.unlock()?;
        result
    }

    pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
        let path = path.as_ref();
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(tmp_path, path)?;
        Ok(())
    }

    fn read_snapshot(&self) -> Result<AddressBook> {
        Self::with_lock(&self.path, || {
            let json = fs::read_to_string(&self.path)?;
            let file: RosterFile = serde_json::from_str(&json)
                .with_context(|| format!("Failed to parse roster file {:?}", self.path))?;
            if file.version > ROSTER_FILE_VERSION {
                return Err(anyhow::anyhow!(
                    "Roster file {:?} has version {}, newer than supported version {}",
                    self.path,
                    file.version,
                    ROSTER_FILE_VERSION
                ));
            }
            file.to_model()
                .with_context(|| format!("Illegal value in roster file {:?}", self.path))
        })
    }
}

impl Storage for JsonStorage {
    fn load(&self) -> Result<Option<AddressBook>> {
        if !self.path.exists() {
            self.load_state.set(LoadState::Success);
            return Ok(None);
        }
        let result = self.read_snapshot();
        match &result {
            Ok(book) => {
                log::info!(
                    "Loaded {} member(s) and {} event(s) from {:?}",
                    book.members().len(),
                    book.events().len(),
                    self.path
                );
                self.load_state.set(LoadState::Success);
            }
            Err(e) => {
                log::warn!("Failed to load roster from {:?}: {:#}", self.path, e);
                self.load_state.set(LoadState::Failed);
            }
        }
        result.map(Some)
    }

    fn save(&self, book: &AddressBook) -> Result<()> {
        if !self.can_save() {
            return Err(anyhow::anyhow!(
                "Cannot save {:?}: previous load failed. This prevents overwriting data that couldn't be read.",
                self.path
            ));
        }
        Self::with_lock(&self.path, || {
            let json = serde_json::to_string_pretty(&RosterFile::from_model(book))?;
            Self::atomic_write(&self.path, json)?;
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{AppContext, TestContext};

    fn sample_book() -> AddressBook {
        let positions: BTreeSet<Position> = [Position::parse("Treasurer").unwrap()].into();
        let alice = Member::new(
            Name::parse("Alice Pauline").unwrap(),
            Phone::parse("94351253").unwrap(),
            Some(Email::parse("alice@example.com").unwrap()),
            Some(Address::parse("123, Jurong West Ave 6, #08-111").unwrap()),
            positions,
        )
        .with_tasks(vec![
            Task::new(TaskName::parse("Prepare budget").unwrap()),
            Task::with_done(TaskName::parse("Book venue").unwrap(), true),
        ]);
        let bob = Member::new(
            Name::parse("Benson Meier").unwrap(),
            Phone::parse("98765432").unwrap(),
            None,
            None,
            BTreeSet::new(),
        );
        let event = Event::new(
            Name::parse("Welcome Tea").unwrap(),
            EventDate::parse("2024-08-12").unwrap(),
        )
        .with_members([alice.name().clone()]);
        AddressBook::from_parts(vec![alice, bob], vec![event]).unwrap()
    }

    fn storage_in(ctx: &TestContext) -> JsonStorage {
        JsonStorage::new(ctx.get_roster_path().unwrap())
    }

    #[test]
    fn test_missing_file_loads_as_none() {
        let ctx = TestContext::new();
        let storage = storage_in(&ctx);
        assert!(storage.load().unwrap().is_none());
        assert!(storage.can_save());
    }

    #[test]
    fn test_save_and_load_snapshot() {
        let ctx = TestContext::new();
        let storage = storage_in(&ctx);
        let book = sample_book();

        storage.save(&book).unwrap();
        let loaded = storage.load().unwrap().unwrap();

        assert_eq!(loaded, book);
        assert_eq!(loaded.members()[0].tasks().len(), 2);
        assert!(loaded.members()[0].tasks()[1].is_done());
    }

    #[test]
    fn test_task_fields_use_camel_case() {
        let ctx = TestContext::new();
        let storage = storage_in(&ctx);
        storage.save(&sample_book()).unwrap();

        let json = fs::read_to_string(storage.path()).unwrap();
        assert!(json.contains("\"taskName\""));
        assert!(json.contains("\"isDone\""));
        assert!(json.contains("\"version\": 1"));
    }

    #[test]
    fn test_invalid_task_name_is_constraint_violation() {
        let ctx = TestContext::new();
        let storage = storage_in(&ctx);
        let json = r#"{
            "version": 1,
            "members": [
                { "name": "Alice", "phone": "12345678",
                  "tasks": [ { "taskName": "   ", "isDone": false } ] }
            ]
        }"#;
        fs::write(storage.path(), json).unwrap();

        let err = storage.load().unwrap_err();
        let violation = err
            .downcast_ref::<ConstraintViolation>()
            .expect("constraint violation in error chain");
        assert_eq!(violation.message, TaskName::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_duplicate_members_are_rejected() {
        let ctx = TestContext::new();
        let storage = storage_in(&ctx);
        let json = r#"{
            "version": 1,
            "members": [
                { "name": "Alice", "phone": "12345678" },
                { "name": "alice", "phone": "87654321" }
            ]
        }"#;
        fs::write(storage.path(), json).unwrap();

        assert!(storage.load().is_err());
    }

    #[test]
    fn test_tasks_differing_only_in_done_flag_are_rejected() {
        let ctx = TestContext::new();
        let storage = storage_in(&ctx);
        let json = r#"{
            "version": 1,
            "members": [
                { "name": "Alice", "phone": "12345678",
                  "tasks": [ { "taskName": "Report", "isDone": true },
                             { "taskName": "report", "isDone": false } ] }
            ]
        }"#;
        fs::write(storage.path(), json).unwrap();

        assert!(storage.load().is_err());
    }

    #[test]
    fn test_save_blocked_after_failed_load() {
        let ctx = TestContext::new();
        let storage = storage_in(&ctx);
        fs::write(storage.path(), "{ not json").unwrap();

        assert!(storage.load().is_err());
        assert!(!storage.can_save());
        assert!(storage.save(&AddressBook::new()).is_err());

        let on_disk = fs::read_to_string(storage.path()).unwrap();
        assert_eq!(on_disk, "{ not json");
    }

    #[test]
    fn test_newer_version_is_refused() {
        let ctx = TestContext::new();
        let storage = storage_in(&ctx);
        fs::write(storage.path(), r#"{ "version": 99, "members": [] }"#).unwrap();

        let err = storage.load().unwrap_err();
        assert!(err.to_string().contains("newer than supported"));
    }

    #[test]
    fn test_unversioned_file_is_read() {
        let ctx = TestContext::new();
        let storage = storage_in(&ctx);
        fs::write(
            storage.path(),
            r#"{ "members": [ { "name": "Carl Kurz", "phone": "95352563" } ] }"#,
        )
        .unwrap();

        let book = storage.load().unwrap().unwrap();
        assert_eq!(book.members().len(), 1);
        assert_eq!(book.members()[0].name().as_str(), "Carl Kurz");
    }
}
